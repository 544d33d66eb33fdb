//! HTTP middleware for axum.
//!
//! - `auth` - Authentication gate, middleware and extractor

pub mod auth;

pub use auth::{
    auth_middleware, unauthorized, AuthGate, AuthRejection, GateDecision, PublicRoutes,
    RequireAuth, RouteClass, BEARER_PREFIX, REJECTION_BODY,
};
