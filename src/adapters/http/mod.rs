//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; `app_router` merges them and wraps the
//! result in the request-processing stages, outermost first:
//!
//! ```text
//! TraceLayer → CorsLayer → TimeoutLayer → auth_middleware → handlers
//! ```

pub mod actuator;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod middleware;
pub mod user;

pub use actuator::actuator_router;
pub use auth::{auth_router, AuthAppState};
pub use catalog::{catalog_router, CatalogAppState};
pub use error::{ApiError, ErrorResponse, MessageResponse};
pub use middleware::{AuthGate, PublicRoutes, RequireAuth};
pub use user::{user_router, UserAppState};

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::{PasswordHasher, ProductRepository, SessionStore, UserRepository};

/// Everything the HTTP surface needs from the rest of the application.
#[derive(Clone)]
pub struct HttpDependencies {
    pub sessions: Arc<dyn SessionStore>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
}

/// Builds the complete application router.
pub fn app_router(deps: HttpDependencies, public: PublicRoutes, server: &ServerConfig) -> Router {
    let gate = AuthGate::new(deps.sessions.clone(), public);

    let routes = Router::new()
        .merge(actuator_router())
        .merge(auth_router(AuthAppState {
            users: deps.users.clone(),
            hasher: deps.hasher.clone(),
            sessions: deps.sessions.clone(),
        }))
        .merge(user_router(UserAppState {
            users: deps.users.clone(),
            hasher: deps.hasher.clone(),
        }))
        .merge(catalog_router(CatalogAppState {
            products: deps.products,
        }));

    routes.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&server.allowed_origins()))
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(axum::middleware::from_fn_with_state(
                gate,
                middleware::auth_middleware,
            )),
    )
}

/// CORS for the configured origins. `*` allows any origin; an empty list
/// allows none.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
