//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the storefront domain.

mod auth;
mod errors;
mod ids;
mod pagination;

pub use auth::{AuthError, Identity, SessionToken};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ProductId, UserId};
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
