//! User management HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{UserRequest, UserResponse};
pub use handlers::UserAppState;
pub use routes::{user_router, user_routes};
