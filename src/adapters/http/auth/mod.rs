//! Authentication HTTP adapter - register, login, logout, change-password.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChangePasswordRequest, LoginRequest, RegisterRequest, TokenResponse};
pub use handlers::{
    AuthApiError, AuthAppState, MSG_EMAIL_NOT_FOUND, MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIALS,
    MSG_LOGGED_OUT, MSG_MISSING_FIELDS, MSG_PASSWORD_CHANGED,
};
pub use routes::{auth_router, auth_routes};
