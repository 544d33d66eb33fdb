//! Axum router configuration for user endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_user, delete_user, get_user, list_users, update_user, UserAppState};

/// Create the user API router.
///
/// # Routes (require authentication)
/// - `GET /` - List users
/// - `POST /` - Create a user
/// - `GET /:id` - Get a user
/// - `PUT /:id` - Update a user
/// - `DELETE /:id` - Delete a user
pub fn user_routes() -> Router<UserAppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// The user router mounted at `/user`, with its state applied.
pub fn user_router(state: UserAppState) -> Router {
    Router::new().nest("/user", user_routes()).with_state(state)
}
