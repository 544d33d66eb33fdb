//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::SecretString;

use crate::adapters::http::error::{ApiError, MessageResponse};
use crate::application::handlers::user::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler, GetUserHandler,
    GetUserQuery, ListUsersHandler, UpdateUserCommand, UpdateUserHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{NewUser, UserChanges};
use crate::ports::{PasswordHasher, UserRepository};

use super::dto::{UserRequest, UserResponse};

#[derive(Clone)]
pub struct UserAppState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl UserAppState {
    pub fn list_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn get_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn create_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn update_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn delete_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }
}

/// GET /user - List all users
pub async fn list_users(
    State(state): State<UserAppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.list_handler().handle().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/:id - Get one user
pub async fn get_user(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = UserId::new(id);
    let user = state
        .get_handler()
        .handle(GetUserQuery { id })
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(user.into()))
}

/// POST /user - Create a user
pub async fn create_user(
    State(state): State<UserAppState>,
    Json(request): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = NewUser::new(
        request.first_name,
        request.last_name,
        request.email,
        request
            .password
            .unwrap_or_else(|| SecretString::new(String::new())),
    )?;

    let created = state.create_handler().handle(CreateUserCommand { user }).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

/// PUT /user/:id - Replace a user's fields
pub async fn update_user(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let changes = UserChanges::new(
        request.first_name,
        request.last_name,
        request.email,
        request.password,
    )?;

    let updated = state
        .update_handler()
        .handle(UpdateUserCommand {
            id: UserId::new(id),
            changes,
        })
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /user/:id - Remove a user
pub async fn delete_user(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = UserId::new(id);
    state.delete_handler().handle(DeleteUserCommand { id }).await?;

    Ok(Json(MessageResponse::new(format!(
        "User with id {} deleted",
        id
    ))))
}

fn not_found(id: UserId) -> ApiError {
    ApiError(DomainError::new(
        ErrorCode::UserNotFound,
        format!("User with id {} not found", id),
    ))
}
