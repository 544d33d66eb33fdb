//! HTTP handlers for authentication endpoints.
//!
//! Replies on these routes use the `{"message": ...}` shape, with the
//! Spanish texts the storefront client displays as-is.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use secrecy::SecretString;

use crate::adapters::http::error::MessageResponse;
use crate::adapters::http::middleware::BEARER_PREFIX;
use crate::application::handlers::auth::{
    ChangePasswordCommand, ChangePasswordHandler, LoginCommand, LoginHandler, LogoutCommand,
    LogoutHandler, RegisterCommand, RegisterHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::NewUser;
use crate::ports::{PasswordHasher, SessionStore, UserRepository};

use super::dto::{ChangePasswordRequest, LoginRequest, RegisterRequest, TokenResponse};

pub const MSG_EMAIL_TAKEN: &str = "El email ya está registrado";
pub const MSG_INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const MSG_LOGGED_OUT: &str = "Sesión cerrada";
pub const MSG_MISSING_FIELDS: &str = "Email y contraseña son obligatorios";
pub const MSG_EMAIL_NOT_FOUND: &str = "Email no existe";
pub const MSG_PASSWORD_CHANGED: &str = "Contraseña modificada";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthAppState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AuthAppState {
    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(self.users.clone(), self.hasher.clone(), self.sessions.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.users.clone(), self.hasher.clone(), self.sessions.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone())
    }

    pub fn change_password_handler(&self) -> ChangePasswordHandler {
        ChangePasswordHandler::new(self.users.clone(), self.hasher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /auth/register - Create an account and return a session token
pub async fn register(
    State(state): State<AuthAppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    let user = NewUser::new(
        request.first_name,
        request.last_name,
        request.email,
        request.password.unwrap_or_else(blank_secret),
    )
    .map_err(|e| AuthApiError::Invalid(e.to_string()))?;

    let result = state.register_handler().handle(RegisterCommand { user }).await?;

    Ok(Json(TokenResponse {
        token: result.token.into_string(),
    }))
}

/// POST /auth/login - Exchange credentials for a session token
pub async fn login(
    State(state): State<AuthAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    let cmd = LoginCommand {
        email: request.email,
        password: request.password.unwrap_or_else(blank_secret),
    };

    let result = state.login_handler().handle(cmd).await?;

    Ok(Json(TokenResponse {
        token: result.token.into_string(),
    }))
}

/// POST /auth/logout - Revoke the presented bearer token, if any
pub async fn logout(State(state): State<AuthAppState>, headers: HeaderMap) -> impl IntoResponse {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX));

    if let Some(token) = token {
        state
            .logout_handler()
            .handle(LogoutCommand {
                token: token.to_string(),
            })
            .await;
    }

    Json(MessageResponse::new(MSG_LOGGED_OUT))
}

/// POST /auth/change-password - Replace the password of the account with `email`
pub async fn change_password(
    State(state): State<AuthAppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AuthApiError> {
    let cmd = ChangePasswordCommand {
        email: request.email,
        new_password: request.password.unwrap_or_else(blank_secret),
    };

    state
        .change_password_handler()
        .handle(cmd)
        .await
        .map_err(|e| match e.code() {
            ErrorCode::ValidationFailed => AuthApiError::MissingFields,
            _ => AuthApiError::from(e),
        })?;

    Ok(Json(MessageResponse::new(MSG_PASSWORD_CHANGED)))
}

fn blank_secret() -> SecretString {
    SecretString::new(String::new())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Failures of the auth endpoints, each rendered as `{"message": ...}`.
#[derive(Debug)]
pub enum AuthApiError {
    EmailTaken,
    InvalidCredentials,
    MissingFields,
    EmailNotFound,
    Invalid(String),
    Internal(DomainError),
}

impl From<DomainError> for AuthApiError {
    fn from(err: DomainError) -> Self {
        match err.code() {
            ErrorCode::EmailAlreadyRegistered => AuthApiError::EmailTaken,
            ErrorCode::InvalidCredentials => AuthApiError::InvalidCredentials,
            ErrorCode::UserNotFound => AuthApiError::EmailNotFound,
            ErrorCode::ValidationFailed => AuthApiError::Invalid(err.message().to_string()),
            _ => AuthApiError::Internal(err),
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::EmailTaken => (StatusCode::BAD_REQUEST, MSG_EMAIL_TAKEN.to_string()),
            AuthApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS.to_string())
            }
            AuthApiError::MissingFields => {
                (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.to_string())
            }
            AuthApiError::EmailNotFound => {
                (StatusCode::NOT_FOUND, MSG_EMAIL_NOT_FOUND.to_string())
            }
            AuthApiError::Invalid(message) => (StatusCode::BAD_REQUEST, message),
            AuthApiError::Internal(err) => {
                tracing::error!(error = %err, "Auth request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
