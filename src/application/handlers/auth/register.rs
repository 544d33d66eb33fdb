//! RegisterHandler - Command handler for creating an account and signing in.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::domain::foundation::{DomainError, ErrorCode, SessionToken};
use crate::domain::user::{NewUser, User, UserRecord};
use crate::ports::{PasswordHasher, SessionStore, UserRepository};

/// Command to register a new account.
#[derive(Debug)]
pub struct RegisterCommand {
    pub user: NewUser,
}

/// Result of a successful registration.
#[derive(Debug)]
pub struct RegisterResult {
    pub user: User,
    pub token: SessionToken,
}

/// Handler for registration.
///
/// The new user is signed in immediately: a session is issued for their email.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl RegisterHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, DomainError> {
        let new_user = cmd.user;

        if self.users.exists_by_email(&new_user.email).await? {
            return Err(email_taken());
        }

        let password_hash = self.hasher.hash(new_user.password.expose_secret()).await?;

        // A concurrent registration can still win the race; the repository
        // reports it with the same error code.
        let user = self
            .users
            .insert(UserRecord {
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                email: new_user.email,
                password_hash,
            })
            .await?;

        let token = self.sessions.issue(&user.identity()).await;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterResult { user, token })
    }
}

fn email_taken() -> DomainError {
    DomainError::new(ErrorCode::EmailAlreadyRegistered, "Email already registered")
}
