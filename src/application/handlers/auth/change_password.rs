//! ChangePasswordHandler - Command handler for replacing a user's password.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to set a new password for the account with `email`.
#[derive(Debug)]
pub struct ChangePasswordCommand {
    pub email: String,
    pub new_password: SecretString,
}

/// Handler for password changes.
///
/// Existing sessions stay valid after the change.
pub struct ChangePasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: ChangePasswordCommand) -> Result<(), DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.new_password.expose_secret().trim().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let mut user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "Email not found"))?;

        user.password_hash = self.hasher.hash(cmd.new_password.expose_secret()).await?;
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "Password changed");

        Ok(())
    }
}
