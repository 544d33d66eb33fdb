//! UpdateUserHandler - Command handler for replacing a user's fields.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{User, UserChanges};
use crate::ports::{PasswordHasher, UserRepository};

#[derive(Debug)]
pub struct UpdateUserCommand {
    pub id: UserId,
    pub changes: UserChanges,
}

/// Handler for user updates.
///
/// Names and email are always replaced. The password hash changes only when
/// a new password is supplied.
pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_id(cmd.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", cmd.id))
            })?;

        let changes = cmd.changes;
        user.first_name = changes.first_name;
        user.last_name = changes.last_name;
        user.email = changes.email;
        if let Some(password) = changes.password {
            user.password_hash = self.hasher.hash(password.expose_secret()).await?;
        }

        self.users.update(&user).await
    }
}
