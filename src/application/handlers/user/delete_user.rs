//! DeleteUserHandler - Command handler for removing a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub id: UserId,
}

/// Handler for user deletion. Sessions already issued for the user are
/// left in place.
pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<(), DomainError> {
        if !self.users.delete(cmd.id).await? {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User with id {} not found", cmd.id),
            ));
        }

        tracing::info!(user_id = %cmd.id, "User deleted");
        Ok(())
    }
}
