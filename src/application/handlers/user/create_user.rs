//! CreateUserHandler - Command handler for administrative user creation.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::domain::foundation::DomainError;
use crate::domain::user::{NewUser, User, UserRecord};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to create a user without signing them in.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub user: NewUser,
}

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, DomainError> {
        let new_user = cmd.user;
        let password_hash = self.hasher.hash(new_user.password.expose_secret()).await?;

        let user = self
            .users
            .insert(UserRecord {
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                email: new_user.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
