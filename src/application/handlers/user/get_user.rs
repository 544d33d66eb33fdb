//! User queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetUserQuery {
    pub id: UserId,
}

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<Option<User>, DomainError> {
        self.users.find_by_id(query.id).await
    }
}

/// Lists every user ordered by id.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }
}
