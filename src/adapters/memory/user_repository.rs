//! In-memory user repository for development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{User, UserRecord};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct Users {
    next_id: i64,
    rows: BTreeMap<UserId, User>,
}

/// Users kept in a `BTreeMap` so listings come out ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Users>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .rows
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.read().await.rows.values().any(|u| u.email == email))
    }

    async fn insert(&self, record: UserRecord) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.rows.values().any(|u| u.email == record.email) {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }

        users.next_id += 1;
        let user = User {
            id: UserId::new(users.next_id),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            password_hash: record.password_hash,
        };
        users.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.rows.contains_key(&user.id) {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id),
            ));
        }

        if users
            .rows
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }

        users.rows.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.users.write().await.rows.remove(&id).is_some())
    }
}
