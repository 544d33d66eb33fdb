//! Test doubles shared by handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::adapters::memory::InMemoryUserRepository;
use crate::domain::foundation::DomainError;
use crate::domain::user::{User, UserRecord};
use crate::ports::{PasswordHasher, UserRepository};

/// Reversible "hash" so tests skip the argon2 cost.
#[derive(Debug, Default)]
pub(crate) struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, raw: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{}", raw))
    }

    async fn verify(&self, raw: &str, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(raw)
    }
}

pub(crate) fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string())
}

pub(crate) async fn user_repo_with(
    users: &[(&str, &str)],
) -> (Arc<InMemoryUserRepository>, Vec<User>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let mut stored = Vec::new();
    for (email, password) in users {
        let user = repo
            .insert(UserRecord {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                password_hash: format!("plain:{}", password),
            })
            .await
            .unwrap();
        stored.push(user);
    }
    (repo, stored)
}
