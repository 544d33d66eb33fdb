//! User repository port.
//!
//! The account store behind registration, login and user management.
//! Emails are compared exactly; no case folding happens here.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{User, UserRecord};

/// Persists user accounts.
///
/// # Contract
///
/// Implementations must:
/// - Assign a fresh `UserId` on `insert`
/// - Return `ErrorCode::EmailAlreadyRegistered` when inserting an email that exists
/// - Return `ErrorCode::UserNotFound` from `update` for unknown ids
/// - Return `false` from `delete` when the id does not exist
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    async fn insert(&self, record: UserRecord) -> Result<User, DomainError>;

    /// Replaces every column of the stored user with `user`.
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Removes the user. Returns whether a row existed.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}
