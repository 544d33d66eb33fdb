//! Password hashing port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// One-way password hashing.
///
/// Hashes are self-describing strings (algorithm, parameters and salt
/// included), so `verify` needs nothing but the stored hash.
///
/// Hashing is CPU-bound; implementations must not run it on the async
/// executor's worker threads.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, raw: &str) -> Result<String, DomainError>;

    /// Returns `false` for a wrong password and for an unparseable hash.
    async fn verify(&self, raw: &str, hash: &str) -> bool;
}
