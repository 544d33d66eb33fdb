//! Argon2id password hashing.
//!
//! Produces PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! with a fresh random salt per call. Both operations run on tokio's
//! blocking pool.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};
use async_trait::async_trait;
use tokio::task;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

/// [`PasswordHasher`] backed by argon2id with the crate's default parameters.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

fn internal(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::InternalError, format!("{}: {}", context, err))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, raw: &str) -> Result<String, DomainError> {
        let argon2 = self.argon2.clone();
        let raw = raw.to_owned();

        task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(raw.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|e| internal("Password hashing task failed", e))?
        .map_err(|e| internal("Failed to hash password", e))
    }

    async fn verify(&self, raw: &str, hash: &str) -> bool {
        let argon2 = self.argon2.clone();
        let (raw, hash) = (raw.to_owned(), hash.to_owned());

        let outcome = task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash)?;
            argon2.verify_password(raw.as_bytes(), &parsed)
        })
        .await;

        match outcome {
            Ok(Ok(())) => true,
            Ok(Err(password_hash::Error::Password)) => false,
            Ok(Err(e)) => {
                tracing::warn!("Stored password hash is unusable: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
