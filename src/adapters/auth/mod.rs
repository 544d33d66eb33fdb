//! Credential adapters.
//!
//! - `argon2_hasher` - `PasswordHasher` implementation (argon2id)

mod argon2_hasher;

pub use argon2_hasher::Argon2PasswordHasher;
