//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `session` - In-process session store
//! - `auth` - Password hashing (argon2)
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `seed` - Product seed file loader
//! - `http` - axum routers, authentication gate and error mapping

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod seed;
pub mod session;

pub use auth::Argon2PasswordHasher;
pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
pub use postgres::{PostgresProductRepository, PostgresUserRepository};
pub use seed::JsonFileProductSeed;
pub use session::{InMemorySessionStore, SessionPolicy};
