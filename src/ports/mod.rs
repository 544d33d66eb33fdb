//! Ports - Interfaces between the application core and the outside world.
//!
//! Each port is a trait. Adapters under `crate::adapters` implement them:
//!
//! - `SessionStore` - token → identity sessions (in-memory)
//! - `UserRepository` - user accounts (in-memory, PostgreSQL)
//! - `ProductRepository` - catalog (in-memory, PostgreSQL)
//! - `PasswordHasher` - password hashing (argon2)

mod password_hasher;
mod product_repository;
mod session_store;
mod user_repository;

pub use password_hasher::PasswordHasher;
pub use product_repository::ProductRepository;
pub use session_store::SessionStore;
pub use user_repository::UserRepository;
