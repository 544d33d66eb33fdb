//! In-memory repository adapters.
//!
//! Used when no database is configured and throughout the test suite.
//! Not suitable for multi-instance deployments.

mod product_repository;
mod user_repository;

pub use product_repository::InMemoryProductRepository;
pub use user_repository::InMemoryUserRepository;
