//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - user accounts
//! - `PostgresProductRepository` - product catalog
//!
//! Schema lives in `migrations/` and is applied with `sqlx::migrate!`.

mod product_repository;
mod user_repository;

pub use product_repository::PostgresProductRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::migrate::MigrateError;
use sqlx::PgPool;

/// Applies pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
