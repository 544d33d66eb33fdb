//! PostgreSQL settings (`STOREFRONT__DATABASE__*`).
//!
//! The section is optional. Without it users and products are kept in
//! memory, so setting `url` is what switches the server onto PostgreSQL.

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::error::ValidationError;

/// Largest pool the server will open.
pub const MAX_POOL_SIZE: u32 = 100;

const URL_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` before serving.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    /// Opens the pool and checks one connection.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STOREFRONT__DATABASE__URL"));
        }
        if !URL_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointing_at(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn url_only_section_is_valid_with_small_pool() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://shop@localhost/storefront"}"#).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!((config.min_connections, config.max_connections), (1, 10));
        assert!(!config.run_migrations);
    }

    #[test]
    fn blank_url_is_reported_by_env_name() {
        assert_eq!(
            pointing_at("  ").validate(),
            Err(ValidationError::MissingRequired("STOREFRONT__DATABASE__URL"))
        );
    }

    #[test]
    fn both_postgres_schemes_are_accepted() {
        assert!(pointing_at("postgres://localhost/shop").validate().is_ok());
        assert!(pointing_at("postgresql://localhost/shop").validate().is_ok());
        assert_eq!(
            pointing_at("mysql://localhost/shop").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
    }

    #[test]
    fn pool_bounds_are_checked() {
        let inverted = DatabaseConfig {
            min_connections: 5,
            max_connections: 2,
            ..pointing_at("postgres://localhost/shop")
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidPoolSize));

        let empty = DatabaseConfig {
            min_connections: 0,
            max_connections: 0,
            ..pointing_at("postgres://localhost/shop")
        };
        assert_eq!(empty.validate(), Err(ValidationError::InvalidPoolSize));

        let huge = DatabaseConfig {
            max_connections: MAX_POOL_SIZE + 1,
            ..pointing_at("postgres://localhost/shop")
        };
        assert_eq!(huge.validate(), Err(ValidationError::PoolSizeTooLarge));
    }

    #[test]
    fn pool_options_carry_configured_sizes() {
        let config = DatabaseConfig {
            min_connections: 2,
            max_connections: 8,
            acquire_timeout_secs: 5,
            ..pointing_at("postgres://localhost/shop")
        };
        let options = config.pool_options();

        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_max_connections(), 8);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
    }
}
