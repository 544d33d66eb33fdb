//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STOREFRONT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use storefront::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod auth;
mod database;
mod error;
mod seed;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use seed::SeedConfig;
pub use server::{RunMode, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory development server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Public routes and session policy
    #[serde(default)]
    pub auth: AuthConfig,

    /// PostgreSQL connection; in-memory stores when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Startup product seeding
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STOREFRONT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STOREFRONT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STOREFRONT__DATABASE__URL=...` -> `database.url = ...`
    /// - `STOREFRONT__AUTH__SESSION_POLICY=single_session`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STOREFRONT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::SessionPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "STOREFRONT__SERVER__PORT",
        "STOREFRONT__SERVER__ENVIRONMENT",
        "STOREFRONT__DATABASE__URL",
        "STOREFRONT__AUTH__PUBLIC_PREFIXES",
        "STOREFRONT__AUTH__SESSION_POLICY",
        "STOREFRONT__SEED__PRODUCTS_FILE",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, RunMode::Development);
        assert!(config.database.is_none());
        assert!(config.seed.products_file.is_none());
        assert_eq!(config.auth.session_policy, SessionPolicy::Unbounded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_section_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[(
            "STOREFRONT__DATABASE__URL",
            "postgresql://test@localhost/storefront",
        )])
        .unwrap();

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/storefront");
        assert_eq!(database.max_connections, 10);
    }

    #[test]
    fn test_auth_and_seed_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("STOREFRONT__AUTH__SESSION_POLICY", "single_session"),
            ("STOREFRONT__AUTH__PUBLIC_PREFIXES", "/auth/**,/actuator/**,/docs"),
            ("STOREFRONT__SEED__PRODUCTS_FILE", "data/products.json"),
        ])
        .unwrap();

        assert_eq!(config.auth.session_policy, SessionPolicy::SingleSession);
        assert!(config.auth.public_routes().is_public("/docs/index.html"));
        assert_eq!(
            config.seed.products_file.as_deref(),
            Some(std::path::Path::new("data/products.json"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("STOREFRONT__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("STOREFRONT__SERVER__PORT", "3000")]).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_database_url() {
        let config = AppConfig {
            database: Some(DatabaseConfig {
                url: "mysql://localhost/shop".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }
}
