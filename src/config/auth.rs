//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::http::middleware::PublicRoutes;
use crate::adapters::session::SessionPolicy;

/// Authentication gate and session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Path prefixes reachable without a session (comma-separated).
    /// `/auth`, `/auth/` and `/auth/**` are equivalent.
    #[serde(default = "default_public_prefixes")]
    pub public_prefixes: String,

    /// `unbounded` or `single_session`
    #[serde(default)]
    pub session_policy: SessionPolicy,
}

impl AuthConfig {
    /// The configured prefixes, split and trimmed.
    pub fn public_prefix_list(&self) -> Vec<&str> {
        self.public_prefixes
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn public_routes(&self) -> PublicRoutes {
        PublicRoutes::new(self.public_prefix_list())
    }

    /// Every prefix must be an absolute path.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.public_prefix_list().into_iter().find(|p| !p.starts_with('/')) {
            Some(prefix) => Err(ValidationError::InvalidPublicPrefix(prefix.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            public_prefixes: default_public_prefixes(),
            session_policy: SessionPolicy::default(),
        }
    }
}

fn default_public_prefixes() -> String {
    "/auth,/actuator".to_string()
}
