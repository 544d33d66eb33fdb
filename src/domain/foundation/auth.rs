//! Authentication types for the domain layer.
//!
//! A session is nothing more than an opaque [`SessionToken`] mapped to the
//! [`Identity`] it was issued for. Neither type knows about HTTP; the
//! gate in `adapters::http::middleware` turns headers into lookups.
//!
//! # Design Decisions
//!
//! - `Identity` is the user's email, treated as an opaque label. The
//!   session layer never validates or normalizes it.
//! - `SessionToken` can only be minted by [`SessionToken::generate`];
//!   tokens presented by clients stay plain `&str` until a store resolves them.
//! - `AuthError` distinguishes the rejection reasons internally, but the
//!   gate collapses all of them into one response.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The principal a session token stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque bearer credential for one live session.
///
/// Rendered as a lowercase hyphenated v4 UUID (122 random bits).
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mints a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Tokens are credentials: keep them out of debug logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Reasons a protected request fails authentication.
///
/// Never sent to clients. All variants produce the same 401 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Authorization header missing")]
    MissingAuthHeader,

    /// Header present but not of the form `Bearer <token>`.
    #[error("Authorization header does not use the Bearer scheme")]
    MalformedScheme,

    /// Well-formed token that the session store does not know.
    #[error("Unknown or revoked session token")]
    UnknownOrRevokedToken,
}
