//! Session store port - the authoritative token → identity mapping.
//!
//! Login and registration write through [`SessionStore::issue`], logout
//! through [`SessionStore::revoke`], and the auth gate reads through
//! [`SessionStore::resolve`] on every protected request.
//!
//! # Concurrency Contract
//!
//! Every operation is a single atomic step with respect to the others:
//!
//! - Concurrent `issue` calls never lose an insertion and never overwrite
//!   each other's identity.
//! - A `resolve` racing a `revoke` of the same token observes either the
//!   state before or after the revoke, never anything in between.
//! - Callers never coordinate; there is no multi-call transaction (no
//!   "revoke if it still maps to X").
//!
//! Sessions do not expire and do not survive a restart.

use async_trait::async_trait;

use crate::domain::foundation::{Identity, SessionToken};

/// Holds live sessions.
///
/// # Contract
///
/// Implementations must:
/// - Return a token from `issue` that differs from every active token
/// - Return `None` from `resolve` for tokens never issued or already revoked
/// - Treat `revoke` of an unknown token as a silent no-op
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Starts a new session for `identity` and returns its token.
    ///
    /// Always succeeds. Issuing twice for the same identity yields two
    /// distinct, concurrently valid tokens unless the store is configured
    /// for single sessions.
    async fn issue(&self, identity: &Identity) -> SessionToken;

    /// Looks up the identity behind a presented token. Never mutates.
    async fn resolve(&self, token: &str) -> Option<Identity>;

    /// Ends the session, if any. Idempotent.
    async fn revoke(&self, token: &str);

    /// Number of live sessions.
    async fn active_sessions(&self) -> usize;
}
