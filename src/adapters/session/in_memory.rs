//! In-memory session store.
//!
//! Sessions live in a `HashMap` guarded by a tokio `RwLock`. The lock is
//! fair: waiting writers are not starved by a stream of readers and vice
//! versa. Each trait method acquires the lock exactly once, so every
//! operation is one atomic step.
//!
//! Nothing is persisted; a restart logs everyone out.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{Identity, SessionToken};
use crate::ports::SessionStore;

/// How many concurrent sessions one identity may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// Every login adds a session; earlier tokens stay valid.
    #[default]
    Unbounded,
    /// A new login revokes the identity's other sessions.
    SingleSession,
}

/// Process-local [`SessionStore`].
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Identity>>,
    policy: SessionPolicy,
}

impl InMemorySessionStore {
    /// Creates an empty store with the unbounded policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SessionPolicy) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn issue(&self, identity: &Identity) -> SessionToken {
        let mut sessions = self.sessions.write().await;

        if self.policy == SessionPolicy::SingleSession {
            sessions.retain(|_, owner| owner != identity);
        }

        // Never overwrite a live session.
        let mut token = SessionToken::generate();
        while sessions.contains_key(token.as_str()) {
            token = SessionToken::generate();
        }

        sessions.insert(token.as_str().to_string(), identity.clone());
        tracing::debug!(active = sessions.len(), "Session issued");
        token
    }

    async fn resolve(&self, token: &str) -> Option<Identity> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn revoke(&self, token: &str) {
        let removed = self.sessions.write().await.remove(token);
        if removed.is_some() {
            tracing::debug!("Session revoked");
        }
    }

    async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}
