//! LogoutHandler - Command handler for ending a session.

use std::sync::Arc;

use crate::ports::SessionStore;

/// Command to revoke a session token.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: String,
}

/// Handler for logout. Revoking an unknown token is a no-op.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: LogoutCommand) {
        self.sessions.revoke(&cmd.token).await;
    }
}
