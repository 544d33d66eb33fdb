//! LoginHandler - Command handler for password sign-in.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, ErrorCode, SessionToken};
use crate::ports::{PasswordHasher, SessionStore, UserRepository};

/// Command to sign in with email and password.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: SecretString,
}

/// Result of a successful login.
#[derive(Debug)]
pub struct LoginResult {
    pub token: SessionToken,
}

/// Handler for login.
///
/// Unknown email and wrong password produce the same error.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let user = self.users.find_by_email(&cmd.email).await?;
        let verified = match &user {
            Some(user) => {
                self.hasher
                    .verify(cmd.password.expose_secret(), &user.password_hash)
                    .await
            }
            None => false,
        };
        let user = user
            .filter(|_| verified)
            .ok_or_else(|| DomainError::new(ErrorCode::InvalidCredentials, "Invalid credentials"))?;

        let token = self.sessions.issue(&user.identity()).await;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok(LoginResult { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::application::handlers::testing::{secret, user_repo_with, PlainHasher};
    use crate::domain::foundation::Identity;

    async fn handler_with_ada() -> (LoginHandler, Arc<InMemorySessionStore>) {
        let (users, _) = user_repo_with(&[("ada@example.com", "pw")]).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let handler = LoginHandler::new(users, Arc::new(PlainHasher), sessions.clone());
        (handler, sessions)
    }

    fn command(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: secret(password),
        }
    }

    #[tokio::test]
    async fn correct_password_issues_session() {
        let (handler, sessions) = handler_with_ada().await;

        let result = handler.handle(command("ada@example.com", "pw")).await.unwrap();

        assert_eq!(
            sessions.resolve(result.token.as_str()).await,
            Some(Identity::new("ada@example.com"))
        );
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (handler, sessions) = handler_with_ada().await;

        let err = handler.handle(command("ada@example.com", "nope")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        assert_eq!(sessions.active_sessions().await, 0);
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let (handler, _) = handler_with_ada().await;

        let err = handler.handle(command("bob@example.com", "pw")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn each_login_gets_a_fresh_token() {
        let (handler, _) = handler_with_ada().await;

        let first = handler.handle(command("ada@example.com", "pw")).await.unwrap();
        let second = handler.handle(command("ada@example.com", "pw")).await.unwrap();

        assert_ne!(first.token.as_str(), second.token.as_str());
    }
}
