//! Axum router configuration for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{change_password, login, logout, register, AuthAppState};

/// Create the auth API router.
///
/// # Routes
///
/// All public (the gate lets `/auth/**` through):
/// - `POST /register` - Create an account, returns `{"token"}`
/// - `POST /login` - Returns `{"token"}`
/// - `POST /logout` - Revokes the bearer token if one is sent
/// - `POST /change-password` - Sets a new password by email
pub fn auth_routes() -> Router<AuthAppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/change-password", post(change_password))
}

/// The auth router mounted at `/auth`, with its state applied.
pub fn auth_router(state: AuthAppState) -> Router {
    Router::new().nest("/auth", auth_routes()).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::auth::Argon2PasswordHasher;
    use crate::adapters::http::auth::handlers::{
        MSG_EMAIL_NOT_FOUND, MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIALS, MSG_LOGGED_OUT,
        MSG_MISSING_FIELDS, MSG_PASSWORD_CHANGED,
    };
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::adapters::session::InMemorySessionStore;
    use crate::ports::SessionStore;

    struct TestApp {
        router: Router,
        sessions: Arc<InMemorySessionStore>,
    }

    fn test_app() -> TestApp {
        let sessions = Arc::new(InMemorySessionStore::new());
        let state = AuthAppState {
            users: Arc::new(InMemoryUserRepository::new()),
            hasher: Arc::new(Argon2PasswordHasher::new()),
            sessions: sessions.clone(),
        };
        TestApp {
            router: auth_router(state),
            sessions,
        }
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ada() -> serde_json::Value {
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "analytical"
        })
    }

    #[tokio::test]
    async fn register_returns_token_for_new_email() {
        let app = test_app();

        let (status, body) = send(&app.router, post_json("/auth/register", ada())).await;

        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap();
        assert!(app.sessions.resolve(token).await.is_some());
    }

    #[tokio::test]
    async fn register_twice_is_rejected() {
        let app = test_app();
        send(&app.router, post_json("/auth/register", ada())).await;

        let (status, body) = send(&app.router, post_json("/auth/register", ada())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MSG_EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_401() {
        let app = test_app();
        send(&app.router, post_json("/auth/register", ada())).await;

        let (status, body) = send(
            &app.router,
            post_json(
                "/auth/login",
                serde_json::json!({"email": "ada@example.com", "password": "wrong"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], MSG_INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn logout_revokes_token_and_always_succeeds() {
        let app = test_app();
        let (_, body) = send(&app.router, post_json("/auth/register", ada())).await;
        let token = body["token"].as_str().unwrap().to_string();

        let logout = |auth: Option<String>| {
            let mut builder = Request::builder().method("POST").uri("/auth/logout");
            if let Some(auth) = auth {
                builder = builder.header(header::AUTHORIZATION, auth);
            }
            builder.body(Body::empty()).unwrap()
        };

        let (status, body) = send(&app.router, logout(Some(format!("Bearer {}", token)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], MSG_LOGGED_OUT);
        assert!(app.sessions.resolve(&token).await.is_none());

        let (status, _) = send(&app.router, logout(None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn change_password_reports_each_outcome() {
        let app = test_app();
        send(&app.router, post_json("/auth/register", ada())).await;

        let (status, body) = send(
            &app.router,
            post_json("/auth/change-password", serde_json::json!({"email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MSG_MISSING_FIELDS);

        let (status, body) = send(
            &app.router,
            post_json(
                "/auth/change-password",
                serde_json::json!({"email": "bob@example.com", "password": "x"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], MSG_EMAIL_NOT_FOUND);

        let (status, body) = send(
            &app.router,
            post_json(
                "/auth/change-password",
                serde_json::json!({"email": "ada@example.com", "password": "engine"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], MSG_PASSWORD_CHANGED);

        let (status, _) = send(
            &app.router,
            post_json(
                "/auth/login",
                serde_json::json!({"email": "ada@example.com", "password": "engine"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn response_texts_are_the_published_spanish_messages() {
        let app = test_app();
        send(&app.router, post_json("/auth/register", ada())).await;

        let (_, body) = send(&app.router, post_json("/auth/register", ada())).await;
        assert_eq!(body["message"], "El email ya está registrado");

        let logout = Request::builder()
            .method("POST")
            .uri("/auth/logout")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(&app.router, logout).await;
        assert_eq!(body["message"], "Sesión cerrada");
    }

    #[tokio::test]
    async fn change_password_checks_blank_fields_before_email_lookup() {
        let app = test_app();

        let (status, body) = send(
            &app.router,
            post_json(
                "/auth/change-password",
                serde_json::json!({"email": "nobody@example.com", "password": ""}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email y contraseña son obligatorios");
    }
}
