//! HTTP integration tests for the authentication gate.
//!
//! These drive the fully assembled `app_router` (trace, CORS, timeout and
//! the gate) with in-memory adapters:
//! 1. Public prefixes bypass the gate
//! 2. Missing, malformed and revoked tokens get the uniform 401
//! 3. A full register → login → browse → logout session

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use storefront::adapters::http::{app_router, HttpDependencies, PublicRoutes};
use storefront::adapters::{
    Argon2PasswordHasher, InMemoryProductRepository, InMemorySessionStore, InMemoryUserRepository,
};
use storefront::config::ServerConfig;
use storefront::domain::catalog::NewProduct;
use storefront::domain::foundation::Identity;
use storefront::ports::{ProductRepository, SessionStore};

const REJECTION: &str = r#"{"message":"Debes iniciar sesión para continuar."}"#;

// =============================================================================
// Harness
// =============================================================================

struct TestApp {
    router: Router,
    sessions: Arc<InMemorySessionStore>,
}

impl TestApp {
    async fn new() -> Self {
        let sessions = Arc::new(InMemorySessionStore::new());
        let products = Arc::new(InMemoryProductRepository::new());

        let seed: Vec<NewProduct> = serde_json::from_value(json!([
            {"title": "Hades", "platform": "PC", "price": 24.99},
            {"title": "Celeste", "platform": "Switch", "price": 19.99}
        ]))
        .unwrap();
        products.insert_all(seed).await.unwrap();

        let deps = HttpDependencies {
            sessions: sessions.clone(),
            users: Arc::new(InMemoryUserRepository::new()),
            products,
            hasher: Arc::new(Argon2PasswordHasher::new()),
        };

        let router = app_router(
            deps,
            PublicRoutes::new(["/auth", "/actuator"]),
            &ServerConfig::default(),
        );

        Self { router, sessions }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Option<String>, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(&self, uri: &str, authorization: Option<&str>) -> (StatusCode, Option<String>, String) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_json(
        &self,
        uri: &str,
        body: Value,
        authorization: Option<&str>,
    ) -> (StatusCode, Option<String>, String) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

fn assert_rejected((status, content_type, body): (StatusCode, Option<String>, String)) {
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(content_type.as_deref(), Some("application/json; charset=utf-8"));
    assert_eq!(body, REJECTION);
}

fn token_of(body: &str) -> String {
    let value: Value = serde_json::from_str(body).unwrap();
    value["token"].as_str().unwrap().to_string()
}

// =============================================================================
// Gate decisions
// =============================================================================

#[tokio::test]
async fn valid_session_reaches_protected_handler() {
    let app = TestApp::new().await;
    let token = app.sessions.issue(&Identity::new("a@b.com")).await;

    let (status, _, body) = app
        .get("/products", Some(&format!("Bearer {}", token.as_str())))
        .await;

    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(page["totalElements"], 2);
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let app = TestApp::new().await;
    assert_rejected(app.get("/products", None).await);
}

#[tokio::test]
async fn wrong_scheme_is_rejected() {
    let app = TestApp::new().await;
    assert_rejected(app.get("/products", Some("Token abc123")).await);
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let app = TestApp::new().await;
    assert_rejected(
        app.get("/products", Some("Bearer 00000000-0000-0000-0000-000000000000"))
            .await,
    );
}

#[tokio::test]
async fn revoked_token_is_rejected() {
    let app = TestApp::new().await;
    let token = app.sessions.issue(&Identity::new("a@b.com")).await;
    app.sessions.revoke(token.as_str()).await;

    assert_rejected(
        app.get("/products", Some(&format!("Bearer {}", token.as_str())))
            .await,
    );
}

#[tokio::test]
async fn user_endpoints_are_protected() {
    let app = TestApp::new().await;
    assert_rejected(app.get("/user", None).await);
    assert_rejected(app.get("/user/1", Some("Bearer")).await);
}

#[tokio::test]
async fn unknown_protected_path_is_rejected_before_routing() {
    let app = TestApp::new().await;
    assert_rejected(app.get("/nowhere", None).await);
}

#[tokio::test]
async fn actuator_health_is_public() {
    let app = TestApp::new().await;

    let (status, _, body) = app.get("/actuator/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["status"], "UP");
}

#[tokio::test]
async fn login_is_public_even_with_garbage_authorization() {
    let app = TestApp::new().await;

    let (status, _, body) = app
        .post_json(
            "/auth/login",
            json!({"email": "nobody@example.com", "password": "pw"}),
            Some("Token abc123"),
        )
        .await;

    // Reaches the handler: bad credentials, not the gate's rejection.
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_ne!(body, REJECTION);
}

#[tokio::test]
async fn prefix_lookalike_is_not_public() {
    let app = TestApp::new().await;
    assert_rejected(app.get("/authx/anything", None).await);
}

// =============================================================================
// Full session lifecycle
// =============================================================================

#[tokio::test]
async fn register_login_browse_logout() {
    let app = TestApp::new().await;

    let (status, _, body) = app
        .post_json(
            "/auth/register",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "password": "s3cret"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let registration_token = token_of(&body);

    let (status, _, body) = app
        .post_json(
            "/auth/login",
            json!({"email": "ada@example.com", "password": "s3cret"}),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let login_token = token_of(&body);
    assert_ne!(registration_token, login_token);

    let bearer = format!("Bearer {}", login_token);
    let (status, _, _) = app.get("/products/search?q=hades", Some(&bearer)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = app.post_json("/auth/logout", json!({}), Some(&bearer)).await;
    assert_eq!(status, StatusCode::OK);

    assert_rejected(app.get("/products", Some(&bearer)).await);

    // Logging out one session leaves the other alive.
    let (status, _, _) = app
        .get("/products", Some(&format!("Bearer {}", registration_token)))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_is_refused() {
    let app = TestApp::new().await;
    let body = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "password": "s3cret"
    });

    let (first, _, _) = app.post_json("/auth/register", body.clone(), None).await;
    let (second, _, message) = app.post_json("/auth/register", body, None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(message.contains("El email ya está registrado"));
    assert_eq!(app.sessions.active_sessions().await, 1);
}
