//! Authentication gate for axum.
//!
//! This module provides:
//! - `PublicRoutes` - prefix allowlist for routes that skip authentication
//! - `AuthGate` - classifies a request and resolves its bearer token
//! - `auth_middleware` - stage that attaches the `Identity` or rejects with 401
//! - `RequireAuth` - extractor that reads the attached identity
//!
//! # Architecture
//!
//! ```text
//! Request → auth_middleware → AuthGate::handle
//!              │                 ├─ public    → Continue(None)
//!              │                 ├─ protected → Continue(Some(identity))
//!              │                 └─ rejected  → Reject
//!              ↓
//!   Handler → RequireAuth extractor reads Identity from extensions
//! ```
//!
//! Every rejection produces the same 401 response; the reason is only
//! visible in DEBUG logs.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::SessionStore;

/// Literal scheme prefix of the `Authorization` header, trailing space included.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Body of every authentication rejection.
pub const REJECTION_BODY: &str = r#"{"message":"Debes iniciar sesión para continuar."}"#;

const REJECTION_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Path prefixes that bypass authentication.
///
/// A prefix matches the path itself and anything below it: `/auth` matches
/// `/auth` and `/auth/login` but not `/authors`. Prefixes may be configured
/// as `/auth`, `/auth/` or `/auth/**`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicRoutes {
    prefixes: Vec<String>,
}

impl PublicRoutes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .map(|p| normalize(&p))
            .collect();
        Self { prefixes }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

fn normalize(prefix: &str) -> String {
    let prefix = prefix.strip_suffix("/**").unwrap_or(prefix);
    prefix.trim_end_matches('/').to_string()
}

/// Whether a route needs a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand the request to the next stage. Public routes carry no identity.
    Continue(Option<Identity>),
    /// Respond with the uniform 401 and stop.
    Reject,
}

/// The authentication gate: owns the session store and the public allowlist.
#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn SessionStore>,
    public: PublicRoutes,
}

impl AuthGate {
    pub fn new(store: Arc<dyn SessionStore>, public: PublicRoutes) -> Self {
        Self { store, public }
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.is_public(path) {
            RouteClass::Public
        } else {
            RouteClass::Protected
        }
    }

    /// Resolves an `Authorization` header value to the session's identity.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Identity, AuthError> {
        let header = header.ok_or(AuthError::MissingAuthHeader)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::MalformedScheme)?;

        self.store
            .resolve(token)
            .await
            .ok_or(AuthError::UnknownOrRevokedToken)
    }

    pub async fn handle(&self, path: &str, header: Option<&str>) -> GateDecision {
        if self.classify(path) == RouteClass::Public {
            return GateDecision::Continue(None);
        }

        match self.authenticate(header).await {
            Ok(identity) => GateDecision::Continue(Some(identity)),
            Err(reason) => {
                tracing::debug!(path, %reason, "Rejected unauthenticated request");
                GateDecision::Reject
            }
        }
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Authentication stage.
///
/// On `Continue(Some(identity))` the identity is inserted into the request
/// extensions before the next stage runs. A header that is not valid
/// UTF-8/ASCII counts as absent.
pub async fn auth_middleware(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match gate.handle(request.uri().path(), header).await {
        GateDecision::Continue(identity) => {
            if let Some(identity) = identity {
                request.extensions_mut().insert(identity);
            }
            next.run(request).await
        }
        GateDecision::Reject => unauthorized(),
    }
}

/// The uniform 401 rejection.
pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(REJECTION_CONTENT_TYPE),
        )],
        REJECTION_BODY,
    )
        .into_response()
}

/// Extractor that requires an authenticated identity.
///
/// # Example
///
/// ```ignore
/// async fn me(RequireAuth(identity): RequireAuth) -> String {
///     identity.to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection)
    }
}

/// Rejection for `RequireAuth`; renders the uniform 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        unauthorized()
    }
}
