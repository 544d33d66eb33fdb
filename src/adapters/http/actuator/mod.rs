//! Operational endpoints under `/actuator`.
//!
//! - `GET /actuator/health` - liveness, always `{"status":"UP"}` while serving

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /actuator/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

pub fn actuator_router() -> Router {
    Router::new().route("/actuator/health", get(health))
}
