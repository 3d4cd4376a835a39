//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for the health endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving requests
    pub status: String,
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler(State(info): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        name: info.name.to_string(),
        version: info.version.to_string(),
    })
}

/// Router exposing `/health`.
pub fn health_router(info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(info)
}
