//! Health check endpoints.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// GET / and GET /ping - Liveness probe.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
