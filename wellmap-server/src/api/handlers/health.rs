//! Health check handler

use axum::Json;
use serde::Serialize;

/// Response body for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is accepting requests
    pub status: &'static str,
    /// Server version
    pub version: &'static str,
}

/// GET /health - Liveness probe
///
/// Answers from the process itself without touching the store, so a store
/// outage shows up on /keys rather than here.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
