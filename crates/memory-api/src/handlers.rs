//! HTTP handlers

use axum::Json;
use serde::Serialize;

use memory_mcp::SERVER_NAME;

/// Health report payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        server: SERVER_NAME,
    })
}
