//! Health Check Handler
//!
//! `GET /health` reports that the process is serving. It does not probe the
//! resolver or the external providers.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}
