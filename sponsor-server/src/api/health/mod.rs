//! Health check
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/health | GET | Liveness |
//!
//! ```json
//! { "status": "OK", "timestamp": "2025-01-01T00:00:00Z" }
//! ```

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// GET /api/health - liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}
