//! Dashboard aggregates
//!
//! Both endpoints are computed on read; nothing is cached.

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use shared::models::{SponsorReport, SponsorStats};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/stats", get(stats))
        .route("/api/reports", get(report))
}

/// GET /api/stats - status counts, deliverable completion, total raised
pub async fn stats(State(state): State<ServerState>) -> Json<SponsorStats> {
    Json(state.store.stats())
}

/// GET /api/reports - closed sponsors by tier
pub async fn report(State(state): State<ServerState>) -> Json<SponsorReport> {
    Json(state.store.report())
}
