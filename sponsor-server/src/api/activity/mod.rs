//! Activity feed

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use shared::models::ActivityEntry;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/activity", get(recent))
}

/// GET /api/activity - newest first, at most ten entries
pub async fn recent(State(state): State<ServerState>) -> Json<Vec<ActivityEntry>> {
    Json(state.store.recent_activity())
}
