use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use shared::models::Settings;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(settings))
}

/// GET /api/settings - templates, tiers, full activity log, purchased lists
pub async fn settings(State(state): State<ServerState>) -> Json<Settings> {
    Json(state.store.settings())
}
