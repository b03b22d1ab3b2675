//! Outreach API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/send-email", post(handler::send_email))
        .route("/api/send-to-uncontacted", post(handler::send_to_uncontacted))
}
