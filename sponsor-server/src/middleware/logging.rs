//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, debug, info, info_span, warn};

/// Liveness probes are logged at debug only
const QUIET_PATHS: &[&str] = &["/api/health"];

/// One line per request: id, method, route, status, latency
///
/// The handler runs inside a `request` span carrying the request id, so
/// handler logs (sponsor created, outreach finished, ...) can be joined to
/// the request line. 5xx is logged at warn.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = info_span!("request", request_id = %request_id);
    let response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%request_id, %method, %route, status, latency_ms, "Request failed");
    } else if QUIET_PATHS.contains(&route.as_str()) {
        debug!(%request_id, %method, %route, status, latency_ms, "Request completed");
    } else {
        info!(%request_id, %method, %route, status, latency_ms, "Request completed");
    }

    response
}
