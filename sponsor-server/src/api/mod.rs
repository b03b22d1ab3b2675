//! API routes
//!
//! Every route lives under `/api`. One module per resource, each exposing
//! `router()`:
//!
//! - [`health`] - liveness
//! - [`sponsors`] - sponsor CRUD and per-sponsor deliverables
//! - [`deliverables`] - deliverable CRUD
//! - [`templates`] - email templates
//! - [`tiers`] - sponsorship tiers
//! - [`marketplace`] - catalog, purchased lists, imports
//! - [`outreach`] - single email and bulk send to uncontacted sponsors
//! - [`stats`] - dashboard stats and tier reports
//! - [`activity`] - recent activity
//! - [`settings`] - settings document

pub mod activity;
pub mod deliverables;
pub mod health;
pub mod marketplace;
pub mod outreach;
pub mod settings;
pub mod sponsors;
pub mod stats;
pub mod templates;
pub mod tiers;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Uri};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;
use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone, Copy)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(sponsors::router())
        .merge(deliverables::router())
        .merge(templates::router())
        .merge(tiers::router())
        .merge(marketplace::router())
        .merge(outreach::router())
        .merge(stats::router())
        .merge(activity::router())
        .merge(settings::router())
        .fallback(fallback)
}

/// Fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - any origin, the API is consumed by a browser SPA
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request spans
        .layer(TraceLayer::new_for_http())
        // Copy the request id onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost so every layer below sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

async fn fallback(uri: Uri) -> AppResult<()> {
    Err(AppError::not_found(format!("Route {}", uri.path())))
}
