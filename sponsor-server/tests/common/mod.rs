//! Shared helpers for the HTTP-level tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, Response, StatusCode, header};
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

use sponsor_server::email::EmailError;
use sponsor_server::store::catalog;
use sponsor_server::{Config, EmailMessage, EmailSender, RecordStore, ServerState, api};

pub const TEST_SENDER: &str = "events@college.test";

/// Records every message; fails for addresses listed in `reject`
#[derive(Default)]
pub struct RecordingSender {
    pub reject: Vec<String>,
    pub sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingSender {
    pub fn rejecting(addresses: &[&str]) -> Self {
        Self {
            reject: addresses.iter().map(|a| a.to_string()).collect(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        self.sent.lock().push(message.clone());
        if self.reject.contains(&message.to) {
            return Err(EmailError::from_status(403, "The from address does not match a verified Sender Identity"));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn test_config() -> Config {
    let mut config = Config::with_overrides(0, None);
    config.sendgrid_api_key = None;
    config.default_sender = TEST_SENDER.into();
    config
}

pub fn test_state(sender: Arc<dyn EmailSender>) -> ServerState {
    let store = RecordStore::in_memory(catalog::default_catalog());
    ServerState::new(test_config(), store, sender)
}

/// In-memory app with a sender that accepts everything
pub fn test_app() -> (Router, Arc<RecordingSender>) {
    let sender = Arc::new(RecordingSender::default());
    let app = api::build_app(test_state(sender.clone()));
    (app, sender)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_text(app: &Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Send and decode, asserting the status first
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    expected: StatusCode,
) -> Value {
    let response = send(app, method, uri, body).await;
    assert_eq!(response.status(), expected, "{method} {uri}");
    body_json(response).await
}
