//! SendGrid client against a local stand-in for the provider

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, extract::State, http::HeaderMap, http::StatusCode, routing::post};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;

use sponsor_server::email::{EmailError, SendGridSender};
use sponsor_server::{EmailMessage, EmailSender};

#[derive(Clone, Default)]
struct Provider {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn mail_send(
    State(provider): State<Provider>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let from = body["from"]["email"].as_str().unwrap_or_default().to_string();
    provider.requests.lock().push((auth.clone(), body));

    if auth.as_deref() != Some("Bearer good-key") {
        return (StatusCode::UNAUTHORIZED, "bad key".into());
    }
    if from != "verified@college.test" {
        return (StatusCode::FORBIDDEN, "sender identity not verified".into());
    }
    (StatusCode::ACCEPTED, String::new())
}

async fn spawn_provider() -> (String, Provider) {
    let provider = Provider::default();
    let app = Router::new()
        .route("/v3/mail/send", post(mail_send))
        .with_state(provider.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v3/mail/send"), provider)
}

fn message(from: &str) -> EmailMessage {
    EmailMessage {
        to: "a@acme.com".into(),
        from: from.into(),
        subject: "Partner with us".into(),
        html: "<p>Dear Acme</p>".into(),
    }
}

#[tokio::test]
async fn test_accepted() {
    let (url, provider) = spawn_provider().await;
    let sender = SendGridSender::new("good-key", url, Duration::from_secs(5)).unwrap();

    sender.send(&message("verified@college.test")).await.unwrap();

    let requests = provider.requests.lock();
    let (_, body) = &requests[0];
    assert_eq!(body["personalizations"][0]["to"][0]["email"], "a@acme.com");
    assert_eq!(body["content"][0]["type"], "text/html");
    assert_eq!(body["content"][0]["value"], "<p>Dear Acme</p>");
}

#[tokio::test]
async fn test_unverified_sender() {
    let (url, _) = spawn_provider().await;
    let sender = SendGridSender::new("good-key", url, Duration::from_secs(5)).unwrap();

    let err = sender.send(&message("someone@else.test")).await.unwrap_err();
    assert!(matches!(err, EmailError::SenderNotVerified { .. }));
}

#[tokio::test]
async fn test_invalid_key() {
    let (url, _) = spawn_provider().await;
    let sender = SendGridSender::new("wrong", url, Duration::from_secs(5)).unwrap();

    let err = sender.send(&message("verified@college.test")).await.unwrap_err();
    assert!(matches!(err, EmailError::InvalidApiKey { .. }));
}

#[tokio::test]
async fn test_unreachable_provider() {
    // Nothing listens on the discard port
    let sender = SendGridSender::new(
        "good-key",
        "http://127.0.0.1:9/v3/mail/send",
        Duration::from_secs(2),
    )
    .unwrap();

    let err = sender.send(&message("verified@college.test")).await.unwrap_err();
    assert!(matches!(err, EmailError::Transport(_)));
}
