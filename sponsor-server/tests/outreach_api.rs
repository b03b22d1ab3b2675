mod common;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use common::{RecordingSender, TEST_SENDER, call, test_app, test_state};
use sponsor_server::api;

async fn seed(app: &axum::Router) {
    call(
        app,
        "POST",
        "/api/templates",
        Some(json!({"id": "intro", "name": "Intro", "subject": "Partner with us", "html": "<p>Dear {{name}}</p>"})),
        StatusCode::CREATED,
    )
    .await;
    for (id, name, status) in [
        ("s1", "Acme", "Not Contacted"),
        ("s2", "Globex", "Not Contacted"),
        ("s3", "Initech", "Interested"),
        ("s4", "Umbrella", "Not Contacted"),
    ] {
        call(
            app,
            "POST",
            "/api/sponsors",
            Some(json!({
                "id": id,
                "name": name,
                "email": format!("hi@{}.com", name.to_lowercase()),
                "status": status
            })),
            StatusCode::CREATED,
        )
        .await;
    }
}

#[tokio::test]
async fn test_all_uncontacted_are_emailed() {
    let (app, sender) = test_app();
    seed(&app).await;

    let result = call(
        &app,
        "POST",
        "/api/send-to-uncontacted",
        Some(json!({"templateId": "intro"})),
        StatusCode::OK,
    )
    .await;
    assert_eq!(result, json!({"emailsSent": 3, "totalSponsors": 3}));

    let sent = sender.sent.lock().clone();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].to, "hi@acme.com");
    assert_eq!(sent[0].from, TEST_SENDER);
    assert_eq!(sent[0].html, "<p>Dear Acme</p>");
    assert_eq!(sent[1].to, "hi@globex.com");

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    for sponsor in sponsors.as_array().unwrap() {
        if sponsor["id"] == "s3" {
            assert_eq!(sponsor["status"], "Interested");
            assert!(sponsor.get("contactedAt").is_none());
        } else {
            assert_eq!(sponsor["status"], "Contacted");
            assert!(sponsor["contactedAt"].is_string());
        }
    }

    let activity = call(&app, "GET", "/api/activity", None, StatusCode::OK).await;
    assert_eq!(activity[0]["title"], "Outreach email sent to 3 sponsors");

    // Nobody left to contact
    let result = call(
        &app,
        "POST",
        "/api/send-to-uncontacted",
        Some(json!({"templateId": "intro"})),
        StatusCode::OK,
    )
    .await;
    assert_eq!(result, json!({"emailsSent": 0, "totalSponsors": 0}));
}

#[tokio::test]
async fn test_failures_are_collected() {
    let sender = Arc::new(RecordingSender::rejecting(&["hi@globex.com"]));
    let app = api::build_app(test_state(sender.clone()));
    seed(&app).await;

    let result = call(
        &app,
        "POST",
        "/api/send-to-uncontacted",
        Some(json!({"templateId": "intro", "sender": "me@college.test"})),
        StatusCode::OK,
    )
    .await;
    assert_eq!(result["emailsSent"], 2);
    assert_eq!(result["totalSponsors"], 3);
    assert_eq!(result["errors"].as_array().unwrap().len(), 1);
    assert_eq!(result["errors"][0]["sponsor"], "hi@globex.com");
    assert_eq!(result["errors"][0]["sponsorId"], "s2");

    // The failed recipient did not stop the ones after it
    assert_eq!(sender.sent.lock().len(), 3);
    assert_eq!(sender.sent.lock()[2].from, "me@college.test");

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    assert_eq!(sponsors[1]["status"], "Not Contacted");
    assert_eq!(sponsors[3]["status"], "Contacted");
}

#[tokio::test]
async fn test_unknown_template() {
    let (app, sender) = test_app();
    seed(&app).await;

    let err = call(
        &app,
        "POST",
        "/api/send-to-uncontacted",
        Some(json!({"templateId": "missing"})),
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(err["code"], 3001);
    assert!(sender.sent.lock().is_empty());

    call(
        &app,
        "POST",
        "/api/send-to-uncontacted",
        Some(json!({})),
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn test_send_single_email() {
    let (app, sender) = test_app();

    let result = call(
        &app,
        "POST",
        "/api/send-email",
        Some(json!({"to": "a@acme.com", "subject": "Hi", "html": "<p>Hello</p>"})),
        StatusCode::OK,
    )
    .await;
    assert_eq!(result, json!({"success": true}));
    assert_eq!(sender.sent.lock()[0].from, TEST_SENDER);
}

#[tokio::test]
async fn test_send_email_provider_rejection() {
    let sender = Arc::new(RecordingSender::rejecting(&["a@acme.com"]));
    let app = api::build_app(test_state(sender));

    let err = call(
        &app,
        "POST",
        "/api/send-email",
        Some(json!({"to": "a@acme.com", "subject": "Hi", "html": "<p>Hello</p>"})),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(err["code"], 3102);
}
