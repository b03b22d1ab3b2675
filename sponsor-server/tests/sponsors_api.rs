mod common;

use http::StatusCode;
use serde_json::json;

use common::{body_bytes, call, send, test_app};

#[tokio::test]
async fn test_create_fills_defaults() {
    let (app, _) = test_app();

    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    assert_eq!(
        sponsors,
        json!([{
            "id": "s1",
            "name": "Acme",
            "email": "a@acme.com",
            "status": "Not Contacted",
            "tier": "bronze",
            "notes": ""
        }])
    );
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (app, _) = test_app();

    let a = call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;
    let b = call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"name": "Globex", "email": "g@globex.com", "tier": "Gold"})),
        StatusCode::CREATED,
    )
    .await;

    assert!(a["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_ne!(a["id"], b["id"]);
    assert_eq!(b["tier"], "gold");
}

#[tokio::test]
async fn test_create_missing_fields() {
    let (app, _) = test_app();

    let err = call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"name": "Acme"})),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(err["code"], 7);
    assert_eq!(err["message"], "email is required");

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    assert_eq!(sponsors, json!([]));
}

#[tokio::test]
async fn test_duplicate_id_conflicts() {
    let (app, _) = test_app();
    let body = json!({"id": "s1", "name": "Acme", "email": "a@acme.com"});

    call(&app, "POST", "/api/sponsors", Some(body.clone()), StatusCode::CREATED).await;
    call(&app, "POST", "/api/sponsors", Some(body), StatusCode::CONFLICT).await;
}

#[tokio::test]
async fn test_patch_unknown_id_leaves_collection() {
    let (app, _) = test_app();
    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;
    let before = body_bytes(send(&app, "GET", "/api/sponsors", None).await).await;

    let err = call(
        &app,
        "PATCH",
        "/api/sponsors/nope",
        Some(json!({"status": "Closed"})),
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(err["code"], 1001);

    let after = body_bytes(send(&app, "GET", "/api/sponsors", None).await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_patch_merges_fields() {
    let (app, _) = test_app();
    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com", "notes": "expo"})),
        StatusCode::CREATED,
    )
    .await;

    let updated = call(
        &app,
        "PATCH",
        "/api/sponsors/s1",
        Some(json!({"status": "interested"})),
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["status"], "Interested");
    assert_eq!(updated["notes"], "expo");
    assert!(updated["updatedAt"].is_string());
}

#[tokio::test]
async fn test_patch_rejects_unknown_status() {
    let (app, _) = test_app();
    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;

    let err = call(
        &app,
        "PATCH",
        "/api/sponsors/s1",
        Some(json!({"status": "Maybe"})),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(err["code"], 1002);
}

#[tokio::test]
async fn test_reads_are_stable() {
    let (app, _) = test_app();
    for name in ["Acme", "Globex", "Initech"] {
        call(
            &app,
            "POST",
            "/api/sponsors",
            Some(json!({"name": name, "email": format!("hi@{}.com", name.to_lowercase())})),
            StatusCode::CREATED,
        )
        .await;
    }

    let first = body_bytes(send(&app, "GET", "/api/sponsors", None).await).await;
    let second = body_bytes(send(&app, "GET", "/api/sponsors", None).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_delete_twice() {
    let (app, _) = test_app();
    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;

    let deleted = call(&app, "DELETE", "/api/sponsors/s1", None, StatusCode::OK).await;
    assert_eq!(deleted["deletedSponsor"]["id"], "s1");

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    assert_eq!(sponsors, json!([]));

    call(&app, "DELETE", "/api/sponsors/s1", None, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_activity_tracks_sponsor_lifecycle() {
    let (app, _) = test_app();
    call(
        &app,
        "POST",
        "/api/sponsors",
        Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com"})),
        StatusCode::CREATED,
    )
    .await;
    call(
        &app,
        "PATCH",
        "/api/sponsors/s1",
        Some(json!({"status": "Closed"})),
        StatusCode::OK,
    )
    .await;

    let activity = call(&app, "GET", "/api/activity", None, StatusCode::OK).await;
    assert_eq!(activity[0]["title"], "Sponsor closed: Acme");
    assert_eq!(activity[1]["title"], "New sponsor added: Acme");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _) = test_app();

    let request = http::Request::builder()
        .method("POST")
        .uri("/api/sponsors")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err = common::body_json(response).await;
    assert_eq!(err["code"], 6);
}

#[tokio::test]
async fn test_unknown_route_and_request_id() {
    let (app, _) = test_app();

    let response = send(&app, "GET", "/api/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app();
    let health = call(&app, "GET", "/api/health", None, StatusCode::OK).await;
    assert_eq!(health["status"], "OK");
    assert!(health["timestamp"].is_string());
}
