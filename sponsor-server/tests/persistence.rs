mod common;

use http::StatusCode;
use serde_json::{Value, json};

use common::{call, test_config};
use sponsor_server::{ServerState, api};

#[tokio::test]
async fn test_data_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("data").join("db.json");

    let mut config = test_config();
    config.data_file = Some(data_file.clone());

    {
        let state = ServerState::initialize(&config).await.unwrap();
        assert!(state.store.is_file_backed());
        let app = api::build_app(state);

        call(
            &app,
            "POST",
            "/api/sponsors",
            Some(json!({"id": "s1", "name": "Acme", "email": "a@acme.com", "tier": "silver"})),
            StatusCode::CREATED,
        )
        .await;
        call(
            &app,
            "POST",
            "/api/tiers",
            Some(json!({"id": "silver", "name": "Silver", "price": 5000})),
            StatusCode::CREATED,
        )
        .await;
    }

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(raw["sponsors"][0]["id"], "s1");
    assert_eq!(raw["settings"]["tiers"][0]["price"], 5000);

    let state = ServerState::initialize(&config).await.unwrap();
    let app = api::build_app(state);

    let sponsors = call(&app, "GET", "/api/sponsors", None, StatusCode::OK).await;
    assert_eq!(sponsors[0]["name"], "Acme");
    assert_eq!(sponsors[0]["tier"], "silver");

    let activity = call(&app, "GET", "/api/activity", None, StatusCode::OK).await;
    assert_eq!(activity[0]["title"], "New sponsor added: Acme");
}

#[tokio::test]
async fn test_hand_edited_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("db.json");
    std::fs::write(
        &data_file,
        r#"{
            "sponsors": [{"id": "s9", "name": "Wayne", "email": "b@wayne.com", "status": "Closed", "tier": "gold"}],
            "settings": {"tiers": [{"id": "g", "name": "Gold", "minimumAmount": "₹2,35,000"}]}
        }"#,
    )
    .unwrap();

    let mut config = test_config();
    config.data_file = Some(data_file);
    let app = api::build_app(ServerState::initialize(&config).await.unwrap());

    let stats = call(&app, "GET", "/api/stats", None, StatusCode::OK).await;
    assert_eq!(stats["totalRaised"], "₹2,35,000");
    assert_eq!(stats["totalDeliverables"], 0);
}
