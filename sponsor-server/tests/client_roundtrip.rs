//! The real server on a socket, driven through sponsor-client

mod common;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use common::{RecordingSender, test_config, test_state};
use sponsor_client::models::{
    DeliverableCreate, DeliverableStatus, DeliverableUpdate, SendToUncontactedRequest,
    SponsorCreate, SponsorStatus, TemplateCreate, TierCreate,
};
use sponsor_client::{ClientConfig, RowMode, SponsorApi, SponsorRowState};
use sponsor_server::Server;

async fn start() -> (SponsorApi, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = Server::with_state(test_config(), test_state(Arc::new(RecordingSender::default())));
    let (stop, stopped) = oneshot::channel::<()>();

    tokio::spawn(async move {
        server
            .serve(listener, async {
                let _ = stopped.await;
            })
            .await
            .unwrap();
    });

    let api = SponsorApi::new(&ClientConfig::new(format!("http://{addr}"))).unwrap();
    (api, stop)
}

#[tokio::test]
async fn test_dashboard_flow() {
    let (api, stop) = start().await;

    assert_eq!(api.health().await.unwrap().status, "OK");

    api.create_tier(&TierCreate {
        name: Some("Gold".into()),
        price: Some(shared::money::PriceInput::Amount(10000.0)),
        ..Default::default()
    })
    .await
    .unwrap();

    let acme = api
        .create_sponsor(&SponsorCreate {
            name: Some("Acme".into()),
            email: Some("a@acme.com".into()),
            tier: Some("gold".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(api.stats().await.unwrap().total_raised, "₹0");

    // Close the deal through the row editor
    let mut row = SponsorRowState::new(acme.clone());
    row.begin_edit().unwrap();
    row.draft_mut().unwrap().status = SponsorStatus::Closed;
    row.save(&api).await.unwrap();
    assert_eq!(row.mode(), RowMode::Viewing);

    // The mutation dropped the cached stats
    assert_eq!(api.stats().await.unwrap().total_raised, "₹10,000");
    assert_eq!(api.report().await.unwrap().total_sponsors, 1);

    let deliverable = api
        .create_deliverable(&DeliverableCreate {
            sponsor_id: Some(acme.id.clone()),
            title: Some("Logo on banner".into()),
            due_date: Some("2025-03-01".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(api.sponsor_deliverables(&acme.id).await.unwrap().len(), 1);

    api.update_deliverable(
        &deliverable.id,
        &DeliverableUpdate {
            status: Some("done".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let deliverables = api.sponsor_deliverables(&acme.id).await.unwrap();
    assert_eq!(deliverables[0].status, DeliverableStatus::Done);
    assert_eq!(api.stats().await.unwrap().deliverable_completion, 100);

    let activity = api.activity().await.unwrap();
    assert!(activity.len() <= 10);
    assert_eq!(activity[0].title, "Deliverable completed: Logo on banner");

    let _ = stop.send(());
}

#[tokio::test]
async fn test_outreach_through_client() {
    let (api, stop) = start().await;

    api.create_template(&TemplateCreate {
        id: Some("intro".into()),
        name: Some("Intro".into()),
        subject: Some("Partner with us".into()),
        html: Some("Dear {{name}}".into()),
    })
    .await
    .unwrap();
    for name in ["Acme", "Globex"] {
        api.create_sponsor(&SponsorCreate {
            name: Some(name.into()),
            email: Some(format!("hi@{}.com", name.to_lowercase())),
            ..Default::default()
        })
        .await
        .unwrap();
    }
    assert_eq!(api.stats().await.unwrap().not_contacted, 2);

    let result = api
        .send_to_uncontacted(&SendToUncontactedRequest {
            template_id: Some("intro".into()),
            sender: None,
        })
        .await
        .unwrap();
    assert_eq!(result.emails_sent, 2);
    assert!(result.errors.is_empty());

    let stats = api.stats().await.unwrap();
    assert_eq!(stats.not_contacted, 0);
    assert_eq!(stats.contacted, 2);

    let err = api.delete_template("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error_code(), Some(3001));

    let _ = stop.send(());
}
