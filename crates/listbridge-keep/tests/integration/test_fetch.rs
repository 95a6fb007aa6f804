//! Integration tests for snapshot fetching from Keep
//!
//! Verifies that the account-wide node feed is filtered down to the
//! configured checklist, and that a wrong or mistyped note id fails
//! loudly instead of syncing against an empty list.

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn fetch_assembles_the_checklist_in_display_order() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;
    common::mount_node_feed(&server, common::grocery_feed()).await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    let snapshot = service.fetch_snapshot().await.expect("fetch failed");

    assert_eq!(snapshot.side, Side::Keep);
    let labels: Vec<&str> = snapshot.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Milk", "Bread", "Eggs"]);
    assert!(snapshot.items[1].checked);
    assert!(!snapshot.items[0].checked);
}

#[tokio::test]
async fn a_feed_without_the_configured_note_is_an_error() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;
    common::mount_node_feed(
        &server,
        serde_json::json!([
            { "id": "some-other-note", "type": "LIST", "title": "Other" }
        ]),
    )
    .await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    let err = service.fetch_snapshot().await.unwrap_err();

    assert_eq!(err.side, Side::Keep);
    assert!(err.reason.contains(common::LIST_ID));
}

#[tokio::test]
async fn a_plain_note_id_is_rejected_with_guidance() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;
    common::mount_node_feed(
        &server,
        serde_json::json!([
            { "id": common::LIST_ID, "type": "NOTE", "title": "Groceries", "text": "Milk, Eggs" }
        ]),
    )
    .await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    let err = service.fetch_snapshot().await.unwrap_err();

    assert!(err.reason.contains("plain note"));
}

#[tokio::test]
async fn backend_errors_become_fetch_errors() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;
    Mock::given(method("POST"))
        .and(path("/notes/v1/changes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    let err = service.fetch_snapshot().await.unwrap_err();

    assert_eq!(err.side, Side::Keep);
    assert!(err.reason.contains("500"));
}
