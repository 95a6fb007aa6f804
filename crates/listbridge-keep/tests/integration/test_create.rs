//! Integration tests for item creation on Keep
//!
//! Verifies the shape of the uploaded node and the error mapping when
//! the backend refuses a write.

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn create_uploads_an_unchecked_list_item_under_the_note() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;

    Mock::given(method("POST"))
        .and(path("/notes/v1/changes"))
        .and(body_partial_json(serde_json::json!({
            "nodes": [{
                "type": "LIST_ITEM",
                "parentId": common::LIST_ID,
                "text": "Milk",
                "checked": false
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "nodes": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    service.create_item("Milk").await.expect("create failed");
}

#[tokio::test]
async fn rejected_writes_become_write_errors() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;
    Mock::given(method("POST"))
        .and(path("/notes/v1/changes"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
    let err = service.create_item("Milk").await.unwrap_err();

    assert_eq!(err.side, Side::Keep);
    assert!(err.reason.contains("403"));
}

#[tokio::test]
async fn create_without_a_session_is_rejected() {
    let server = MockServer::start().await;
    let service = common::keep_service(&server);

    let err = service.create_item("Milk").await.unwrap_err();

    assert!(err.reason.contains("authenticate"));
}
