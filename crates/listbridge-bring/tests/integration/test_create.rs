//! Integration tests for item creation on Bring!
//!
//! Verifies the save form shape, list resolution on a create-first path,
//! and the error mapping when the backend refuses a write.

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn create_puts_the_item_onto_the_purchase_section() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::mount_lists(&server, common::two_lists()).await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/bringlists/{}", common::HOME_LIST_UUID)))
        .and(body_string_contains("purchase=Milk"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = common::bring_service(&server, None);
    service.authenticate().await.expect("authenticate failed");
    service.create_item("Milk").await.expect("create failed");
}

#[tokio::test]
async fn rejected_writes_become_write_errors() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::mount_lists(&server, common::two_lists()).await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/bringlists/{}", common::HOME_LIST_UUID)))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = common::bring_service(&server, None);
    service.authenticate().await.expect("authenticate failed");
    let err = service.create_item("Milk").await.unwrap_err();

    assert_eq!(err.side, Side::Bring);
    assert!(err.reason.contains("500"));
}

#[tokio::test]
async fn create_without_a_session_is_rejected() {
    let server = MockServer::start().await;
    let service = common::bring_service(&server, None);

    let err = service.create_item("Milk").await.unwrap_err();

    assert!(err.reason.contains("authenticate"));
}
