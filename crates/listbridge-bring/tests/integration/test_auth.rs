//! Integration tests for the Bring! login flow

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::MockServer;

use crate::common;

#[tokio::test]
async fn authenticate_obtains_a_session() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;

    let service = common::bring_service(&server, None);
    service.authenticate().await.expect("authenticate failed");
}

#[tokio::test]
async fn bad_credentials_surface_the_backend_message() {
    let server = MockServer::start().await;
    common::mount_login_rejection(&server).await;

    let service = common::bring_service(&server, None);
    let err = service.authenticate().await.unwrap_err();

    assert_eq!(err.side, Side::Bring);
    assert!(err.reason.contains("invalid email or password"));
}

#[tokio::test]
async fn fetch_without_a_session_is_rejected() {
    let server = MockServer::start().await;
    let service = common::bring_service(&server, None);

    let err = service.fetch_snapshot().await.unwrap_err();

    assert_eq!(err.side, Side::Bring);
    assert!(err.reason.contains("authenticate"));
}
