//! Integration tests for the Keep login flow
//!
//! Verifies the master token exchange through the port interface,
//! including the rejection path and the no-session guard.

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::MockServer;

use crate::common;

#[tokio::test]
async fn authenticate_exchanges_the_master_token() {
    let server = MockServer::start().await;
    common::mount_token_exchange(&server).await;

    let service = common::keep_service(&server);
    service.authenticate().await.expect("authenticate failed");
}

#[tokio::test]
async fn bad_credentials_surface_the_rejection_code() {
    let server = MockServer::start().await;
    common::mount_token_rejection(&server).await;

    let service = common::keep_service(&server);
    let err = service.authenticate().await.unwrap_err();

    assert_eq!(err.side, Side::Keep);
    assert!(err.reason.contains("BadAuthentication"));
}

#[tokio::test]
async fn fetch_without_a_session_is_rejected() {
    let server = MockServer::start().await;
    let service = common::keep_service(&server);

    let err = service.fetch_snapshot().await.unwrap_err();

    assert_eq!(err.side, Side::Keep);
    assert!(err.reason.contains("authenticate"));
}
