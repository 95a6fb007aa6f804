//! Integration tests for snapshot fetching from Bring!
//!
//! Covers list resolution (by name and by first-list default), the
//! mapping of `purchase`/`recently` onto checked flags, and the cached
//! resolution across fetches.

use listbridge_core::domain::Side;
use listbridge_core::ports::IListService;
use wiremock::MockServer;

use crate::common;

#[tokio::test]
async fn fetch_maps_active_and_recent_items() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::mount_lists(&server, common::two_lists()).await;
    common::mount_list_contents(
        &server,
        common::HOME_LIST_UUID,
        serde_json::json!([
            { "name": "Milk", "specification": "2 litres" },
            { "name": "Eggs", "specification": "" }
        ]),
        serde_json::json!([
            { "name": "Bread", "specification": "" }
        ]),
    )
    .await;

    let service = common::bring_service(&server, None);
    service.authenticate().await.expect("authenticate failed");
    let snapshot = service.fetch_snapshot().await.expect("fetch failed");

    assert_eq!(snapshot.side, Side::Bring);
    let rendered: Vec<(&str, bool)> = snapshot
        .items
        .iter()
        .map(|item| (item.label.as_str(), item.checked))
        .collect();
    assert_eq!(
        rendered,
        vec![("Milk", false), ("Eggs", false), ("Bread", true)]
    );
}

#[tokio::test]
async fn a_configured_name_selects_that_list() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::mount_lists(&server, common::two_lists()).await;
    common::mount_list_contents(
        &server,
        "list-office",
        serde_json::json!([{ "name": "Coffee" }]),
        serde_json::json!([]),
    )
    .await;

    let service = common::bring_service(&server, Some("Office"));
    service.authenticate().await.expect("authenticate failed");
    let snapshot = service.fetch_snapshot().await.expect("fetch failed");

    assert_eq!(snapshot.items[0].label, "Coffee");
}

#[tokio::test]
async fn an_unknown_list_name_is_an_error() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::mount_lists(&server, common::two_lists()).await;

    let service = common::bring_service(&server, Some("Ferienhaus"));
    service.authenticate().await.expect("authenticate failed");
    let err = service.fetch_snapshot().await.unwrap_err();

    assert_eq!(err.side, Side::Bring);
    assert!(err.reason.contains("Ferienhaus"));
    assert!(err.reason.contains("2 list(s)"));
}

#[tokio::test]
async fn list_resolution_is_cached_across_fetches() {
    let server = MockServer::start().await;
    common::mount_login(&server).await;
    common::lists_mock(common::two_lists())
        .expect(1)
        .mount(&server)
        .await;
    common::mount_list_contents(
        &server,
        common::HOME_LIST_UUID,
        serde_json::json!([{ "name": "Milk" }]),
        serde_json::json!([]),
    )
    .await;

    let service = common::bring_service(&server, None);
    service.authenticate().await.expect("authenticate failed");
    service.fetch_snapshot().await.expect("first fetch failed");
    service.fetch_snapshot().await.expect("second fetch failed");
}
