//! Shared test helpers for Keep adapter integration tests
//!
//! Provides wiremock-based setup for the two backends the adapter talks
//! to: the token exchange host and the notes API. Each helper mounts one
//! endpoint; tests combine them as needed.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use listbridge_core::config::KeepConfig;
use listbridge_keep::{KeepClient, KeepListService};

/// Note id the test service is configured with
pub const LIST_ID: &str = "note-groceries";

/// Builds a service whose client points at the mock server for both the
/// token exchange and the notes API.
pub fn keep_service(server: &MockServer) -> KeepListService {
    let client = KeepClient::with_base_urls(
        server.uri(),
        format!("{}/notes/v1", server.uri()),
        Duration::from_secs(5),
    )
    .expect("client construction failed");

    let config = KeepConfig {
        email: "user@example.com".to_string(),
        master_token: "aas_et/device-master-token".into(),
        list_id: LIST_ID.to_string(),
    };
    KeepListService::with_client(&config, client)
}

/// Mounts a successful token exchange.
pub async fn mount_token_exchange(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("SID=x\nLSID=y\nAuth=bearer-token-001\nservices=memento\n"),
        )
        .mount(server)
        .await;
}

/// Mounts a token exchange that rejects the credentials.
pub async fn mount_token_rejection(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string("Error=BadAuthentication\nUrl=https://accounts.google.com/\n"),
        )
        .mount(server)
        .await;
}

/// Mounts the changes endpoint returning the given node array.
pub async fn mount_node_feed(server: &MockServer, nodes: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/notes/v1/changes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "nodes": nodes, "toVersion": "v1" })),
        )
        .mount(server)
        .await;
}

/// The common fixture: one checklist with three items, sort values in
/// display order Milk, Bread, Eggs, plus an unrelated plain note.
pub fn grocery_feed() -> serde_json::Value {
    serde_json::json!([
        {
            "id": LIST_ID,
            "type": "LIST",
            "title": "Groceries"
        },
        {
            "id": "item-eggs",
            "type": "LIST_ITEM",
            "parentId": LIST_ID,
            "text": "Eggs",
            "checked": false,
            "sortValue": 10
        },
        {
            "id": "item-milk",
            "type": "LIST_ITEM",
            "parentId": LIST_ID,
            "text": "Milk",
            "checked": false,
            "sortValue": 30
        },
        {
            "id": "item-bread",
            "type": "LIST_ITEM",
            "parentId": LIST_ID,
            "text": "Bread",
            "checked": true,
            "sortValue": 20
        },
        {
            "id": "note-diary",
            "type": "NOTE",
            "title": "Diary",
            "text": "unrelated"
        }
    ])
}
