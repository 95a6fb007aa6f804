//! Shared test helpers for Bring! adapter integration tests
//!
//! Provides wiremock-based setup for the login, list collection, and
//! list contents endpoints. Each helper mounts one endpoint; tests
//! combine them as needed.

use std::time::Duration;

use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use listbridge_bring::{BringClient, BringListService};
use listbridge_core::config::BringConfig;

/// Account uuid returned by the mock login
pub const USER_UUID: &str = "user-uuid-1";

/// Uuid of the household list in the standard fixture
pub const HOME_LIST_UUID: &str = "list-zuhause";

/// Builds a service whose client points at the mock server.
///
/// # Arguments
/// * `list_name` - Configured list name; `None` selects the first list
pub fn bring_service(server: &MockServer, list_name: Option<&str>) -> BringListService {
    let client = BringClient::with_base_url(server.uri(), Duration::from_secs(5))
        .expect("client construction failed");

    let config = BringConfig {
        email: "user@example.com".to_string(),
        password: "hunter2".into(),
        list_name: list_name.map(|name| name.to_string()),
    };
    BringListService::with_client(&config, client)
}

/// Mounts a successful login.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/bringauth"))
        .and(header_exists("X-BRING-API-KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": USER_UUID,
            "publicUuid": "public-1",
            "email": "user@example.com",
            "name": "Test User",
            "access_token": "bearer-token-001",
            "refresh_token": "refresh-001",
            "token_type": "Bearer",
            "expires_in": 604799
        })))
        .mount(server)
        .await;
}

/// Mounts a login that rejects the credentials.
pub async fn mount_login_rejection(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/bringauth"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "invalid email or password" })),
        )
        .mount(server)
        .await;
}

/// Builds the list collection mock without mounting it, so tests can
/// attach call-count expectations first.
pub fn lists_mock(lists: serde_json::Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/bringusers/{USER_UUID}/lists")))
        .and(header("X-BRING-USER-UUID", USER_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "lists": lists })))
}

/// Mounts the account's list collection.
pub async fn mount_lists(server: &MockServer, lists: serde_json::Value) {
    lists_mock(lists).mount(server).await;
}

/// The standard two-list account fixture.
pub fn two_lists() -> serde_json::Value {
    serde_json::json!([
        { "listUuid": HOME_LIST_UUID, "name": "Zuhause", "theme": "ch.publisheria.bring.theme.home" },
        { "listUuid": "list-office", "name": "Office" }
    ])
}

/// Mounts the contents of one list.
pub async fn mount_list_contents(
    server: &MockServer,
    list_uuid: &str,
    purchase: serde_json::Value,
    recently: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/bringlists/{list_uuid}")))
        .and(header("X-BRING-USER-UUID", USER_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": list_uuid,
            "status": "SHARED",
            "purchase": purchase,
            "recently": recently
        })))
        .mount(server)
        .await;
}
