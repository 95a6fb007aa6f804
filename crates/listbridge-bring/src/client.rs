//! Bring! API client
//!
//! Typed HTTP client for the Bring! REST backend. The backend is not
//! publicly documented but is stable; the official web app uses the same
//! endpoints and a published-in-the-clear API key.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

/// Base URL for the Bring! REST backend
const BRING_BASE_URL: &str = "https://api.getbring.com/rest";

/// API key the web app ships with; identifies the client, not the user
const BRING_API_KEY: &str = "cof4Nc6D8saplXjE3h3HXqHH8m7VU2i1Gs0g85Sp";

/// Client identifier the backend expects alongside the key
const BRING_CLIENT: &str = "webApp";

// ============================================================================
// Bring API response types
// ============================================================================

/// Credentials returned by the login endpoint
///
/// `uuid` identifies the user account and doubles as a request header
/// on every authenticated call.
#[derive(Debug, Clone, Deserialize)]
pub struct BringSession {
    /// Account uuid
    pub uuid: String,
    /// Bearer token for authenticated calls
    pub access_token: String,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One entry from the account's list collection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BringListInfo {
    /// List uuid, used in item endpoints
    pub list_uuid: String,
    /// Display name, as shown in the apps
    pub name: String,
}

/// Contents of one shopping list
///
/// `purchase` holds the active items, `recently` the completed ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BringListContents {
    #[serde(default)]
    pub purchase: Vec<BringItem>,
    #[serde(default)]
    pub recently: Vec<BringItem>,
}

/// A single item on a shopping list
#[derive(Debug, Clone, Deserialize)]
pub struct BringItem {
    /// Item name, the comparable part
    pub name: String,
    /// Free-text note attached to the item
    #[serde(default)]
    pub specification: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListsResponse {
    lists: Vec<BringListInfo>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ============================================================================
// BringClient
// ============================================================================

/// HTTP client for the Bring! REST backend
///
/// Stateless: the session is an argument to every authenticated call.
pub struct BringClient {
    client: Client,
    base_url: String,
}

impl BringClient {
    /// Creates a client against the production backend.
    ///
    /// # Arguments
    /// * `timeout` - Per-request timeout applied to every call
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(BRING_BASE_URL, timeout)
    }

    /// Creates a client against a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Logs in with email and password.
    ///
    /// # Returns
    /// A [`BringSession`] carrying the account uuid and bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<BringSession> {
        debug!("Logging in to Bring!");

        let response = self
            .identify(self.client.post(format!("{}/v2/bringauth", self.base_url)))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .context("login request failed")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            match message {
                Some(message) => anyhow::bail!("login rejected: {message}"),
                None => anyhow::bail!("login returned HTTP {status}"),
            }
        }

        response
            .json()
            .await
            .context("failed to parse the login response")
    }

    /// Fetches every shopping list the account can see.
    pub async fn load_lists(&self, session: &BringSession) -> Result<Vec<BringListInfo>> {
        let response: ListsResponse = self
            .authed(
                self.client
                    .get(format!("{}/bringusers/{}/lists", self.base_url, session.uuid)),
                session,
            )
            .send()
            .await
            .context("list enumeration request failed")?
            .error_for_status()
            .context("list enumeration returned an error status")?
            .json()
            .await
            .context("failed to parse the list collection")?;

        debug!(lists = response.lists.len(), "Loaded the list collection");
        Ok(response.lists)
    }

    /// Fetches the active and recently completed items of one list.
    pub async fn load_items(
        &self,
        session: &BringSession,
        list_uuid: &str,
    ) -> Result<BringListContents> {
        self.authed(
            self.client
                .get(format!("{}/v2/bringlists/{list_uuid}", self.base_url)),
            session,
        )
        .send()
        .await
        .context("list contents request failed")?
        .error_for_status()
        .context("list contents returned an error status")?
        .json()
        .await
        .context("failed to parse the list contents")
    }

    /// Puts one item onto the active section of a list.
    ///
    /// # Arguments
    /// * `list_uuid` - Target list
    /// * `name` - Item name, already trimmed
    pub async fn save_item(
        &self,
        session: &BringSession,
        list_uuid: &str,
        name: &str,
    ) -> Result<()> {
        debug!(list_uuid, name, "Saving a new item");

        self.authed(
            self.client
                .put(format!("{}/v2/bringlists/{list_uuid}", self.base_url)),
            session,
        )
        .form(&[
            ("purchase", name),
            ("recently", ""),
            ("specification", ""),
            ("remove", ""),
            ("sender", "null"),
        ])
        .send()
        .await
        .context("item save request failed")?
        .error_for_status()
        .context("item save returned an error status")?;

        Ok(())
    }

    /// Adds the client identification headers every call needs.
    fn identify(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-BRING-API-KEY", BRING_API_KEY)
            .header("X-BRING-CLIENT", BRING_CLIENT)
    }

    /// Adds identification plus the per-session authentication headers.
    fn authed(&self, builder: RequestBuilder, session: &BringSession) -> RequestBuilder {
        self.identify(builder)
            .header("X-BRING-USER-UUID", &session.uuid)
            .bearer_auth(&session.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes() {
        let json = r#"{
            "uuid": "user-uuid-1",
            "publicUuid": "public-1",
            "email": "user@example.com",
            "name": "User",
            "access_token": "token-1",
            "refresh_token": "refresh-1",
            "token_type": "Bearer",
            "expires_in": 604799
        }"#;

        let session: BringSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.uuid, "user-uuid-1");
        assert_eq!(session.access_token, "token-1");
        assert_eq!(session.expires_in, Some(604799));
    }

    #[test]
    fn list_collection_deserializes() {
        let json = r#"{
            "lists": [
                { "listUuid": "list-1", "name": "Zuhause", "theme": "ch.publisheria.bring.theme.home" },
                { "listUuid": "list-2", "name": "Office" }
            ]
        }"#;

        let response: ListsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.lists.len(), 2);
        assert_eq!(response.lists[0].list_uuid, "list-1");
        assert_eq!(response.lists[1].name, "Office");
    }

    #[test]
    fn list_contents_split_active_and_recent() {
        let json = r#"{
            "uuid": "list-1",
            "status": "SHARED",
            "purchase": [
                { "name": "Milk", "specification": "2 litres" },
                { "name": "Eggs", "specification": "" }
            ],
            "recently": [
                { "name": "Bread" }
            ]
        }"#;

        let contents: BringListContents = serde_json::from_str(json).unwrap();
        assert_eq!(contents.purchase.len(), 2);
        assert_eq!(contents.purchase[0].specification.as_deref(), Some("2 litres"));
        assert_eq!(contents.recently[0].name, "Bread");
    }

    #[test]
    fn list_contents_tolerate_missing_sections() {
        let contents: BringListContents = serde_json::from_str(r#"{"uuid": "l"}"#).unwrap();
        assert!(contents.purchase.is_empty());
        assert!(contents.recently.is_empty());
    }
}
