//! Google Keep API client
//!
//! Typed HTTP client for the private notes backend used by the Keep
//! Android app. Covers the two calls a sync run needs: exchanging the
//! device master token for a bearer token, and the `changes` endpoint
//! that both reads and writes the node feed.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Base URL for the Android account token exchange
const AUTH_BASE_URL: &str = "https://android.clients.google.com";

/// Base URL for the notes backend
const API_BASE_URL: &str = "https://www.googleapis.com/notes/v1";

/// OAuth scope the Keep app requests for its bearer tokens
const OAUTH_SERVICE: &str = "oauth2:https://www.googleapis.com/auth/memento";

/// Package name the token exchange expects
const APP_PACKAGE: &str = "com.google.android.keep";

/// Device identifier sent with the token exchange; any stable hex string
/// is accepted once a master token exists for the account
const DEVICE_ID: &str = "0123456789abcdef";

// ============================================================================
// Notes API wire types
// ============================================================================

/// One node from the notes changes feed.
///
/// Keep models a checklist as a `LIST` node whose `LIST_ITEM` children
/// carry the entries; plain notes come through as `NOTE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepNode {
    /// Node id, unique per account
    pub id: String,
    /// Node type: `LIST`, `LIST_ITEM`, or `NOTE`
    #[serde(rename = "type")]
    pub kind: String,
    /// Id of the containing node, set on `LIST_ITEM` nodes
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Note title, set on `LIST` and `NOTE` nodes
    #[serde(default)]
    pub title: Option<String>,
    /// Item label (or note body for `NOTE` nodes)
    #[serde(default)]
    pub text: Option<String>,
    /// Whether a `LIST_ITEM` is ticked off
    #[serde(default)]
    pub checked: Option<bool>,
    /// Display ordering; Keep shows higher values first
    #[serde(default)]
    pub sort_value: Option<i64>,
}

/// Request body for the `changes` endpoint
///
/// Fetches send an empty `nodes` array; writes carry the new nodes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangesRequest {
    client_timestamp: String,
    request_header: RequestHeader,
    nodes: Vec<NodeUpload>,
}

impl ChangesRequest {
    fn new(nodes: Vec<NodeUpload>) -> Self {
        Self {
            client_timestamp: Utc::now().to_rfc3339(),
            request_header: RequestHeader::new(),
            nodes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestHeader {
    client_session_id: String,
    client_platform: &'static str,
}

impl RequestHeader {
    fn new() -> Self {
        Self {
            client_session_id: format!(
                "s--{}--{}",
                Utc::now().timestamp_millis(),
                Uuid::new_v4().simple()
            ),
            client_platform: "ANDROID",
        }
    }
}

/// New node sent up through `changes`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeUpload {
    id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    parent_id: String,
    text: String,
    checked: bool,
    timestamps: Timestamps,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Timestamps {
    created: String,
    updated: String,
}

/// Response body from the `changes` endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangesResponse {
    #[serde(default)]
    nodes: Vec<KeepNode>,
}

// ============================================================================
// KeepClient
// ============================================================================

/// HTTP client for the Keep notes backend
///
/// Stateless: the bearer token is an argument to every call, so one
/// client can serve any number of sessions.
pub struct KeepClient {
    client: Client,
    auth_base_url: String,
    api_base_url: String,
}

impl KeepClient {
    /// Creates a client against the production endpoints.
    ///
    /// # Arguments
    /// * `timeout` - Per-request timeout applied to every call
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_urls(AUTH_BASE_URL, API_BASE_URL, timeout)
    }

    /// Creates a client against custom endpoints (useful for testing).
    ///
    /// # Arguments
    /// * `auth_base_url` - Replacement for the token exchange host
    /// * `api_base_url` - Replacement for the notes backend, including
    ///   any path prefix
    pub fn with_base_urls(
        auth_base_url: impl Into<String>,
        api_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            client,
            auth_base_url: auth_base_url.into(),
            api_base_url: api_base_url.into(),
        })
    }

    /// Exchanges the device master token for a short-lived bearer token.
    ///
    /// # Arguments
    /// * `email` - Google account email
    /// * `master_token` - Long-lived device token for that account
    ///
    /// # Returns
    /// The bearer token to pass to the notes endpoints.
    pub async fn obtain_token(&self, email: &str, master_token: &str) -> Result<String> {
        debug!("Exchanging the master token for a bearer token");

        let params = [
            ("accountType", "HOSTED_OR_GOOGLE"),
            ("Email", email),
            ("has_permission", "1"),
            ("EncryptedPasswd", master_token),
            ("service", OAUTH_SERVICE),
            ("source", "android"),
            ("androidId", DEVICE_ID),
            ("app", APP_PACKAGE),
        ];

        let response = self
            .client
            .post(format!("{}/auth", self.auth_base_url))
            .form(&params)
            .send()
            .await
            .context("token exchange request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read the token exchange response")?;

        parse_token_response(status, &body)
    }

    /// Fetches the full node feed for the account.
    ///
    /// # Arguments
    /// * `bearer_token` - Token from [`KeepClient::obtain_token`]
    pub async fn fetch_nodes(&self, bearer_token: &str) -> Result<Vec<KeepNode>> {
        let response: ChangesResponse = self
            .client
            .post(self.changes_url())
            .bearer_auth(bearer_token)
            .json(&ChangesRequest::new(Vec::new()))
            .send()
            .await
            .context("changes request failed")?
            .error_for_status()
            .context("changes request returned an error status")?
            .json()
            .await
            .context("failed to parse the changes response")?;

        debug!(nodes = response.nodes.len(), "Fetched the node feed");
        Ok(response.nodes)
    }

    /// Appends one unchecked item to a checklist note.
    ///
    /// # Arguments
    /// * `bearer_token` - Token from [`KeepClient::obtain_token`]
    /// * `list_id` - Id of the `LIST` node to append to
    /// * `label` - Item text, already trimmed
    pub async fn create_list_item(
        &self,
        bearer_token: &str,
        list_id: &str,
        label: &str,
    ) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let node = NodeUpload {
            id: Uuid::new_v4().to_string(),
            kind: "LIST_ITEM",
            parent_id: list_id.to_string(),
            text: label.to_string(),
            checked: false,
            timestamps: Timestamps {
                created: now.clone(),
                updated: now,
            },
        };

        debug!(list_id, label, "Uploading a new list item");
        self.client
            .post(self.changes_url())
            .bearer_auth(bearer_token)
            .json(&ChangesRequest::new(vec![node]))
            .send()
            .await
            .context("item upload request failed")?
            .error_for_status()
            .context("item upload returned an error status")?;

        Ok(())
    }

    fn changes_url(&self) -> String {
        format!("{}/changes", self.api_base_url)
    }
}

/// Parses the line-oriented token exchange body.
///
/// Success bodies carry an `Auth=` line; rejections carry `Error=` with a
/// short code such as `BadAuthentication`.
fn parse_token_response(status: StatusCode, body: &str) -> Result<String> {
    for line in body.lines() {
        if let Some(token) = line.strip_prefix("Auth=") {
            return Ok(token.to_string());
        }
    }
    for line in body.lines() {
        if let Some(code) = line.strip_prefix("Error=") {
            anyhow::bail!("Google rejected the master token: {code}");
        }
    }
    anyhow::bail!("unexpected token exchange response (HTTP {status})");
}
