//! KeepListService - IListService implementation for Google Keep
//!
//! Wraps the [`KeepClient`] and maps one configured checklist note onto
//! the port contract.
//!
//! ## Design Notes
//!
//! - Uses `tokio::sync::Mutex` for the bearer token because the port
//!   methods take `&self` while `authenticate` must store the session.
//! - The notes feed is account-wide, so every fetch filters it down to
//!   the configured note and its `LIST_ITEM` children.
//! - Internal failures travel as `anyhow` chains and are flattened into
//!   the port's typed errors at this boundary.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::info;

use listbridge_core::config::KeepConfig;
use listbridge_core::domain::{AuthError, FetchError, ListItem, Side, Snapshot, WriteError};
use listbridge_core::ports::IListService;

use crate::client::{KeepClient, KeepNode};

/// Google Keep implementation of [`IListService`]
///
/// Holds the bearer token obtained by `authenticate` for the rest of
/// the run; sessions are never persisted.
pub struct KeepListService {
    client: KeepClient,
    email: String,
    master_token: String,
    list_id: String,
    session: Mutex<Option<String>>,
}

impl KeepListService {
    /// Creates the service from its config section.
    ///
    /// # Arguments
    /// * `config` - Keep account settings (validated beforehand)
    /// * `timeout` - Per-request HTTP timeout
    pub fn new(config: &KeepConfig, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self::with_client(config, KeepClient::new(timeout)?))
    }

    /// Creates the service around an existing client (useful for testing).
    pub fn with_client(config: &KeepConfig, client: KeepClient) -> Self {
        Self {
            client,
            email: config.email.clone(),
            master_token: config.master_token.expose().to_string(),
            list_id: config.list_id.clone(),
            session: Mutex::new(None),
        }
    }

    async fn bearer_token(&self) -> Result<String, String> {
        self.session
            .lock()
            .await
            .clone()
            .ok_or_else(|| "no active session (authenticate first)".to_string())
    }
}

#[async_trait::async_trait]
impl IListService for KeepListService {
    fn side(&self) -> Side {
        Side::Keep
    }

    async fn authenticate(&self) -> Result<(), AuthError> {
        let token = self
            .client
            .obtain_token(&self.email, &self.master_token)
            .await
            .map_err(|err| AuthError::new(Side::Keep, format!("{err:#}")))?;

        *self.session.lock().await = Some(token);
        info!(email = %self.email, "Google Keep login succeeded");
        Ok(())
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let token = self
            .bearer_token()
            .await
            .map_err(|reason| FetchError::new(Side::Keep, reason))?;

        let nodes = self
            .client
            .fetch_nodes(&token)
            .await
            .map_err(|err| FetchError::new(Side::Keep, format!("{err:#}")))?;

        let items = checklist_items(&nodes, &self.list_id)
            .map_err(|reason| FetchError::new(Side::Keep, reason))?;
        Ok(Snapshot::new(Side::Keep, items))
    }

    async fn create_item(&self, label: &str) -> Result<(), WriteError> {
        let token = self
            .bearer_token()
            .await
            .map_err(|reason| WriteError::new(Side::Keep, reason))?;

        self.client
            .create_list_item(&token, &self.list_id, label)
            .await
            .map_err(|err| WriteError::new(Side::Keep, format!("{err:#}")))
    }
}

/// Extracts the configured checklist's items from the account-wide feed.
///
/// Items come back in display order: Keep shows higher sort values first.
/// Rejects plain notes so a mistyped note id fails loudly instead of
/// syncing against an empty list.
fn checklist_items(nodes: &[KeepNode], list_id: &str) -> Result<Vec<ListItem>, String> {
    let list = nodes
        .iter()
        .find(|node| node.id == list_id)
        .ok_or_else(|| format!("no note with id {list_id} in this account"))?;

    match list.kind.as_str() {
        "LIST" => {}
        "NOTE" => {
            return Err(format!(
                "note {list_id} is a plain note; point list_id at a checklist note"
            ));
        }
        other => {
            return Err(format!("note {list_id} has unsupported type {other}"));
        }
    }

    let mut children: Vec<&KeepNode> = nodes
        .iter()
        .filter(|node| node.kind == "LIST_ITEM" && node.parent_id.as_deref() == Some(list_id))
        .collect();
    children.sort_by_key(|node| std::cmp::Reverse(node.sort_value.unwrap_or(0)));

    Ok(children
        .into_iter()
        .map(|node| ListItem::new(node.text.clone().unwrap_or_default(), node.checked.unwrap_or(false)))
        .collect())
}
