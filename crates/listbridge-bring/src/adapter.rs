//! BringListService - IListService implementation for Bring!
//!
//! Wraps the [`BringClient`] and maps one shopping list onto the port
//! contract.
//!
//! ## Design Notes
//!
//! - The list uuid is not configuration: the config names a list (or
//!   nothing, meaning the account's first), and the adapter resolves the
//!   uuid once per session and caches it.
//! - Uses `tokio::sync::Mutex` for the session state because the port
//!   methods take `&self`.
//! - Internal failures travel as `anyhow` chains and are flattened into
//!   the port's typed errors at this boundary.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use listbridge_core::config::BringConfig;
use listbridge_core::domain::{AuthError, FetchError, ListItem, Side, Snapshot, WriteError};
use listbridge_core::ports::IListService;

use crate::client::{BringClient, BringListContents, BringListInfo, BringSession};

/// Bring! implementation of [`IListService`]
pub struct BringListService {
    client: BringClient,
    email: String,
    password: String,
    list_name: Option<String>,
    state: Mutex<SessionState>,
}

/// Per-session state guarded by the adapter mutex
#[derive(Default)]
struct SessionState {
    session: Option<BringSession>,
    list_uuid: Option<String>,
}

impl BringListService {
    /// Creates the service from its config section.
    ///
    /// # Arguments
    /// * `config` - Bring! account settings (validated beforehand)
    /// * `timeout` - Per-request HTTP timeout
    pub fn new(config: &BringConfig, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self::with_client(config, BringClient::new(timeout)?))
    }

    /// Creates the service around an existing client (useful for testing).
    pub fn with_client(config: &BringConfig, client: BringClient) -> Self {
        Self {
            client,
            email: config.email.clone(),
            password: config.password.expose().to_string(),
            list_name: config.list_name.clone(),
            state: Mutex::new(SessionState::default()),
        }
    }

    async fn session(&self) -> Result<BringSession, String> {
        self.state
            .lock()
            .await
            .session
            .clone()
            .ok_or_else(|| "no active session (authenticate first)".to_string())
    }

    /// Returns the uuid of the configured list, resolving and caching it
    /// on first use.
    async fn resolved_list_uuid(&self, session: &BringSession) -> anyhow::Result<String> {
        if let Some(uuid) = self.state.lock().await.list_uuid.clone() {
            return Ok(uuid);
        }

        let lists = self.client.load_lists(session).await?;
        let chosen = choose_list(&lists, self.list_name.as_deref())?;
        debug!(list = %chosen.name, uuid = %chosen.list_uuid, "Resolved the shopping list");

        let uuid = chosen.list_uuid.clone();
        self.state.lock().await.list_uuid = Some(uuid.clone());
        Ok(uuid)
    }
}

#[async_trait::async_trait]
impl IListService for BringListService {
    fn side(&self) -> Side {
        Side::Bring
    }

    async fn authenticate(&self) -> Result<(), AuthError> {
        let session = self
            .client
            .login(&self.email, &self.password)
            .await
            .map_err(|err| AuthError::new(Side::Bring, format!("{err:#}")))?;

        // A fresh login invalidates any cached list resolution.
        let mut state = self.state.lock().await;
        state.session = Some(session);
        state.list_uuid = None;
        drop(state);

        info!(email = %self.email, "Bring! login succeeded");
        Ok(())
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let session = self
            .session()
            .await
            .map_err(|reason| FetchError::new(Side::Bring, reason))?;

        let list_uuid = self
            .resolved_list_uuid(&session)
            .await
            .map_err(|err| FetchError::new(Side::Bring, format!("{err:#}")))?;

        let contents = self
            .client
            .load_items(&session, &list_uuid)
            .await
            .map_err(|err| FetchError::new(Side::Bring, format!("{err:#}")))?;

        Ok(Snapshot::new(Side::Bring, snapshot_items(&contents)))
    }

    async fn create_item(&self, label: &str) -> Result<(), WriteError> {
        let session = self
            .session()
            .await
            .map_err(|reason| WriteError::new(Side::Bring, reason))?;

        let list_uuid = self
            .resolved_list_uuid(&session)
            .await
            .map_err(|err| WriteError::new(Side::Bring, format!("{err:#}")))?;

        self.client
            .save_item(&session, &list_uuid, label)
            .await
            .map_err(|err| WriteError::new(Side::Bring, format!("{err:#}")))
    }
}

/// Picks the configured list out of the account's collection.
///
/// An explicit name must match exactly; without one the account's first
/// list is used, which is the common single-list household case.
fn choose_list<'a>(
    lists: &'a [BringListInfo],
    wanted: Option<&str>,
) -> anyhow::Result<&'a BringListInfo> {
    match wanted {
        Some(name) => lists.iter().find(|list| list.name == name).ok_or_else(|| {
            anyhow::anyhow!(
                "no shopping list named '{name}' (the account has {} list(s))",
                lists.len()
            )
        }),
        None => lists
            .first()
            .ok_or_else(|| anyhow::anyhow!("the account has no shopping lists")),
    }
}

/// Flattens list contents into snapshot items: active entries first as
/// unchecked, recently completed ones after as checked.
fn snapshot_items(contents: &BringListContents) -> Vec<ListItem> {
    contents
        .purchase
        .iter()
        .map(|item| ListItem::active(&item.name))
        .chain(
            contents
                .recently
                .iter()
                .map(|item| ListItem::new(&item.name, true)),
        )
        .collect()
}
