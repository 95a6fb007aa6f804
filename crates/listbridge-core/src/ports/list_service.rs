//! List service port (driven/secondary port)
//!
//! This module defines the interface the sync engine uses to talk to one
//! checklist service. Both remote systems, Google Keep and Bring!, are
//! driven through the same trait; from the engine's point of view they
//! differ only in which [`Side`] they report.
//!
//! ## Design Notes
//!
//! - Methods return the typed errors from [`crate::domain::errors`] rather
//!   than `anyhow::Result`, because severity drives control flow: auth and
//!   fetch failures abort the run, write failures are recorded per item.
//! - Adapters own their session state (tokens, resolved list ids) behind
//!   `&self`; the engine never sees credentials or wire formats.
//! - `fetch_snapshot` must return the full list, checked entries included,
//!   since presence checks on the destination have to see completed items.

use crate::domain::errors::{AuthError, FetchError, WriteError};
use crate::domain::{Side, Snapshot};

/// Port trait for one remote checklist service.
///
/// ## Implementation Notes
///
/// - `authenticate` establishes a session and must be called before
///   `fetch_snapshot` or `create_item`. Calling it again is allowed and
///   refreshes the session.
/// - `fetch_snapshot` captures the list at one point in time, preserving
///   the origin's item order. Any list resolution (finding the right list
///   for the account) happens here.
/// - `create_item` adds a single entry with the given label, unchecked.
///   It never updates or deletes existing entries.
#[async_trait::async_trait]
pub trait IListService: Send + Sync {
    /// Which side of the bridge this service serves.
    fn side(&self) -> Side;

    /// Establishes (or refreshes) a session with the service.
    async fn authenticate(&self) -> Result<(), AuthError>;

    /// Captures the service's current item list.
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError>;

    /// Creates one new unchecked item with the given label.
    ///
    /// # Arguments
    /// * `label` - Display text for the new entry, already trimmed
    async fn create_item(&self, label: &str) -> Result<(), WriteError>;
}
