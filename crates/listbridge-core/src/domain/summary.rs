//! Run summaries
//!
//! A run always ends with a summary, even when every creation failed.
//! The summary is built incrementally while the passes execute and is
//! immutable once the run returns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::direction::{Side, SyncDirection};

/// One creation that did not go through.
///
/// Failures are recorded in the order they happened, which matches
/// source order within each pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    /// Label of the item that could not be created.
    pub label: String,
    /// Side the creation was issued against.
    pub target: Side,
    /// Rendered error, cause chain included.
    pub error: String,
}

/// Counts for a single reconciliation pass.
///
/// Reported per direction even when the pass produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub source: Side,
    pub target: Side,
    /// Source items examined by the diff.
    pub processed: usize,
    /// Items actually created on the target.
    pub added: usize,
    /// Creations that failed and were recorded.
    pub failed: usize,
}

/// Aggregated outcome of one complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier for correlating log lines of one run.
    pub run_id: Uuid,
    /// Direction policy the run executed.
    pub direction: SyncDirection,
    /// Wall-clock time the run started.
    pub started_at: DateTime<Utc>,
    /// Total run duration in milliseconds.
    pub duration_ms: u64,
    /// Items created on the Keep side.
    pub added_to_keep: usize,
    /// Items created on the Bring! side.
    pub added_to_bring: usize,
    /// Every creation failure, in occurrence order.
    pub failures: Vec<ItemFailure>,
}

impl RunSummary {
    /// Starts an empty summary stamped with a fresh run id.
    pub fn new(direction: SyncDirection) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            direction,
            started_at: Utc::now(),
            duration_ms: 0,
            added_to_keep: 0,
            added_to_bring: 0,
            failures: Vec::new(),
        }
    }

    /// True when no creation failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Items created across both sides.
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.added_to_keep + self.added_to_bring
    }

    /// Items created on one side.
    #[must_use]
    pub fn added_to(&self, side: Side) -> usize {
        match side {
            Side::Keep => self.added_to_keep,
            Side::Bring => self.added_to_bring,
        }
    }
}
