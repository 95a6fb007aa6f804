//! Sync observer port (driven/secondary port)
//!
//! The engine announces what it decides and what happens to every item
//! through this trait. Observation is decoupled from control flow: the
//! engine behaves identically under [`NoopObserver`], and observer calls
//! must not block or fail.
//!
//! All methods default to no-ops so implementations only override the
//! events they care about.

use crate::domain::errors::WriteError;
use crate::domain::{AdditionPlan, PassSummary, RunSummary, Side, Snapshot, SyncDirection};

/// Port trait for reporting run progress.
pub trait ISyncObserver: Send + Sync {
    /// A run started with the given direction policy.
    fn on_run_started(&self, _direction: SyncDirection) {}

    /// Both snapshots were fetched successfully.
    fn on_snapshots_loaded(&self, _keep: &Snapshot, _bring: &Snapshot) {}

    /// A pass was planned; the plan carries every per-item decision.
    fn on_pass_planned(&self, _plan: &AdditionPlan) {}

    /// One item was created on the target.
    fn on_item_added(&self, _target: Side, _label: &str) {}

    /// One creation failed; the batch continues.
    fn on_item_failed(&self, _target: Side, _label: &str, _error: &WriteError) {}

    /// A pass finished, with its counts.
    fn on_pass_completed(&self, _pass: &PassSummary) {}

    /// The run produced its final summary.
    fn on_run_completed(&self, _summary: &RunSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ISyncObserver for NoopObserver {}
