//! Run orchestration
//!
//! The [`SyncEngine`] drives one complete reconciliation run between the
//! two checklist services.
//!
//! ## Run Flow
//!
//! 1. **Login**: Both services authenticate, Keep first; either failure
//!    aborts the run before anything is fetched.
//! 2. **Fetch**: Both snapshots are captured concurrently; every direction
//!    needs both, so either failure aborts the run.
//! 3. **Passes**: keep-to-bring runs first, then bring-to-keep, as selected
//!    by the direction policy. Each pass diffs and then applies.
//! 4. **Summary**: Per-item outcomes are aggregated into a [`RunSummary`],
//!    returned even when every creation failed.
//!
//! By default the second pass reuses the snapshots captured at the start
//! of the run, which keeps a run deterministic regardless of how quickly
//! the remote ends reflect writes. Re-fetching between passes is an
//! explicit configuration option.

use std::sync::Arc;

use tracing::{debug, error, info};

use listbridge_core::config::RunConfig;
use listbridge_core::domain::{
    AdditionPlan, PassSummary, RunError, RunSummary, Side, Snapshot, SyncDirection,
};
use listbridge_core::ports::{IListService, ISyncObserver, NoopObserver};

use crate::apply::apply_plan;
use crate::diff::plan_additions;

// ============================================================================
// SyncEngine
// ============================================================================

/// Orchestrates login, fetch, diff, and apply for one run.
///
/// ## Dependencies
///
/// - `keep` / `bring`: The two service adapters behind [`IListService`]
/// - `observer`: Progress sink; defaults to [`NoopObserver`]
pub struct SyncEngine {
    keep: Arc<dyn IListService + Send + Sync>,
    bring: Arc<dyn IListService + Send + Sync>,
    observer: Arc<dyn ISyncObserver + Send + Sync>,
    direction: SyncDirection,
    refetch_between_passes: bool,
}

impl SyncEngine {
    /// Creates an engine for the two services with settings from `config`.
    ///
    /// # Arguments
    /// * `keep` - Google Keep adapter
    /// * `bring` - Bring! adapter
    /// * `config` - Run configuration (direction, refetch policy)
    pub fn new(
        keep: Arc<dyn IListService + Send + Sync>,
        bring: Arc<dyn IListService + Send + Sync>,
        config: &RunConfig,
    ) -> Self {
        Self {
            keep,
            bring,
            observer: Arc::new(NoopObserver),
            direction: config.sync.direction,
            refetch_between_passes: config.sync.refetch_between_passes,
        }
    }

    /// Replaces the progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ISyncObserver + Send + Sync>) -> Self {
        self.observer = observer;
        self
    }

    // ========================================================================
    // SyncEngine::run()
    // ========================================================================

    /// Performs one complete reconciliation run.
    ///
    /// # Returns
    /// A [`RunSummary`] with per-side creation counts and every recorded
    /// failure. A summary is produced whenever the run got as far as
    /// applying, even if no creation succeeded.
    ///
    /// # Errors
    /// Returns a [`RunError`] when a login or snapshot fetch fails; nothing
    /// has been written to either service in that case beyond what earlier
    /// passes already created.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let start = std::time::Instant::now();
        let mut summary = RunSummary::new(self.direction);

        self.observer.on_run_started(self.direction);
        info!(
            run_id = %summary.run_id,
            direction = %self.direction,
            "Starting sync run"
        );

        // Step 1: Login, Keep first. Sequential so a failure names one side
        // without the other ever being contacted.
        self.login_both().await?;

        // Step 2: Capture both snapshots. Both are always needed: each side
        // is the presence set for the other direction.
        let (mut keep_snapshot, mut bring_snapshot) = self.fetch_both().await?;
        self.observer
            .on_snapshots_loaded(&keep_snapshot, &bring_snapshot);
        info!(
            keep_items = keep_snapshot.len(),
            bring_items = bring_snapshot.len(),
            "Snapshots loaded"
        );

        // Step 3: keep-to-bring pass
        if self.direction.includes_keep_to_bring() {
            self.run_pass(&keep_snapshot, &bring_snapshot, &self.bring, &mut summary)
                .await;
        }

        // Step 4: bring-to-keep pass, optionally against fresh snapshots
        if self.direction.includes_bring_to_keep() {
            if self.refetch_between_passes && self.direction.includes_keep_to_bring() {
                debug!("Re-fetching snapshots before the second pass");
                let (keep, bring) = self.fetch_both().await?;
                keep_snapshot = keep;
                bring_snapshot = bring;
            }
            self.run_pass(&bring_snapshot, &keep_snapshot, &self.keep, &mut summary)
                .await;
        }

        // Step 5: Finalize the summary
        summary.duration_ms = start.elapsed().as_millis() as u64;
        self.observer.on_run_completed(&summary);

        info!(
            added_to_keep = summary.added_to_keep,
            added_to_bring = summary.added_to_bring,
            failures = summary.failures.len(),
            duration_ms = summary.duration_ms,
            "Sync run completed"
        );

        Ok(summary)
    }

    // ========================================================================
    // SyncEngine::plan()
    // ========================================================================

    /// Computes what a run would create, without writing anything.
    ///
    /// Logs in and fetches exactly like [`SyncEngine::run`], then returns
    /// the plan for each active direction in execution order.
    #[tracing::instrument(skip(self))]
    pub async fn plan(&self) -> Result<Vec<AdditionPlan>, RunError> {
        self.login_both().await?;
        let (keep_snapshot, bring_snapshot) = self.fetch_both().await?;

        let mut plans = Vec::new();
        if self.direction.includes_keep_to_bring() {
            plans.push(plan_additions(&keep_snapshot, &bring_snapshot));
        }
        if self.direction.includes_bring_to_keep() {
            plans.push(plan_additions(&bring_snapshot, &keep_snapshot));
        }
        Ok(plans)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Authenticates both services, Keep first.
    async fn login_both(&self) -> Result<(), RunError> {
        for service in [&self.keep, &self.bring] {
            debug!(side = %service.side(), "Authenticating");
            if let Err(err) = service.authenticate().await {
                error!(error = %err, "Login failed, aborting run");
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Fetches both snapshots concurrently.
    async fn fetch_both(&self) -> Result<(Snapshot, Snapshot), RunError> {
        match tokio::try_join!(self.keep.fetch_snapshot(), self.bring.fetch_snapshot()) {
            Ok(snapshots) => Ok(snapshots),
            Err(err) => {
                error!(error = %err, "Snapshot fetch failed, aborting run");
                Err(err.into())
            }
        }
    }

    /// Diffs one direction and applies the result, folding the outcome
    /// into the run summary.
    async fn run_pass(
        &self,
        source: &Snapshot,
        destination: &Snapshot,
        target_service: &Arc<dyn IListService + Send + Sync>,
        summary: &mut RunSummary,
    ) {
        let plan = plan_additions(source, destination);
        self.observer.on_pass_planned(&plan);
        debug!(
            source = %plan.source(),
            target = %plan.target,
            proposed = plan.to_create.len(),
            skipped = plan.skipped(),
            "Pass planned"
        );

        let outcome = apply_plan(target_service.as_ref(), &plan, self.observer.as_ref()).await;

        match plan.target {
            Side::Keep => summary.added_to_keep += outcome.added,
            Side::Bring => summary.added_to_bring += outcome.added,
        }

        let pass = PassSummary {
            source: source.side,
            target: plan.target,
            processed: source.len(),
            added: outcome.added,
            failed: outcome.failures.len(),
        };
        summary.failures.extend(outcome.failures);

        self.observer.on_pass_completed(&pass);
        info!(
            source = %pass.source,
            target = %pass.target,
            processed = pass.processed,
            added = pass.added,
            failed = pass.failed,
            "Pass completed"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
