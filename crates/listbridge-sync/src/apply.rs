//! Plan application
//!
//! Executes an [`AdditionPlan`] against the target service, one creation
//! at a time in plan order. Individual failures are recorded and the rest
//! of the batch still runs; nothing here retries, deletes, or mutates
//! existing items.

use tracing::debug;

use listbridge_core::domain::{AdditionPlan, ItemFailure};
use listbridge_core::ports::{IListService, ISyncObserver};

/// What happened when a plan was executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Creations that succeeded.
    pub added: usize,
    /// Creations that failed, in plan order.
    pub failures: Vec<ItemFailure>,
}

/// Creates every planned item on `target`, reporting progress to `observer`.
///
/// Labels are trimmed before the create call; the origin snapshot keeps
/// the untrimmed text. A failed creation is turned into an [`ItemFailure`]
/// and the loop moves on, so one bad item never aborts the batch.
pub async fn apply_plan(
    target: &dyn IListService,
    plan: &AdditionPlan,
    observer: &dyn ISyncObserver,
) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for item in &plan.to_create {
        let label = item.label.trim();
        match target.create_item(label).await {
            Ok(()) => {
                debug!(target = %plan.target, label, "Created item");
                observer.on_item_added(plan.target, label);
                outcome.added += 1;
            }
            Err(err) => {
                observer.on_item_failed(plan.target, label, &err);
                outcome.failures.push(ItemFailure {
                    label: label.to_string(),
                    target: plan.target,
                    error: err.to_string(),
                });
            }
        }
    }

    outcome
}
