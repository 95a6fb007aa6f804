//! Progress reporting via tracing
//!
//! [`TracingObserver`] renders per-item progress as log events. The engine
//! already logs run and pass milestones itself, so this observer only
//! covers the item-level callbacks; plugging in [`NoopObserver`] instead
//! silences item detail without losing the milestones.
//!
//! [`NoopObserver`]: listbridge_core::ports::NoopObserver

use tracing::{debug, info, warn};

use listbridge_core::domain::{AdditionPlan, DecisionOutcome, Side, WriteError};
use listbridge_core::ports::ISyncObserver;

/// Logs every planned, created, and failed item.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ISyncObserver for TracingObserver {
    fn on_pass_planned(&self, plan: &AdditionPlan) {
        for decision in &plan.decisions {
            match &decision.outcome {
                DecisionOutcome::Proposed => {
                    info!(
                        target = %plan.target,
                        label = %decision.item.label,
                        "Queued for creation"
                    );
                }
                DecisionOutcome::Skipped(reason) => {
                    debug!(
                        target = %plan.target,
                        label = %decision.item.label,
                        reason = %reason,
                        "Skipped item"
                    );
                }
            }
        }
    }

    fn on_item_added(&self, target: Side, label: &str) {
        info!(target = %target, label, "Item added");
    }

    fn on_item_failed(&self, target: Side, label: &str, error: &WriteError) {
        warn!(target = %target, label, error = %error, "Item creation failed");
    }
}
