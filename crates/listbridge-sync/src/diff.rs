//! Snapshot diffing
//!
//! Pure planning step of a reconciliation pass: given a source and a
//! destination snapshot, decide which source items must be created on the
//! destination. No I/O happens here; the same two snapshots always produce
//! the same plan.

use std::collections::HashSet;

use listbridge_core::domain::{
    AdditionPlan, DecisionOutcome, ItemDecision, NormalizedKey, SkipReason, Snapshot,
};

/// Computes the additions needed to bring `destination` up to date with
/// the active items of `source`.
///
/// Every destination item counts as present regardless of checked state,
/// so completed items are never resurrected. A source item is proposed
/// when it is unchecked, its label normalizes to a non-empty key, and the
/// key is neither present on the destination nor proposed earlier in this
/// pass. Source order is preserved and fixes the creation order.
///
/// The returned plan records a decision for every source item, proposed
/// or skipped, so callers can explain exactly why each item did or did
/// not move.
pub fn plan_additions(source: &Snapshot, destination: &Snapshot) -> AdditionPlan {
    let present = destination.key_set();
    let mut seen: HashSet<NormalizedKey> = HashSet::new();
    let mut to_create = Vec::new();
    let mut decisions = Vec::with_capacity(source.items.len());

    for item in &source.items {
        let outcome = if item.checked {
            DecisionOutcome::Skipped(SkipReason::Checked)
        } else {
            let key = item.key();
            if key.is_empty() {
                DecisionOutcome::Skipped(SkipReason::BlankLabel)
            } else if present.contains(&key) {
                DecisionOutcome::Skipped(SkipReason::AlreadyPresent)
            } else if seen.contains(&key) {
                DecisionOutcome::Skipped(SkipReason::DuplicateInSource)
            } else {
                seen.insert(key);
                to_create.push(item.clone());
                DecisionOutcome::Proposed
            }
        };
        decisions.push(ItemDecision {
            item: item.clone(),
            outcome,
        });
    }

    AdditionPlan {
        target: destination.side,
        to_create,
        decisions,
    }
}
