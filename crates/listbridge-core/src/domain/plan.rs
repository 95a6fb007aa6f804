//! Addition plans
//!
//! The diff examines every source item and records a decision for it:
//! propose it for creation on the destination, or skip it with a reason.
//! The resulting plan is what the apply step executes and what observers
//! report on, so a dry run can show exactly what a real run would do.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::direction::Side;
use super::item::ListItem;

/// Why a source item was not proposed for creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The source marks the item completed; completed items never propagate.
    Checked,
    /// The destination already has the item, in whatever checked state.
    AlreadyPresent,
    /// The label normalizes to nothing and cannot be compared.
    BlankLabel,
    /// An earlier source item with the same key was already handled.
    DuplicateInSource,
}

impl SkipReason {
    /// Short human-readable explanation for log lines.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::Checked => "already completed at the source",
            SkipReason::AlreadyPresent => "already present at the destination",
            SkipReason::BlankLabel => "label has no comparable content",
            SkipReason::DuplicateInSource => "duplicate of an earlier source item",
        }
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Outcome of examining one source item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    /// The item will be created on the destination.
    Proposed,
    /// The item was left alone.
    Skipped(SkipReason),
}

/// One source item together with the decision taken for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDecision {
    pub item: ListItem,
    pub outcome: DecisionOutcome,
}

/// Everything one reconciliation pass intends to create.
///
/// `to_create` preserves source order, which in turn fixes the order of
/// remote creation calls. `decisions` covers every source item, proposed
/// or skipped, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionPlan {
    /// Side the creations will be issued against.
    pub target: Side,
    /// Items to create, in source order.
    pub to_create: Vec<ListItem>,
    /// Per-item decisions for the whole source snapshot.
    pub decisions: Vec<ItemDecision>,
}

impl AdditionPlan {
    /// A plan that creates nothing.
    pub fn empty(target: Side) -> Self {
        Self {
            target,
            to_create: Vec::new(),
            decisions: Vec::new(),
        }
    }

    /// Side the plan reads from.
    #[must_use]
    pub fn source(&self) -> Side {
        self.target.other()
    }

    /// True when the pass has nothing to create.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty()
    }

    /// Number of source items that were skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.outcome, DecisionOutcome::Skipped(_)))
            .count()
    }
}
