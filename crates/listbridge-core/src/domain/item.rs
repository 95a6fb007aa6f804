//! Checklist items and snapshots
//!
//! A snapshot is the uniform in-memory shape both adapters produce: the
//! full item list of one side, captured at one point in time, in the order
//! the origin reports it. Snapshots are read-only once captured; the engine
//! only ever derives data from them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::direction::Side;
use super::normalize::{normalize, NormalizedKey};

/// A single checklist entry as stored by its origin.
///
/// `label` is the display text exactly as read from the service and is
/// never mutated; trimming for writes happens at creation time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Display text as stored by the origin.
    pub label: String,
    /// True when the origin marks the entry completed or purchased.
    pub checked: bool,
}

impl ListItem {
    /// Creates an item with an explicit checked state.
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }

    /// Creates an unchecked (active) item.
    pub fn active(label: impl Into<String>) -> Self {
        Self::new(label, false)
    }

    /// Comparison key for this item's label.
    #[must_use]
    pub fn key(&self) -> NormalizedKey {
        normalize(&self.label)
    }
}

/// Point-in-time capture of one side's full item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Which service this capture came from.
    pub side: Side,
    /// All items in origin order, checked ones included.
    pub items: Vec<ListItem>,
}

impl Snapshot {
    /// Creates a snapshot from items already in origin order.
    pub fn new(side: Side, items: Vec<ListItem>) -> Self {
        Self { side, items }
    }

    /// Creates a snapshot with no items.
    pub fn empty(side: Side) -> Self {
        Self::new(side, Vec::new())
    }

    /// Number of items in the capture.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the capture holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keys of every item in the capture, checked ones included.
    ///
    /// A checked entry still counts as present, which is what prevents a
    /// completed item from being re-created by the other side. Labels that
    /// normalize to nothing contribute no key.
    #[must_use]
    pub fn key_set(&self) -> HashSet<NormalizedKey> {
        self.items
            .iter()
            .map(ListItem::key)
            .filter(|key| !key.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_constructor_is_unchecked() {
        let item = ListItem::active("Milk");
        assert_eq!(item.label, "Milk");
        assert!(!item.checked);
    }

    #[test]
    fn item_key_uses_normalization() {
        assert_eq!(ListItem::active("Milk ").key(), ListItem::new("MILK", true).key());
    }

    #[test]
    fn key_set_includes_checked_items() {
        let snapshot = Snapshot::new(
            Side::Bring,
            vec![ListItem::active("Milk"), ListItem::new("Eggs", true)],
        );
        let keys = snapshot.key_set();
        assert!(keys.contains(&normalize("eggs")));
        assert!(keys.contains(&normalize("milk")));
    }

    #[test]
    fn key_set_drops_blank_labels() {
        let snapshot = Snapshot::new(
            Side::Keep,
            vec![ListItem::active("   "), ListItem::active("!!!"), ListItem::active("Jam")],
        );
        assert_eq!(snapshot.key_set().len(), 1);
    }

    #[test]
    fn key_set_collapses_duplicate_spellings() {
        let snapshot = Snapshot::new(
            Side::Keep,
            vec![ListItem::active("Milk"), ListItem::active("milk!")],
        );
        assert_eq!(snapshot.key_set().len(), 1);
    }

    #[test]
    fn empty_snapshot_reports_empty() {
        let snapshot = Snapshot::empty(Side::Keep);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert!(snapshot.key_set().is_empty());
    }
}
