//! Label normalization
//!
//! Two checklist entries refer to the same thing when their normalized keys
//! match, regardless of how each service spells, cases, or punctuates the
//! label. Normalization is the only notion of item equality used anywhere in
//! the engine; raw labels are never compared directly.

use std::fmt::{self, Display, Formatter};

/// Canonical comparison key derived from an item label.
///
/// Produced exclusively by [`normalize`]. A key can be empty when the label
/// contained no letters or digits; such labels are excluded from comparison
/// and never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// View the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the originating label had no alphanumeric content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for NormalizedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the comparison key for a label.
///
/// Lowercases the label (Unicode-aware, so multi-character expansions like
/// `İ` are handled before filtering) and drops every character that is not a
/// letter or digit. Pure and total: every input maps to exactly one key.
#[must_use]
pub fn normalize(label: &str) -> NormalizedKey {
    let key = label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    NormalizedKey(key)
}
