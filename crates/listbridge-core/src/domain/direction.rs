//! Sync sides and direction policy
//!
//! A run moves items between exactly two sides, Google Keep and Bring!.
//! The direction decides which of the two reconciliation passes actually
//! run; it is fixed for the lifetime of a run.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two checklist services bridged by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Keep,
    Bring,
}

impl Side {
    /// Human-readable service name, used in log lines and error messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Keep => "Google Keep",
            Side::Bring => "Bring!",
        }
    }

    /// Short lowercase identifier (`keep` / `bring`).
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Side::Keep => "keep",
            Side::Bring => "bring",
        }
    }

    /// The opposite side of the bridge.
    #[must_use]
    pub fn other(&self) -> Side {
        match self {
            Side::Keep => Side::Bring,
            Side::Bring => Side::Keep,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which reconciliation passes a run performs.
///
/// `Both` runs keep-to-bring first and bring-to-keep second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncDirection {
    Both,
    KeepToBring,
    BringToKeep,
}

impl SyncDirection {
    /// Whether the keep-to-bring pass is active.
    #[must_use]
    pub fn includes_keep_to_bring(&self) -> bool {
        matches!(self, SyncDirection::Both | SyncDirection::KeepToBring)
    }

    /// Whether the bring-to-keep pass is active.
    #[must_use]
    pub fn includes_bring_to_keep(&self) -> bool {
        matches!(self, SyncDirection::Both | SyncDirection::BringToKeep)
    }
}

impl Default for SyncDirection {
    fn default() -> Self {
        SyncDirection::Both
    }
}

impl Display for SyncDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncDirection::Both => "both",
            SyncDirection::KeepToBring => "keep-to-bring",
            SyncDirection::BringToKeep => "bring-to-keep",
        };
        write!(f, "{}", s)
    }
}

/// Error returned when a direction string cannot be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized sync direction '{0}' (expected both, keep-to-bring, bring-to-keep, or modes 0, 1, 2)")]
pub struct ParseDirectionError(pub String);

impl FromStr for SyncDirection {
    type Err = ParseDirectionError;

    /// Accepts the kebab-case names plus the numeric modes used by
    /// existing deployments: `0` = both, `1` = bring-to-keep,
    /// `2` = keep-to-bring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" | "0" => Ok(SyncDirection::Both),
            "bring-to-keep" | "1" => Ok(SyncDirection::BringToKeep),
            "keep-to-bring" | "2" => Ok(SyncDirection::KeepToBring),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
