//! Domain error types
//!
//! The three port errors carry the side they happened on plus a rendered
//! reason, because by the time an error reaches the engine the adapter
//! has already flattened its internal cause chain into text. Severity is
//! encoded in the type: authentication and fetch problems abort the run,
//! write problems are recorded per item and the batch continues.

use thiserror::Error;

use super::direction::Side;

/// Login failure for one side. Fatal: nothing runs after it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{side} authentication failed: {reason}")]
pub struct AuthError {
    pub side: Side,
    pub reason: String,
}

impl AuthError {
    pub fn new(side: Side, reason: impl Into<String>) -> Self {
        Self {
            side,
            reason: reason.into(),
        }
    }
}

/// Snapshot fetch failure for one side. Fatal: every direction needs
/// both snapshots, so the run cannot proceed on one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to fetch the {side} list: {reason}")]
pub struct FetchError {
    pub side: Side,
    pub reason: String,
}

impl FetchError {
    pub fn new(side: Side, reason: impl Into<String>) -> Self {
        Self {
            side,
            reason: reason.into(),
        }
    }
}

/// Failure to create a single item. Non-fatal: recorded in the run
/// summary while the rest of the batch proceeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{side} rejected the new item: {reason}")]
pub struct WriteError {
    pub side: Side,
    pub reason: String,
}

impl WriteError {
    pub fn new(side: Side, reason: impl Into<String>) -> Self {
        Self {
            side,
            reason: reason.into(),
        }
    }
}

/// Why a run aborted before producing a summary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
