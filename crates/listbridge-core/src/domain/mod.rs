//! Domain entities and business logic
//!
//! This module contains the core domain types for listbridge:
//! - Checklist items and point-in-time snapshots
//! - Label normalization into comparison keys
//! - Sync sides and direction policy
//! - Addition plans produced by the diff
//! - Run summaries aggregated by the orchestrator
//! - Domain-specific error types

pub mod direction;
pub mod errors;
pub mod item;
pub mod normalize;
pub mod plan;
pub mod summary;

// Re-export commonly used types
pub use direction::{ParseDirectionError, Side, SyncDirection};
pub use errors::{AuthError, FetchError, RunError, WriteError};
pub use item::{ListItem, Snapshot};
pub use normalize::{normalize, NormalizedKey};
pub use plan::{AdditionPlan, DecisionOutcome, ItemDecision, SkipReason};
pub use summary::{ItemFailure, PassSummary, RunSummary};
