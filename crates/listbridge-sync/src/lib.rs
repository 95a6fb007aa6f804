//! Synchronization engine for listbridge
//!
//! This crate turns two checklist snapshots into converged lists:
//!
//! - `diff`: Pure planning, deciding which source items the destination
//!   is missing
//! - `apply`: Executing a plan against a service, one creation at a time
//! - `engine`: Orchestrating login, fetch, and the directional passes of
//!   a complete run
//! - `observe`: Progress reporting through `tracing`
//!
//! The crate only speaks to the outside world through the ports defined
//! in `listbridge-core`; the service adapters live in their own crates.

pub mod apply;
pub mod diff;
pub mod engine;
pub mod observe;

pub use apply::{apply_plan, ApplyOutcome};
pub use diff::plan_additions;
pub use engine::SyncEngine;
pub use observe::TracingObserver;
