//! Listbridge Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `ListItem`, `Snapshot`, `NormalizedKey`, `AdditionPlan`, `RunSummary`
//! - **Port definitions** - Traits for adapters: `IListService`, `ISyncObserver`
//! - **Configuration** - `RunConfig` loaded from YAML and environment variables
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure reconciliation logic with no knowledge of
//! any remote service. Ports define trait interfaces that adapter crates
//! implement, one per checklist service. The sync engine in `listbridge-sync`
//! orchestrates domain logic through the port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
