//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IListService`] - One checklist service: login, snapshot, item creation
//! - [`ISyncObserver`] - Per-decision and per-outcome notifications for a run

pub mod list_service;
pub mod observer;

pub use list_service::IListService;
pub use observer::{ISyncObserver, NoopObserver};
