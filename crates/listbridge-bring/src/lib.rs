//! Bring! adapter for listbridge
//!
//! Talks to the Bring! REST backend used by the official apps:
//!
//! - [`client`] - Login, list enumeration, and item calls
//! - [`adapter`] - `IListService` implementation on top of the client
//!
//! Bring! models completion as membership: active items live in the
//! `purchase` collection, completed ones in `recently`. The adapter maps
//! the two onto unchecked and checked entries of one snapshot.

pub mod adapter;
pub mod client;

pub use adapter::BringListService;
pub use client::BringClient;
