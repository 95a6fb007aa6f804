//! Google Keep adapter for listbridge
//!
//! Talks to the Keep backend the way the Android app does:
//!
//! - [`client`] - Token exchange and the notes changes feed
//! - [`adapter`] - `IListService` implementation on top of the client
//!
//! Keep has no public API. Authentication starts from a device master
//! token (obtained once, out of band) which is exchanged for a short-lived
//! bearer token at the start of every run.

pub mod adapter;
pub mod client;

pub use adapter::KeepListService;
pub use client::KeepClient;
