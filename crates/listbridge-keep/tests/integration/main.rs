//! Integration tests for listbridge-keep
//!
//! Uses wiremock to simulate the token exchange and the notes backend,
//! and exercises the adapter end to end through the port interface.

mod common;

mod test_auth;
mod test_create;
mod test_fetch;
