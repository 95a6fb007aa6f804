//! Integration tests for listbridge-bring
//!
//! Uses wiremock to simulate the Bring! REST backend and exercises the
//! adapter end to end through the port interface, including list
//! resolution by name.

mod common;

mod test_auth;
mod test_create;
mod test_fetch;
