//! Shared test helpers for `jobmatch-core` integration tests.
//!
//! In-memory port implementations that record what they were asked so tests
//! can assert on the calls a service makes.

pub mod ports;
