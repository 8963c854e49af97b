//! Test doubles and fixtures
//!
//! [`MemoryCredentialStore`] doubles as the `memory` storage backend, so it
//! is available whenever the runtime tier is enabled. The JSON fixtures
//! need `test-utils`.

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod mocks;

pub use mocks::MemoryCredentialStore;
