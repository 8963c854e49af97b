//! Credential storage and token refresh primitives shared across JobMatch
//! crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `runtime`: credential store abstraction, session store, single-flight
//!   refresh coordinator, in-memory store
//! - `platform`: platform keychain integration (`keyring`)
//! - `test-utils`: fixtures for downstream test suites

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod error;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod auth;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod security;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use auth::{CredentialStore, RefreshCoordinator, RefreshError, SessionStore, StorageKey};
pub use error::StorageError;
#[cfg(feature = "platform")]
pub use security::{KeychainError, KeychainProvider};
#[cfg(feature = "runtime")]
pub use testing::MemoryCredentialStore;
