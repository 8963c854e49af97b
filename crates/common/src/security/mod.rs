//! Platform keychain integration

pub mod keychain;

pub use keychain::{KeychainError, KeychainProvider};
