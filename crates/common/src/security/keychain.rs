//! Keychain-backed credential storage
//!
//! Thin wrapper over the platform keychain (macOS Keychain Access, Windows
//! Credential Manager, Linux Secret Service) for the three credential
//! entries. Each entry is stored under the configured service name with the
//! storage key as the account.
//!
//! ## Usage
//!
//! ```no_run
//! use jobmatch_common::security::keychain::KeychainProvider;
//!
//! let keychain = KeychainProvider::new("JobMatch.auth");
//! keychain.set_secret("auth_token", "eyJhbGciOi...")?;
//! let token = keychain.get_secret("auth_token")?;
//! # Ok::<(), jobmatch_common::security::KeychainError>(())
//! ```

use async_trait::async_trait;
use keyring::Entry;
use thiserror::Error;
use tracing::debug;

use crate::auth::{CredentialStore, StorageKey};
use crate::error::{StorageError, StorageResult};

/// Keychain provider for one service namespace
#[derive(Debug, Clone)]
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a provider for a service (e.g. `"JobMatch.auth"`)
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Store a secret value in the platform keychain
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if keychain access fails
    pub fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "Storing secret in keychain");

        let entry = self.create_entry(key)?;
        entry.set_password(value).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to store secret for {key}: {e}"))
        })
    }

    /// Retrieve a secret value from the platform keychain
    ///
    /// # Errors
    /// Returns `KeychainError::NotFound` if the secret doesn't exist and
    /// `KeychainError::AccessFailed` if keychain access fails
    pub fn get_secret(&self, key: &str) -> Result<String, KeychainError> {
        debug!(service = %self.service_name, key = %key, "Retrieving secret from keychain");

        let entry = self.create_entry(key)?;
        entry.get_password().map_err(|e| {
            if matches!(e, keyring::Error::NoEntry) {
                KeychainError::NotFound
            } else {
                KeychainError::AccessFailed(format!("Failed to retrieve secret for {key}: {e}"))
            }
        })
    }

    /// Delete a secret from the platform keychain (idempotent)
    pub fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "Deleting secret from keychain");

        let entry = self.create_entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeychainError::AccessFailed(format!(
                "Failed to delete secret for {key}: {e}"
            ))),
        }
    }

    fn create_entry(&self, key: &str) -> Result<Entry, KeychainError> {
        Entry::new(&self.service_name, key).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to create keychain entry: {e}"))
        })
    }
}

#[async_trait]
impl CredentialStore for KeychainProvider {
    async fn get_item(&self, key: StorageKey) -> StorageResult<Option<String>> {
        match self.get_secret(key.as_str()) {
            Ok(value) => Ok(Some(value)),
            Err(KeychainError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        self.set_secret(key.as_str(), value).map_err(Into::into)
    }

    async fn remove_item(&self, key: StorageKey) -> StorageResult<()> {
        self.delete_secret(key.as_str()).map_err(Into::into)
    }
}

/// Keychain operation errors
#[derive(Debug, Error)]
pub enum KeychainError {
    /// Keychain access failed (permission denied, not available, etc.)
    #[error("Keychain access failed: {0}")]
    AccessFailed(String),

    /// Entry not found in keychain
    #[error("Entry not found")]
    NotFound,

    /// Underlying keyring library error
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

impl From<KeychainError> for StorageError {
    fn from(err: KeychainError) -> Self {
        match err {
            KeychainError::Keyring(keyring::Error::PlatformFailure(e))
            | KeychainError::Keyring(keyring::Error::NoStorageAccess(e)) => {
                StorageError::Unavailable(e.to_string())
            }
            other => StorageError::AccessFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_access_failed_only_outside_get_item() {
        let err: StorageError = KeychainError::NotFound.into();
        assert_eq!(err, StorageError::AccessFailed("Entry not found".into()));
    }

    #[test]
    fn access_failures_keep_their_message() {
        let err: StorageError = KeychainError::AccessFailed("denied".into()).into();
        assert!(err.to_string().contains("denied"));
    }

    // Requires a real platform keychain.
    #[tokio::test]
    #[ignore = "touches the platform keychain"]
    async fn round_trips_through_platform_keychain() {
        let provider = KeychainProvider::new("JobMatch.test");
        provider.set_item(StorageKey::AccessToken, "token").await.unwrap();
        assert_eq!(provider.get_item(StorageKey::AccessToken).await.unwrap().as_deref(), Some("token"));
        provider.remove_item(StorageKey::AccessToken).await.unwrap();
        assert_eq!(provider.get_item(StorageKey::AccessToken).await.unwrap(), None);
    }
}
