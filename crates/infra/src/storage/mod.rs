//! Credential storage backends
//!
//! The keychain and in-memory stores live in `jobmatch-common`; this module
//! adds the JSON file store and picks a backend from configuration.

pub mod file;

use std::path::PathBuf;
use std::sync::Arc;

use jobmatch_common::{CredentialStore, KeychainProvider, MemoryCredentialStore};
use jobmatch_domain::constants::DEFAULT_CREDENTIALS_FILE;
use jobmatch_domain::{StorageBackend, StorageConfig};
use tracing::info;

pub use file::FileCredentialStore;

/// Build the credential store selected by `config.backend`.
pub fn credential_store_from_config(config: &StorageConfig) -> Arc<dyn CredentialStore> {
    match config.backend {
        StorageBackend::Keychain => {
            info!(service = %config.keychain_service, "Using platform keychain for credentials");
            Arc::new(KeychainProvider::new(config.keychain_service.clone()))
        }
        StorageBackend::File => {
            let path = config
                .path
                .as_deref()
                .map_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE), PathBuf::from);
            info!(path = %path.display(), "Using credential file");
            Arc::new(FileCredentialStore::new(path))
        }
        StorageBackend::Memory => {
            info!("Using in-memory credential store; nothing survives exit");
            Arc::new(MemoryCredentialStore::new())
        }
    }
}
