//! Error types for credential storage
//!
//! Backends map their native failures (keychain, filesystem, serialization)
//! into [`StorageError`] so the session layer can treat every backend the
//! same way. Callers that need a domain error convert through the `From`
//! impl below.

use jobmatch_domain::JobMatchError;
use thiserror::Error;

/// Failure of a credential storage backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached at all (no keychain daemon, unwritable
    /// directory)
    #[error("Credential storage unavailable: {0}")]
    Unavailable(String),

    /// A read, write or delete against the backend failed
    #[error("Credential storage access failed: {0}")]
    AccessFailed(String),

    /// A stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<StorageError> for JobMatchError {
    fn from(err: StorageError) -> Self {
        JobMatchError::Storage(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
