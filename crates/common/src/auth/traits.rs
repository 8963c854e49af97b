//! Storage abstraction for credential state
//!
//! The client keeps exactly three string entries: the access token, the
//! refresh token and the serialized user profile. Backends only need to
//! provide get/set/remove for those keys.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Stable storage keys for persisted credential state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Short-lived bearer credential
    AccessToken,
    /// Long-lived credential used only to mint new access tokens
    RefreshToken,
    /// Serialized user profile JSON
    UserProfile,
}

impl StorageKey {
    /// Every key, in the order they are cleared.
    pub const ALL: [StorageKey; 3] =
        [StorageKey::AccessToken, StorageKey::RefreshToken, StorageKey::UserProfile];

    /// Name the entry is persisted under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "auth_token",
            Self::RefreshToken => "refresh_token",
            Self::UserProfile => "user_data",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for credential storage backends
///
/// Implementations must be safe to share across tasks; the API client reads
/// the access token for every request while a refresh may be writing it.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read an entry. A missing entry is `Ok(None)`, not an error.
    async fn get_item(&self, key: StorageKey) -> StorageResult<Option<String>>;

    /// Write an entry, replacing any previous value.
    async fn set_item(&self, key: StorageKey, value: &str) -> StorageResult<()>;

    /// Remove an entry. Removing a missing entry succeeds.
    async fn remove_item(&self, key: StorageKey) -> StorageResult<()>;
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    async fn get_item(&self, key: StorageKey) -> StorageResult<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: StorageKey) -> StorageResult<()> {
        (**self).remove_item(key).await
    }
}
