//! Typed session access on top of a [`CredentialStore`]

use std::fmt;
use std::sync::Arc;

use jobmatch_domain::TokenPair;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::traits::{CredentialStore, StorageKey};
use crate::error::StorageResult;

/// Session state persisted in a credential store
///
/// Reads never fail: a backend error is logged and reported as an absent
/// entry, so a broken keychain degrades to "signed out" instead of blocking
/// requests. Removal failures are logged and swallowed. Writes propagate
/// their errors because a half-written session must not look successful.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn CredentialStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn CredentialStore>) -> Self {
        Self { backend }
    }

    /// Underlying backend.
    pub fn backend(&self) -> &Arc<dyn CredentialStore> {
        &self.backend
    }

    /// Current access token, if one is stored.
    pub async fn access_token(&self) -> Option<String> {
        self.read(StorageKey::AccessToken).await
    }

    /// Current refresh token, if one is stored.
    pub async fn refresh_token(&self) -> Option<String> {
        self.read(StorageKey::RefreshToken).await
    }

    /// Cached user profile. A profile that no longer decodes is treated as
    /// absent.
    pub async fn user_profile<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.read(StorageKey::UserProfile).await?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(error = %e, "Stored user profile could not be decoded");
                None
            }
        }
    }

    /// Whether both an access token and a profile are stored.
    pub async fn has_session(&self) -> bool {
        self.access_token().await.is_some() && self.read(StorageKey::UserProfile).await.is_some()
    }

    /// Persist an access/refresh pair. Access token first.
    pub async fn store_tokens(&self, tokens: &TokenPair) -> StorageResult<()> {
        self.backend.set_item(StorageKey::AccessToken, &tokens.access_token).await?;
        self.backend.set_item(StorageKey::RefreshToken, &tokens.refresh_token).await?;
        debug!("Stored refreshed credential pair");
        Ok(())
    }

    pub async fn store_profile<T: Serialize + ?Sized>(&self, profile: &T) -> StorageResult<()> {
        let json = serde_json::to_string(profile)?;
        self.backend.set_item(StorageKey::UserProfile, &json).await
    }

    /// Persist tokens and profile after a sign-in.
    pub async fn store_session<T: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        profile: &T,
    ) -> StorageResult<()> {
        self.store_tokens(tokens).await?;
        self.store_profile(profile).await
    }

    /// Remove all three credential entries.
    pub async fn clear(&self) {
        self.clear_keys(&StorageKey::ALL).await;
    }

    /// Remove the given entries, logging failures.
    pub async fn clear_keys(&self, keys: &[StorageKey]) {
        for key in keys {
            if let Err(e) = self.backend.remove_item(*key).await {
                warn!(key = %key, error = %e, "Failed to remove credential entry");
            }
        }
        debug!(count = keys.len(), "Cleared credential entries");
    }

    async fn read(&self, key: StorageKey) -> Option<String> {
        match self.backend.get_item(key).await {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read credential entry");
                None
            }
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::StorageError;
    use crate::testing::MemoryCredentialStore;

    struct BrokenStore;

    #[async_trait]
    impl CredentialStore for BrokenStore {
        async fn get_item(&self, _key: StorageKey) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("no keychain".into()))
        }

        async fn set_item(&self, _key: StorageKey, _value: &str) -> StorageResult<()> {
            Err(StorageError::AccessFailed("read-only".into()))
        }

        async fn remove_item(&self, _key: StorageKey) -> StorageResult<()> {
            Err(StorageError::AccessFailed("read-only".into()))
        }
    }

    #[tokio::test]
    async fn read_failures_degrade_to_absent() {
        let session = SessionStore::new(Arc::new(BrokenStore));
        assert_eq!(session.access_token().await, None);
        assert!(!session.has_session().await);
    }

    #[tokio::test]
    async fn write_failures_propagate_and_clear_swallows() {
        let session = SessionStore::new(Arc::new(BrokenStore));
        let result = session.store_tokens(&TokenPair::new("a", "r")).await;
        assert!(matches!(result, Err(StorageError::AccessFailed(_))));
        session.clear().await;
    }

    #[tokio::test]
    async fn empty_values_read_as_absent() {
        let store = Arc::new(MemoryCredentialStore::new());
        store.insert(StorageKey::AccessToken, "");
        let session = SessionStore::new(store);
        assert_eq!(session.access_token().await, None);
    }

    #[tokio::test]
    async fn undecodable_profile_reads_as_absent() {
        let store = Arc::new(MemoryCredentialStore::new());
        store.insert(StorageKey::UserProfile, "{not json");
        let session = SessionStore::new(store);
        assert!(session.user_profile::<serde_json::Value>().await.is_none());
    }
}
