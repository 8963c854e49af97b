//! In-memory credential store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::auth::{CredentialStore, StorageKey};
use crate::error::StorageResult;

type StorageData = Arc<Mutex<HashMap<StorageKey, String>>>;

/// Credential store kept in process memory
///
/// Clones share the same entries, so a test can hand one clone to the client
/// and inspect the other. The synchronous accessors let wiremock responders
/// (which cannot `.await`) look at what has been persisted.
///
/// # Examples
///
/// ```
/// use jobmatch_common::testing::MemoryCredentialStore;
/// use jobmatch_common::StorageKey;
///
/// let store = MemoryCredentialStore::with_tokens("access", "refresh");
/// assert_eq!(store.get(StorageKey::AccessToken).as_deref(), Some("access"));
/// assert!(store.get(StorageKey::UserProfile).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    data: StorageData,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an access/refresh pair.
    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::new();
        store.insert(StorageKey::AccessToken, access_token);
        store.insert(StorageKey::RefreshToken, refresh_token);
        store
    }

    pub fn insert(&self, key: StorageKey, value: &str) {
        self.data.lock().insert(key, value.to_string());
    }

    pub fn get(&self, key: StorageKey) -> Option<String> {
        self.data.lock().get(&key).cloned()
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.data.lock().contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get_item(&self, key: StorageKey) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        self.insert(key, value);
        Ok(())
    }

    async fn remove_item(&self, key: StorageKey) -> StorageResult<()> {
        self.data.lock().remove(&key);
        Ok(())
    }
}
