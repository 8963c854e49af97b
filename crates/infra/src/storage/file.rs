//! JSON file credential store
//!
//! For hosts without a platform keychain. Entries are kept in one JSON
//! object keyed by [`StorageKey::as_str`]; every write rewrites the file
//! through a temporary sibling and a rename. On Unix the file is created
//! with mode `0600`.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jobmatch_common::error::{StorageError, StorageResult};
use jobmatch_common::{CredentialStore, StorageKey};
use parking_lot::Mutex;
use tracing::debug;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StorageError::AccessFailed(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, entries: &Entries) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_failure(parent, &e))?;
        }

        let mut file = open_private(&tmp).map_err(|e| io_failure(&tmp, &e))?;
        file.write_all(json.as_bytes()).map_err(|e| io_failure(&tmp, &e))?;
        file.sync_all().map_err(|e| io_failure(&tmp, &e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_failure(&self.path, &e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Credential file written");
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get_item(&self, key: StorageKey) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key.as_str()))
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        entries.insert(key.as_str().to_string(), value.to_string());
        self.save(&entries)
    }

    async fn remove_item(&self, key: StorageKey) -> StorageResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        if entries.remove(key.as_str()).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

fn io_failure(path: &Path, err: &std::io::Error) -> StorageError {
    StorageError::AccessFailed(format!("{}: {err}", path.display()))
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jobmatch_common::SessionStore;
    use jobmatch_domain::TokenPair;
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FileCredentialStore {
        FileCredentialStore::new(dir.path().join("nested").join("credentials.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get_item(StorageKey::AccessToken).await.unwrap(), None);
        store.remove_item(StorageKey::AccessToken).await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn entries_use_wire_key_names() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set_item(StorageKey::AccessToken, "access").await.unwrap();
        store.set_item(StorageKey::UserProfile, "{\"id\":\"u1\"}").await.unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: Entries = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("auth_token").map(String::as_str), Some("access"));
        assert!(parsed.contains_key("user_data"));
    }

    #[tokio::test]
    async fn survives_reopen() {
        let dir = TempDir::new().unwrap();
        let session = SessionStore::new(Arc::new(store_in(&dir)));
        session.store_tokens(&TokenPair::new("a1", "r1")).await.unwrap();

        let reopened = SessionStore::new(Arc::new(store_in(&dir)));
        assert_eq!(reopened.access_token().await.as_deref(), Some("a1"));
        assert_eq!(reopened.refresh_token().await.as_deref(), Some("r1"));

        reopened.clear().await;
        assert_eq!(session.access_token().await, None);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        let err = store.get_item(StorageKey::AccessToken).await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn file_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set_item(StorageKey::RefreshToken, "secret").await.unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
