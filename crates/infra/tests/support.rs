//! Shared fixtures for the infra integration suites.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use jobmatch_common::{MemoryCredentialStore, SessionStore, StorageKey};
use jobmatch_infra::{ApiClient, ApiClientConfig, JobMatchApi};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

/// A mock server plus a client wired to an in-memory credential store.
pub struct TestApi {
    pub server: MockServer,
    pub store: MemoryCredentialStore,
    pub client: Arc<ApiClient>,
}

impl TestApi {
    pub async fn start() -> Self {
        Self::start_with(MemoryCredentialStore::new()).await
    }

    pub async fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        Self::start_with(MemoryCredentialStore::with_tokens(access_token, refresh_token)).await
    }

    pub async fn start_with(store: MemoryCredentialStore) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let config = ApiClientConfig {
            base_url: format!("{}/api", server.uri()),
            timeout: Duration::from_secs(5),
            long_timeout: Duration::from_secs(10),
        };
        let client = ApiClient::new(config, SessionStore::new(Arc::new(store.clone())))
            .expect("client should build against mock server");
        Self { server, store, client: Arc::new(client) }
    }

    pub fn session(&self) -> SessionStore {
        SessionStore::new(Arc::new(self.store.clone()))
    }

    pub fn endpoints(&self) -> JobMatchApi {
        JobMatchApi::new(self.client.clone())
    }

    /// Whether none of the three credential entries remain.
    pub fn credentials_wiped(&self) -> bool {
        StorageKey::ALL.iter().all(|key| !self.store.contains(*key))
    }
}

/// Successful `/auth/refresh` response carrying a new pair.
pub fn refresh_success(access_token: &str, refresh_token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "data": {"access_token": access_token, "refresh_token": refresh_token},
        "message": "Token refreshed successfully"
    }))
}

/// Plain success envelope around `data`.
pub fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data, "message": ""}))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("jobmatch=debug")
        .with_test_writer()
        .try_init();
}
