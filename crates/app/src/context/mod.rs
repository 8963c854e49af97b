//! Application context - dependency injection container

use std::sync::Arc;

use jobmatch_common::{CredentialStore, SessionStore};
use jobmatch_core::{ApplicationsService, JobsService, ProfileService, SessionService};
use jobmatch_domain::constants::NO_USER_LOGGED_IN;
use jobmatch_domain::{Config, JobMatchError, Result, User};
use jobmatch_infra::{credential_store_from_config, ApiClient, ApiClientConfig, JobMatchApi};
use tracing::{debug, info};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub api: JobMatchApi,
    pub sessions: SessionService,
    pub jobs: JobsService,
    pub applications: ApplicationsService,
    pub profile: ProfileService,
}

impl AppContext {
    /// Build the context with the credential backend selected by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let store = credential_store_from_config(&config.storage);
        Self::with_store(config, store)
    }

    /// Build the context over an explicit credential store.
    pub fn with_store(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let session = SessionStore::new(store);
        let client = ApiClient::new(ApiClientConfig::from(&config.api), session.clone())?;
        let api = JobMatchApi::new(Arc::new(client));

        let sessions = SessionService::new(api.auth.clone(), api.users.clone(), session);
        let jobs = JobsService::new(api.jobs.clone());
        let applications = ApplicationsService::new(api.applications.clone());
        let profile = ProfileService::new(api.users.clone(), api.feedback.clone());

        info!(base_url = %config.api.base_url, backend = %config.storage.backend, "Application context ready");
        Ok(Self { config, api, sessions, jobs, applications, profile })
    }

    /// Cached profile of the signed-in user.
    ///
    /// # Errors
    /// `Auth` when nobody is signed in.
    pub async fn require_user(&self) -> Result<User> {
        let user = self
            .sessions
            .current_user()
            .await
            .ok_or_else(|| JobMatchError::Auth(NO_USER_LOGGED_IN.to_string()))?;
        debug!(user_id = %user.id, "Using stored user");
        Ok(user)
    }
}
