//! JobMatch REST API client
//!
//! [`ApiClient`] owns bearer authentication and the refresh-and-retry path.
//! The endpoint groups are thin wrappers that implement the
//! `jobmatch-core` ports on top of it and return the server's envelope
//! untouched.

pub mod applications;
pub mod auth;
pub mod client;
pub mod errors;
pub mod feedback;
pub mod jobs;
pub mod system;
pub mod users;

use std::sync::Arc;

pub use applications::ApplicationsApi;
pub use auth::AuthApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, RequestBody, RequestOptions};
pub use errors::{ApiError, ApiErrorCategory};
pub use feedback::FeedbackApi;
pub use jobs::JobsApi;
pub use system::SystemApi;
pub use users::UsersApi;

/// Every endpoint group sharing one client, and therefore one refresh
/// coordinator.
#[derive(Debug, Clone)]
pub struct JobMatchApi {
    pub client: Arc<ApiClient>,
    pub auth: Arc<AuthApi>,
    pub users: Arc<UsersApi>,
    pub jobs: Arc<JobsApi>,
    pub applications: Arc<ApplicationsApi>,
    pub feedback: Arc<FeedbackApi>,
    pub system: SystemApi,
}

impl JobMatchApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: Arc::new(AuthApi::new(client.clone())),
            users: Arc::new(UsersApi::new(client.clone())),
            jobs: Arc::new(JobsApi::new(client.clone())),
            applications: Arc::new(ApplicationsApi::new(client.clone())),
            feedback: Arc::new(FeedbackApi::new(client.clone())),
            system: SystemApi::new(client.clone()),
            client,
        }
    }
}
