//! Health, analytics and email-ingestion endpoints

use std::sync::Arc;

use jobmatch_domain::ApiResponse;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::client::{ApiClient, RequestBody, RequestOptions};
use super::errors::ApiError;

/// Server status endpoints. Not behind a core port; only the front end
/// uses them directly.
#[derive(Debug, Clone)]
pub struct SystemApi {
    client: Arc<ApiClient>,
}

impl SystemApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /health` with its envelope.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client.get("/health", RequestOptions::default()).await
    }

    /// `GET /analytics/metrics`
    #[instrument(skip(self))]
    pub async fn analytics(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client.get("/analytics/metrics", RequestOptions::default()).await
    }

    /// `POST /email/sync` with no body. Asks the server to pull the
    /// signed-in user's mailbox and update application statuses.
    #[instrument(skip(self))]
    pub async fn sync_emails(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client
            .request(Method::POST, "/email/sync", RequestBody::Empty, RequestOptions::default())
            .await
    }

    /// `POST /email/analyze` with the raw email payload.
    #[instrument(skip(self, email))]
    pub async fn analyze_email(&self, email: &Value) -> Result<ApiResponse<Value>, ApiError> {
        self.client.post("/email/analyze", email).await
    }
}
