//! `/jobs` endpoints

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_core::JobsPort;
use jobmatch_domain::{
    ApiResponse, Job, JobRecommendation, JobSearchParams, JobsResponse, Result, SyncResponse,
};
use reqwest::Method;
use serde_json::Value;
use tracing::{info, instrument};
use urlencoding::encode;

use super::client::{ApiClient, RequestBody, RequestOptions};

/// Job listing, search and matching endpoints
#[derive(Debug, Clone)]
pub struct JobsApi {
    client: Arc<ApiClient>,
}

impl JobsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobsPort for JobsApi {
    #[instrument(skip(self))]
    async fn get_jobs(&self, params: &JobSearchParams) -> Result<ApiResponse<JobsResponse>> {
        let options = RequestOptions::default().with_query(params.to_pairs());
        Ok(self.client.get("/jobs", options).await?)
    }

    #[instrument(skip(self))]
    async fn sync_jobs(&self) -> Result<ApiResponse<SyncResponse>> {
        let options = RequestOptions::default().with_timeout(self.client.config().long_timeout);
        let response: ApiResponse<SyncResponse> =
            self.client.request(Method::POST, "/jobs/sync", RequestBody::Empty, options).await?;

        if let Some(sync) = &response.data {
            info!(jobs_added = sync.jobs_added, "Job sync finished");
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_job(&self, job_id: &str) -> Result<ApiResponse<Job>> {
        let path = format!("/jobs/{}", encode(job_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }

    #[instrument(skip(self))]
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<ApiResponse<JobsResponse>> {
        let options = RequestOptions::default().with_query(params.to_pairs());
        Ok(self.client.get("/jobs/search", options).await?)
    }

    #[instrument(skip(self))]
    async fn get_job_recommendations(
        &self,
        user_id: &str,
        job_id: &str,
    ) -> Result<ApiResponse<Vec<JobRecommendation>>> {
        let path = format!("/jobs/{}/recommendations/{}", encode(job_id), encode(user_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }

    #[instrument(skip(self))]
    async fn match_job_with_user(&self, job_id: &str, user_id: &str) -> Result<ApiResponse<Value>> {
        let path = format!("/jobs/{}/match/{}", encode(job_id), encode(user_id));
        Ok(self
            .client
            .request(Method::POST, &path, RequestBody::Empty, RequestOptions::default())
            .await?)
    }
}
