//! Port interface for the `/jobs` endpoints

use async_trait::async_trait;
use jobmatch_domain::{
    ApiResponse, Job, JobRecommendation, JobSearchParams, JobsResponse, Result, SyncResponse,
};
use serde_json::Value;

#[async_trait]
pub trait JobsPort: Send + Sync {
    /// Paged listing
    async fn get_jobs(&self, params: &JobSearchParams) -> Result<ApiResponse<JobsResponse>>;

    /// Ask the server to pull new postings from its upstream source.
    /// Long-running.
    async fn sync_jobs(&self) -> Result<ApiResponse<SyncResponse>>;

    async fn get_job(&self, job_id: &str) -> Result<ApiResponse<Job>>;

    /// Full-text search
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<ApiResponse<JobsResponse>>;

    async fn get_job_recommendations(
        &self,
        user_id: &str,
        job_id: &str,
    ) -> Result<ApiResponse<Vec<JobRecommendation>>>;

    /// Score a single job against the user's stored resume. The payload
    /// shape is server-defined.
    async fn match_job_with_user(&self, job_id: &str, user_id: &str) -> Result<ApiResponse<Value>>;
}
