//! Jobs service - listing with sync fallback, search and matching

use std::sync::Arc;

use jobmatch_domain::constants::{
    FETCH_JOBS_FAILED, JOB_MATCHING_FAILED, REQUEST_FAILED, SEARCH_FAILED, SYNC_FAILED,
};
use jobmatch_domain::{Job, JobRecommendation, JobSearchParams, Result, SyncResponse};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::feed::JobFeed;
use super::ports::JobsPort;

/// Jobs service
pub struct JobsService {
    jobs: Arc<dyn JobsPort>,
}

impl JobsService {
    pub fn new(jobs: Arc<dyn JobsPort>) -> Self {
        Self { jobs }
    }

    /// Fetch a page of jobs.
    ///
    /// When a fresh (non-append) fetch comes back empty the server is asked
    /// to sync from its upstream source and the page is fetched once more.
    /// A rejected sync is an error carrying the server message.
    #[instrument(skip(self), fields(q = ?params.q, offset = ?params.offset))]
    pub async fn fetch_jobs(&self, params: &JobSearchParams, append: bool) -> Result<Vec<Job>> {
        let listing = self
            .jobs
            .get_jobs(params)
            .await
            .map_err(|e| e.with_fallback(FETCH_JOBS_FAILED))?
            .into_data(FETCH_JOBS_FAILED)?;

        if append || !listing.jobs.is_empty() {
            debug!(count = listing.jobs.len(), "Fetched jobs");
            return Ok(listing.jobs);
        }

        info!("Job listing is empty, requesting server sync");
        let synced = self.sync().await?;
        if let Some(sync) = synced {
            info!(jobs_added = sync.jobs_added, "Server sync finished");
        }

        let retry = self
            .jobs
            .get_jobs(params)
            .await
            .map_err(|e| e.with_fallback(FETCH_JOBS_FAILED))?;
        let jobs = if retry.success {
            retry.data.map(|listing| listing.jobs).unwrap_or_default()
        } else {
            Vec::new()
        };
        debug!(count = jobs.len(), "Fetched jobs after sync");
        Ok(jobs)
    }

    /// Fetch a page and fold it into `feed`. Returns the number of jobs
    /// added.
    pub async fn load_into(
        &self,
        feed: &mut JobFeed,
        params: &JobSearchParams,
        append: bool,
    ) -> Result<usize> {
        let jobs = self.fetch_jobs(params, append).await?;
        Ok(feed.apply(jobs, append))
    }

    /// Trigger a server-side sync explicitly.
    #[instrument(skip(self))]
    pub async fn sync(&self) -> Result<Option<SyncResponse>> {
        self.jobs
            .sync_jobs()
            .await
            .map_err(|e| e.with_fallback(SYNC_FAILED))?
            .into_result(SYNC_FAILED)
    }

    #[instrument(skip(self), fields(q = ?params.q))]
    pub async fn search(&self, params: &JobSearchParams) -> Result<Vec<Job>> {
        let results = self
            .jobs
            .search_jobs(params)
            .await
            .map_err(|e| e.with_fallback(SEARCH_FAILED))?
            .into_data(SEARCH_FAILED)?;
        Ok(results.jobs)
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        self.jobs
            .get_job(job_id)
            .await
            .map_err(|e| e.with_fallback(REQUEST_FAILED))?
            .into_data(REQUEST_FAILED)
    }

    pub async fn recommendations(
        &self,
        user_id: &str,
        job_id: &str,
    ) -> Result<Vec<JobRecommendation>> {
        self.jobs
            .get_job_recommendations(user_id, job_id)
            .await
            .map_err(|e| e.with_fallback(REQUEST_FAILED))?
            .into_data(REQUEST_FAILED)
    }

    #[instrument(skip(self))]
    pub async fn match_with_user(&self, job_id: &str, user_id: &str) -> Result<Value> {
        self.jobs
            .match_job_with_user(job_id, user_id)
            .await
            .map_err(|e| e.with_fallback(JOB_MATCHING_FAILED))?
            .into_data(JOB_MATCHING_FAILED)
    }
}
