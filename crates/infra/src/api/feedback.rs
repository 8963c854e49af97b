//! `/feedback` endpoints

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_core::FeedbackPort;
use jobmatch_domain::{ApiResponse, NewFeedback, Result, UserFeedback};
use tracing::instrument;
use urlencoding::encode;

use super::client::{ApiClient, RequestOptions};

#[derive(Debug, Clone)]
pub struct FeedbackApi {
    client: Arc<ApiClient>,
}

impl FeedbackApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackPort for FeedbackApi {
    #[instrument(skip(self, feedback), fields(job_id = %feedback.job_id, kind = %feedback.feedback_type))]
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<ApiResponse<UserFeedback>> {
        Ok(self.client.post("/feedback", feedback).await?)
    }

    #[instrument(skip(self))]
    async fn get_user_feedback(&self, user_id: &str) -> Result<ApiResponse<Vec<UserFeedback>>> {
        let path = format!("/feedback/user/{}", encode(user_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }
}
