use async_trait::async_trait;
use jobmatch_domain::{ApiResponse, NewFeedback, Result, UserFeedback};

/// Trait for the `/feedback` endpoints
#[async_trait]
pub trait FeedbackPort: Send + Sync {
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<ApiResponse<UserFeedback>>;

    async fn get_user_feedback(&self, user_id: &str) -> Result<ApiResponse<Vec<UserFeedback>>>;
}
