//! Profile service - recommendations, resumes and feedback

use std::sync::Arc;

use jobmatch_domain::constants::{
    AI_RECOMMENDATIONS_FAILED, DEFAULT_RECOMMENDATION_LIMIT, FETCH_RECOMMENDATIONS_FAILED,
    PROCESS_RESUME_FAILED, REQUEST_FAILED, SUBMIT_FEEDBACK_FAILED, UPLOAD_RESUME_FAILED,
};
use jobmatch_domain::{
    FileUpload, JobRecommendation, NewFeedback, Result, ResumeMatchResponse, UploadReceipt, User,
    UserFeedback,
};
use tracing::{info, instrument};

use super::ports::UsersPort;
use crate::feedback::ports::FeedbackPort;

pub struct ProfileService {
    users: Arc<dyn UsersPort>,
    feedback: Arc<dyn FeedbackPort>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UsersPort>, feedback: Arc<dyn FeedbackPort>) -> Self {
        Self { users, feedback }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.users
            .get_user(user_id)
            .await
            .map_err(|e| e.with_fallback(REQUEST_FAILED))?
            .into_data(REQUEST_FAILED)
    }

    /// Recommended jobs, `limit` defaulting to 10.
    #[instrument(skip(self))]
    pub async fn recommendations(
        &self,
        user_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<JobRecommendation>> {
        let limit = limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
        self.users
            .get_user_recommendations(user_id, limit)
            .await
            .map_err(|e| e.with_fallback(FETCH_RECOMMENDATIONS_FAILED))?
            .into_data(FETCH_RECOMMENDATIONS_FAILED)
    }

    /// Rank jobs against a skills description.
    #[instrument(skip(self, skills))]
    pub async fn ai_recommendations(
        &self,
        user_id: &str,
        skills: &str,
    ) -> Result<Vec<JobRecommendation>> {
        let response = self
            .users
            .get_ai_job_recommendations(user_id, skills)
            .await
            .map_err(|e| e.with_fallback(AI_RECOMMENDATIONS_FAILED))?
            .into_data(AI_RECOMMENDATIONS_FAILED)?;
        Ok(response.recommendations)
    }

    #[instrument(skip(self, file), fields(file = %file.file_name))]
    pub async fn upload_resume(&self, user_id: &str, file: &FileUpload) -> Result<UploadReceipt> {
        let receipt = self
            .users
            .upload_user_resume(user_id, file)
            .await
            .map_err(|e| e.with_fallback(UPLOAD_RESUME_FAILED))?
            .into_data(UPLOAD_RESUME_FAILED)?;
        info!(filename = %receipt.filename, "Resume uploaded");
        Ok(receipt)
    }

    /// Upload a resume and get jobs ranked against it.
    #[instrument(skip(self, file), fields(file = %file.file_name))]
    pub async fn match_resume(
        &self,
        user_id: &str,
        file: &FileUpload,
    ) -> Result<ResumeMatchResponse> {
        self.users
            .upload_resume_for_matching(user_id, file)
            .await
            .map_err(|e| e.with_fallback(PROCESS_RESUME_FAILED))?
            .into_data(PROCESS_RESUME_FAILED)
    }

    pub fn resume_url(&self, user_id: &str) -> String {
        self.users.user_resume_url(user_id)
    }

    #[instrument(skip(self, feedback), fields(job_id = %feedback.job_id, kind = %feedback.feedback_type))]
    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<UserFeedback> {
        self.feedback
            .submit_feedback(feedback)
            .await
            .map_err(|e| e.with_fallback(SUBMIT_FEEDBACK_FAILED))?
            .into_data(SUBMIT_FEEDBACK_FAILED)
    }

    pub async fn feedback_history(&self, user_id: &str) -> Result<Vec<UserFeedback>> {
        self.feedback
            .get_user_feedback(user_id)
            .await
            .map_err(|e| e.with_fallback(REQUEST_FAILED))?
            .into_data(REQUEST_FAILED)
    }
}
