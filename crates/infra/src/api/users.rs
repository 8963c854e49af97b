//! `/users` endpoints

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_core::UsersPort;
use jobmatch_domain::{
    ApiResponse, FileUpload, JobRecommendation, RecommendationsResponse, Result,
    ResumeMatchResponse, SkillsRequest, UploadReceipt, User, UserUpdate,
};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::{ApiClient, RequestOptions};

/// Profile, resume and recommendation endpoints
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersPort for UsersApi {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: &str) -> Result<ApiResponse<User>> {
        let path = format!("/users/{}", encode(user_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }

    #[instrument(skip(self, update))]
    async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<ApiResponse<User>> {
        let path = format!("/users/{}", encode(user_id));
        Ok(self.client.put(&path, update).await?)
    }

    #[instrument(skip(self))]
    async fn get_user_recommendations(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<ApiResponse<Vec<JobRecommendation>>> {
        let path = format!("/users/{}/recommendations", encode(user_id));
        let options =
            RequestOptions::default().with_query(vec![("limit".to_string(), limit.to_string())]);
        Ok(self.client.get(&path, options).await?)
    }

    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    async fn upload_user_resume(
        &self,
        user_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<UploadReceipt>> {
        let path = format!("/users/{}/resume", encode(user_id));
        Ok(self.client.upload(&path, file, RequestOptions::default()).await?)
    }

    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    async fn upload_resume_for_matching(
        &self,
        user_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<ResumeMatchResponse>> {
        let path = format!("/users/{}/resume/match", encode(user_id));
        let options = RequestOptions::default().with_timeout(self.client.config().long_timeout);
        let response: ApiResponse<ResumeMatchResponse> =
            self.client.upload(&path, file, options).await?;

        debug!(
            recommendations = response.data.as_ref().map_or(0, |d| d.recommendations.len()),
            "Resume matched"
        );
        Ok(response)
    }

    #[instrument(skip(self, skills))]
    async fn get_ai_job_recommendations(
        &self,
        user_id: &str,
        skills: &str,
    ) -> Result<ApiResponse<RecommendationsResponse>> {
        let path = format!("/users/{}/recommendations/skills", encode(user_id));
        let request = SkillsRequest { skills: skills.to_string() };
        Ok(self.client.post(&path, &request).await?)
    }

    fn user_resume_url(&self, user_id: &str) -> String {
        self.client.url(&format!("/users/{}/resume", encode(user_id)))
    }
}
