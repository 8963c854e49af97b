//! Port interfaces for user profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user profile operations.

use async_trait::async_trait;
use jobmatch_domain::{
    ApiResponse, FileUpload, JobRecommendation, RecommendationsResponse, ResumeMatchResponse,
    Result, UploadReceipt, User, UserUpdate,
};

/// Trait for the `/users` endpoints
#[async_trait]
pub trait UsersPort: Send + Sync {
    /// Get user profile by ID
    async fn get_user(&self, user_id: &str) -> Result<ApiResponse<User>>;

    /// Apply a partial profile update
    async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<ApiResponse<User>>;

    /// Recommended jobs for a user, best match first
    async fn get_user_recommendations(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<ApiResponse<Vec<JobRecommendation>>>;

    /// Attach a resume PDF to the profile
    async fn upload_user_resume(
        &self,
        user_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<UploadReceipt>>;

    /// Upload a resume and let the server rank jobs against it
    async fn upload_resume_for_matching(
        &self,
        user_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<ResumeMatchResponse>>;

    /// Rank jobs against a free-form skills description
    async fn get_ai_job_recommendations(
        &self,
        user_id: &str,
        skills: &str,
    ) -> Result<ApiResponse<RecommendationsResponse>>;

    /// Direct URL of the stored profile resume
    fn user_resume_url(&self, user_id: &str) -> String;
}
