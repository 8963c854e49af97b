//! Port interface for the `/applications` endpoints

use async_trait::async_trait;
use jobmatch_domain::{
    ApiResponse, Application, ApplicationInsights, ApplicationStatus, CreateApplicationRequest,
    FileUpload, Result, UploadReceipt,
};
use serde_json::Value;

#[async_trait]
pub trait ApplicationsPort: Send + Sync {
    async fn create_application(
        &self,
        user_id: &str,
        request: &CreateApplicationRequest,
    ) -> Result<ApiResponse<Application>>;

    async fn get_user_applications(&self, user_id: &str) -> Result<ApiResponse<Vec<Application>>>;

    async fn get_application_insights(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<ApplicationInsights>>;

    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<ApiResponse<Value>>;

    async fn upload_application_resume(
        &self,
        application_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<UploadReceipt>>;

    /// Direct URL of the resume attached to an application
    fn application_resume_url(&self, application_id: &str) -> String;
}
