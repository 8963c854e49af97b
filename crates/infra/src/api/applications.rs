//! `/applications` endpoints

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_core::ApplicationsPort;
use jobmatch_domain::{
    ApiResponse, Application, ApplicationInsights, ApplicationStatus, CreateApplicationRequest,
    FileUpload, Result, StatusUpdate, UploadReceipt,
};
use serde_json::Value;
use tracing::instrument;
use urlencoding::encode;

use super::client::{ApiClient, RequestOptions};

#[derive(Debug, Clone)]
pub struct ApplicationsApi {
    client: Arc<ApiClient>,
}

impl ApplicationsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApplicationsPort for ApplicationsApi {
    #[instrument(skip(self, request), fields(job_id = %request.job_id))]
    async fn create_application(
        &self,
        user_id: &str,
        request: &CreateApplicationRequest,
    ) -> Result<ApiResponse<Application>> {
        let path = format!("/applications/users/{}", encode(user_id));
        Ok(self.client.post(&path, request).await?)
    }

    #[instrument(skip(self))]
    async fn get_user_applications(&self, user_id: &str) -> Result<ApiResponse<Vec<Application>>> {
        let path = format!("/applications/users/{}", encode(user_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }

    #[instrument(skip(self))]
    async fn get_application_insights(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<ApplicationInsights>> {
        let path = format!("/applications/{}/insights", encode(application_id));
        Ok(self.client.get(&path, RequestOptions::default()).await?)
    }

    #[instrument(skip(self))]
    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<ApiResponse<Value>> {
        let path = format!("/applications/{}/status", encode(application_id));
        Ok(self.client.put(&path, &StatusUpdate { status }).await?)
    }

    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    async fn upload_application_resume(
        &self,
        application_id: &str,
        file: &FileUpload,
    ) -> Result<ApiResponse<UploadReceipt>> {
        let path = format!("/applications/{}/resume", encode(application_id));
        Ok(self.client.upload(&path, file, RequestOptions::default()).await?)
    }

    fn application_resume_url(&self, application_id: &str) -> String {
        self.client.url(&format!("/applications/{}/resume", encode(application_id)))
    }
}
