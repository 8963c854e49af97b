//! Applications service and summary statistics

use std::sync::Arc;

use jobmatch_domain::constants::{APPLICATION_FAILED, UPLOAD_RESUME_FAILED};
use jobmatch_domain::{
    Application, ApplicationInsights, ApplicationStatus, CreateApplicationRequest, FileUpload,
    Result, UploadReceipt,
};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, instrument};

use super::ports::ApplicationsPort;

/// Counts shown on the applications dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStatistics {
    pub total: usize,
    pub pending: usize,
    pub interviewing: usize,
    pub rejected: usize,
    pub accepted: usize,
}

impl ApplicationStatistics {
    pub fn from_applications(applications: &[Application]) -> Self {
        let count = |status: ApplicationStatus| {
            applications.iter().filter(|application| application.status == status).count()
        };
        Self {
            total: applications.len(),
            pending: count(ApplicationStatus::Pending),
            interviewing: count(ApplicationStatus::Interviewing),
            rejected: count(ApplicationStatus::Rejected),
            accepted: count(ApplicationStatus::Accepted),
        }
    }
}

/// Applications service
///
/// Keeps the statistics of the most recent listing so callers can show them
/// without another round trip.
pub struct ApplicationsService {
    applications: Arc<dyn ApplicationsPort>,
    statistics: RwLock<ApplicationStatistics>,
}

impl ApplicationsService {
    pub fn new(applications: Arc<dyn ApplicationsPort>) -> Self {
        Self { applications, statistics: RwLock::new(ApplicationStatistics::default()) }
    }

    /// Statistics from the last successful [`list`](Self::list).
    pub fn statistics(&self) -> ApplicationStatistics {
        *self.statistics.read()
    }

    #[instrument(skip(self, request), fields(job_id = %request.job_id))]
    pub async fn create(
        &self,
        user_id: &str,
        request: &CreateApplicationRequest,
    ) -> Result<Application> {
        let application = self
            .applications
            .create_application(user_id, request)
            .await
            .map_err(|e| e.with_fallback(APPLICATION_FAILED))?
            .into_data(APPLICATION_FAILED)?;
        info!(application_id = %application.id, "Application created");
        Ok(application)
    }

    /// List a user's applications and refresh the cached statistics.
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: &str) -> Result<Vec<Application>> {
        let applications = self
            .applications
            .get_user_applications(user_id)
            .await
            .map_err(|e| e.with_fallback(APPLICATION_FAILED))?
            .into_data(APPLICATION_FAILED)?;
        *self.statistics.write() = ApplicationStatistics::from_applications(&applications);
        Ok(applications)
    }

    pub async fn insights(&self, application_id: &str) -> Result<ApplicationInsights> {
        self.applications
            .get_application_insights(application_id)
            .await
            .map_err(|e| e.with_fallback(APPLICATION_FAILED))?
            .into_data(APPLICATION_FAILED)
    }

    /// Change an application's status. The server returns no payload.
    #[instrument(skip(self))]
    pub async fn update_status(&self, application_id: &str, status: ApplicationStatus) -> Result<()> {
        self.applications
            .update_application_status(application_id, status)
            .await
            .map_err(|e| e.with_fallback(APPLICATION_FAILED))?
            .into_result(APPLICATION_FAILED)?;
        info!(status = %status, "Application status updated");
        Ok(())
    }

    pub async fn upload_resume(
        &self,
        application_id: &str,
        file: &FileUpload,
    ) -> Result<UploadReceipt> {
        self.applications
            .upload_application_resume(application_id, file)
            .await
            .map_err(|e| e.with_fallback(UPLOAD_RESUME_FAILED))?
            .into_data(UPLOAD_RESUME_FAILED)
    }

    pub fn resume_url(&self, application_id: &str) -> String {
        self.applications.application_resume_url(application_id)
    }
}
