//! Recording mocks for the user and feedback ports

use async_trait::async_trait;
use jobmatch_common::testing::fixtures::{sample_job, sample_user};
use jobmatch_core::{FeedbackPort, UsersPort};
use jobmatch_domain::{
    ApiResponse, FileUpload, JobRecommendation, NewFeedback, RecommendationsResponse,
    Result as DomainResult, ResumeMatchResponse, UploadReceipt, User, UserFeedback, UserUpdate,
};
use parking_lot::Mutex;

fn recommendation(id: &str, pct: f64) -> JobRecommendation {
    JobRecommendation {
        job: sample_job(id, "Rust Engineer", "Ferris"),
        match_score: None,
        match_percentage: Some(pct),
        explanation: None,
        matching_skills: vec!["rust".into()],
        skills_matched: Some(1),
        missing_skills: Vec::new(),
    }
}

/// In-memory mock for `UsersPort`.
#[derive(Default)]
pub struct MockUsersPort {
    pub recommendation_limits: Mutex<Vec<u32>>,
    pub uploads: Mutex<Vec<String>>,
    pub reject_matching: bool,
}

#[async_trait]
impl UsersPort for MockUsersPort {
    async fn get_user(&self, user_id: &str) -> DomainResult<ApiResponse<User>> {
        Ok(ApiResponse::ok(sample_user(user_id), ""))
    }

    async fn update_user(&self, user_id: &str, _: &UserUpdate) -> DomainResult<ApiResponse<User>> {
        Ok(ApiResponse::ok(sample_user(user_id), ""))
    }

    async fn get_user_recommendations(
        &self,
        _: &str,
        limit: u32,
    ) -> DomainResult<ApiResponse<Vec<JobRecommendation>>> {
        self.recommendation_limits.lock().push(limit);
        Ok(ApiResponse::ok(vec![recommendation("1", 91.0), recommendation("2", 64.0)], ""))
    }

    async fn upload_user_resume(
        &self,
        _: &str,
        file: &FileUpload,
    ) -> DomainResult<ApiResponse<UploadReceipt>> {
        self.uploads.lock().push(file.file_name.clone());
        Ok(ApiResponse::ok(
            UploadReceipt {
                filename: file.file_name.clone(),
                uploaded_at: "2024-03-01T10:00:00Z".into(),
            },
            "Resume uploaded",
        ))
    }

    async fn upload_resume_for_matching(
        &self,
        _: &str,
        _: &FileUpload,
    ) -> DomainResult<ApiResponse<ResumeMatchResponse>> {
        if self.reject_matching {
            return Ok(ApiResponse::failure(""));
        }
        Ok(ApiResponse::ok(
            ResumeMatchResponse {
                recommendations: vec![recommendation("3", 77.0)],
                resume_text: "Rust, Tokio".into(),
            },
            "",
        ))
    }

    async fn get_ai_job_recommendations(
        &self,
        _: &str,
        skills: &str,
    ) -> DomainResult<ApiResponse<RecommendationsResponse>> {
        let recommendations =
            if skills.is_empty() { Vec::new() } else { vec![recommendation("4", 58.0)] };
        Ok(ApiResponse::ok(RecommendationsResponse { recommendations }, ""))
    }

    fn user_resume_url(&self, user_id: &str) -> String {
        format!("http://api.test/users/{user_id}/resume")
    }
}

/// In-memory mock for `FeedbackPort`.
#[derive(Default)]
pub struct MockFeedbackPort {
    pub submitted: Mutex<Vec<NewFeedback>>,
}

#[async_trait]
impl FeedbackPort for MockFeedbackPort {
    async fn submit_feedback(
        &self,
        feedback: &NewFeedback,
    ) -> DomainResult<ApiResponse<UserFeedback>> {
        self.submitted.lock().push(feedback.clone());
        Ok(ApiResponse::ok(
            UserFeedback {
                id: format!("fb-{}", self.submitted.lock().len()),
                user_id: feedback.user_id.clone(),
                job_id: feedback.job_id.clone(),
                feedback_type: feedback.feedback_type,
                rating: feedback.rating,
                timestamp: "2024-03-01T10:00:00Z".into(),
                metadata: feedback.metadata.clone(),
            },
            "",
        ))
    }

    async fn get_user_feedback(&self, _: &str) -> DomainResult<ApiResponse<Vec<UserFeedback>>> {
        Ok(ApiResponse::failure("Feedback unavailable"))
    }
}
