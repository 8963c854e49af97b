//! Job application types

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Lifecycle state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Viewed,
    UnderReview,
    Interviewing,
    Rejected,
    Accepted,
    Withdrawn,
}

impl_domain_status_conversions!(ApplicationStatus {
    Pending => "pending",
    Viewed => "viewed",
    UnderReview => "under_review",
    Interviewing => "interviewing",
    Rejected => "rejected",
    Accepted => "accepted",
    Withdrawn => "withdrawn",
});

/// A submitted application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_uploaded_at: Option<String>,
}

/// Body of `POST /applications/users/{user_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

/// Body of `PUT /applications/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// `GET /applications/{id}/insights`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInsights {
    pub success_probability: f64,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
    #[serde(default)]
    pub similar_successful_profiles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_wire_format_matches_display() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::UnderReview,
            ApplicationStatus::Withdrawn,
        ] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, json!(status.to_string()));
        }
    }

    #[test]
    fn status_update_body() {
        let body = StatusUpdate { status: "under-review".parse().unwrap() };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "status": "under_review" }));
    }
}
