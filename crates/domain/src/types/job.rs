//! Job listing, search and recommendation types

use serde::{Deserialize, Serialize};

/// A job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Query parameters for `GET /jobs` and `GET /jobs/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl JobSearchParams {
    pub fn query(q: impl Into<String>) -> Self {
        Self { q: Some(q.into()), ..Self::default() }
    }

    /// Render as `(name, value)` pairs for a query string.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q".to_string(), q.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs
    }
}

/// Paged job listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

/// Result of `POST /jobs/sync`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub jobs_added: u32,
    #[serde(default)]
    pub message: String,
}

/// A job scored against a candidate
///
/// The backend has shipped two shapes (`match_score` with `explanation`, and
/// `match_percentage` with `skills_matched`); both deserialize here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job: Job,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_matched: Option<u32>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl JobRecommendation {
    /// Match as a percentage in `0..=100`, whichever shape was sent.
    ///
    /// `match_score` values at or below 1.0 are treated as fractions.
    pub fn percentage(&self) -> Option<f64> {
        match (self.match_percentage, self.match_score) {
            (Some(pct), _) => Some(pct.clamp(0.0, 100.0)),
            (None, Some(score)) if score <= 1.0 => Some((score * 100.0).clamp(0.0, 100.0)),
            (None, Some(score)) => Some(score.clamp(0.0, 100.0)),
            (None, None) => None,
        }
    }
}

/// `POST /users/{id}/resume/match`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeMatchResponse {
    #[serde(default)]
    pub recommendations: Vec<JobRecommendation>,
    #[serde(default)]
    pub resume_text: String,
}

/// `POST /users/{id}/recommendations/skills`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<JobRecommendation>,
}

/// Body of `POST /users/{id}/recommendations/skills`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsRequest {
    pub skills: String,
}
