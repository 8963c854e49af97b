//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LONG_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// Credential storage
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "JobMatch.auth";
pub const DEFAULT_CREDENTIALS_FILE: &str = "jobmatch-credentials.json";

// Auth endpoints
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_REGISTER_PATH: &str = "/auth/register";
pub const AUTH_REFRESH_PATH: &str = "/auth/refresh";
pub const AUTH_VERIFY_PATH: &str = "/auth/verify";
pub const AUTH_GOOGLE_PATH: &str = "/auth/google";

// Fallback messages when the server gives none
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const GOOGLE_SIGN_IN_FAILED: &str = "Google sign-in failed";
pub const SYNC_FAILED: &str = "Sync failed";
pub const FETCH_JOBS_FAILED: &str = "Failed to fetch jobs";
pub const SEARCH_FAILED: &str = "Search failed";
pub const NO_USER_LOGGED_IN: &str = "No user logged in";
pub const JOB_MATCHING_FAILED: &str = "Job matching failed";
pub const PROFILE_UPDATE_FAILED: &str = "Profile update failed";
pub const REQUEST_FAILED: &str = "Request failed";
pub const FETCH_RECOMMENDATIONS_FAILED: &str = "Failed to fetch recommendations";
pub const SUBMIT_FEEDBACK_FAILED: &str = "Failed to submit feedback";
pub const PROCESS_RESUME_FAILED: &str = "Failed to process resume";
pub const AI_RECOMMENDATIONS_FAILED: &str = "Failed to get AI recommendations";
pub const UPLOAD_RESUME_FAILED: &str = "Resume upload failed";
pub const APPLICATION_FAILED: &str = "Application request failed";
