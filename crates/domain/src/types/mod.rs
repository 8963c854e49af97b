//! Domain types and models
//!
//! Mirrors the JSON contract of the JobMatch REST API. Field names follow
//! the wire format so the types serialize without renames.

pub mod application;
pub mod envelope;
pub mod feedback;
pub mod job;
pub mod upload;
pub mod user;

pub use application::{
    Application, ApplicationInsights, ApplicationStatus, CreateApplicationRequest,
    StatusUpdate,
};
pub use envelope::ApiResponse;
pub use feedback::{FeedbackType, NewFeedback, UserFeedback};
pub use job::{
    Job, JobRecommendation, JobSearchParams, JobsResponse, RecommendationsResponse,
    ResumeMatchResponse, SkillsRequest, SyncResponse,
};
pub use upload::{FileUpload, UploadReceipt};
pub use user::{
    AuthResponse, GoogleLoginRequest, LoginCredentials, RefreshRequest, RegisterData, Session,
    TokenPair, User, UserUpdate, VerifyRequest,
};
