//! # JobMatch Core
//!
//! Use cases for the JobMatch client - no HTTP or platform code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the remote API
//! - Session handling (sign-in, cold-start restore, sign-out, profile
//!   updates)
//! - The job feed with its sync fallback and client-side filtering
//! - Application statistics
//!
//! ## Architecture Principles
//! - Only depends on `jobmatch-common` and `jobmatch-domain`
//! - All remote calls go through ports implemented in `jobmatch-infra`
//! - Ports return the raw response envelope; services decide what a
//!   `success: false` means for their use case

pub mod applications;
pub mod auth;
pub mod feedback;
pub mod jobs;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use applications::ports::ApplicationsPort;
pub use applications::{ApplicationStatistics, ApplicationsService};
pub use auth::ports::AuthPort;
pub use auth::SessionService;
pub use feedback::ports::FeedbackPort;
pub use jobs::ports::JobsPort;
pub use jobs::{JobFeed, JobFilter, JobsService};
pub use user::ports::UsersPort;
pub use user::ProfileService;
