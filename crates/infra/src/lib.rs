//! # JobMatch Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest transport and the authenticated API client
//! - Endpoint groups implementing the `jobmatch-core` ports
//! - Credential storage backends (keychain, JSON file, memory)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `jobmatch-core`
//! - Depends on `jobmatch-common` and `jobmatch-domain`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, ApplicationsApi, AuthApi,
    FeedbackApi, JobMatchApi, JobsApi, RequestBody, RequestOptions, SystemApi, UsersApi,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::{credential_store_from_config, FileCredentialStore};
