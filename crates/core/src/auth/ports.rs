//! Port interface for the authentication endpoints
//!
//! The refresh endpoint is not part of this port: refreshing is handled
//! inside the API client when a request comes back 401.

use async_trait::async_trait;
use jobmatch_domain::{ApiResponse, AuthResponse, LoginCredentials, RegisterData, Result};
use serde_json::Value;

/// Trait for sign-in, registration and token verification
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &LoginCredentials) -> Result<ApiResponse<AuthResponse>>;

    /// `POST /auth/register`
    async fn register(&self, data: &RegisterData) -> Result<ApiResponse<AuthResponse>>;

    /// `POST /auth/verify`
    async fn verify_token(&self, token: &str) -> Result<ApiResponse<Value>>;

    /// `POST /auth/google` with an identity-provider ID token
    async fn login_with_google(&self, id_token: &str) -> Result<ApiResponse<AuthResponse>>;
}
