//! `/auth` endpoints
//!
//! `POST /auth/refresh` is deliberately absent: the client issues it itself
//! when a request comes back 401.

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_core::AuthPort;
use jobmatch_domain::constants::{
    AUTH_GOOGLE_PATH, AUTH_LOGIN_PATH, AUTH_REGISTER_PATH, AUTH_VERIFY_PATH,
};
use jobmatch_domain::{
    ApiResponse, AuthResponse, GoogleLoginRequest, LoginCredentials, RegisterData, Result,
    VerifyRequest,
};
use serde_json::Value;
use tracing::instrument;

use super::client::ApiClient;

/// Sign-in, registration and token verification
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthPort for AuthApi {
    #[instrument(skip_all)]
    async fn login(&self, credentials: &LoginCredentials) -> Result<ApiResponse<AuthResponse>> {
        Ok(self.client.post(AUTH_LOGIN_PATH, credentials).await?)
    }

    #[instrument(skip_all)]
    async fn register(&self, data: &RegisterData) -> Result<ApiResponse<AuthResponse>> {
        Ok(self.client.post(AUTH_REGISTER_PATH, data).await?)
    }

    #[instrument(skip_all)]
    async fn verify_token(&self, token: &str) -> Result<ApiResponse<Value>> {
        let request = VerifyRequest { token: token.to_string() };
        Ok(self.client.post(AUTH_VERIFY_PATH, &request).await?)
    }

    #[instrument(skip_all)]
    async fn login_with_google(&self, id_token: &str) -> Result<ApiResponse<AuthResponse>> {
        let request = GoogleLoginRequest { id_token: id_token.to_string() };
        Ok(self.client.post(AUTH_GOOGLE_PATH, &request).await?)
    }
}
