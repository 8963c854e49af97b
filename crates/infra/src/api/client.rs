//! Authenticated API client
//!
//! Every request carries the stored access token as a bearer credential.
//! When a request comes back 401 the client refreshes the token pair once
//! (shared by every request that is waiting on a 401 at the same time) and
//! re-issues the request a single time. A failed refresh wipes the stored
//! session and the caller sees the original 401.
//!
//! The refresh call itself goes straight through [`HttpClient`], so a 401
//! from the refresh endpoint can never trigger another refresh.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use jobmatch_common::{RefreshCoordinator, RefreshError, SessionStore};
use jobmatch_domain::constants::{
    AUTH_REFRESH_PATH, DEFAULT_API_BASE_URL, DEFAULT_LONG_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use jobmatch_domain::{ApiConfig, ApiResponse, FileUpload, RefreshRequest, TokenPair};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::{server_message, ApiError};
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL every path is appended to (e.g. "http://127.0.0.1:8080/api")
    pub base_url: String,
    /// Default per-request timeout
    pub timeout: Duration,
    /// Timeout for long-running calls (job sync, resume matching)
    pub long_timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            long_timeout: Duration::from_secs(DEFAULT_LONG_TIMEOUT_SECS),
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            long_timeout: Duration::from_secs(config.long_timeout_secs),
        }
    }
}

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replaces the client's default timeout for this request
    pub timeout: Option<Duration>,
    /// Query-string parameters, appended in order
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// Request payload
///
/// Kept in an owned, replayable form so the one retry after a token refresh
/// can rebuild the body. Multipart forms in particular are single-use in
/// reqwest.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// A single `file` part
    Multipart(FileUpload),
}

impl RequestBody {
    /// Serialize `body` into a JSON payload.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self, ApiError> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))
    }

    fn apply(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self {
            Self::Empty => Ok(builder),
            Self::Json(value) => Ok(builder.json(value)),
            Self::Multipart(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)
                    .map_err(|e| ApiError::Config(format!("Invalid MIME type: {e}")))?;
                Ok(builder.multipart(Form::new().part("file", part)))
            }
        }
    }
}

/// API client with bearer authentication and single-flight token refresh
pub struct ApiClient {
    http_client: HttpClient,
    session: SessionStore,
    refresh: Arc<RefreshCoordinator>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be created
    pub fn new(config: ApiClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {e}", config.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Unsupported base URL scheme '{}'",
                parsed.scheme()
            )));
        }

        let ceiling = config.timeout.max(config.long_timeout);
        let http_client = HttpClient::builder()
            .timeout(ceiling)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        let config = ApiClientConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self { http_client, session, refresh: Arc::new(RefreshCoordinator::new()), config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Session storage the client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Number of refresh calls this client has started.
    pub fn refreshes_started(&self) -> u64 {
        self.refresh.refreshes_started()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, RequestBody::Empty, options).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, RequestBody::json(body)?, RequestOptions::default()).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, RequestBody::json(body)?, RequestOptions::default()).await
    }

    /// Upload `file` as the `file` part of a multipart POST
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: &FileUpload,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, RequestBody::Multipart(file.clone()), options).await
    }

    /// Issue a request and decode the response payload.
    ///
    /// A 401 triggers at most one refresh-and-retry; every other failure is
    /// returned as is.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] when the 401 could not be recovered,
    /// [`ApiError::Status`] for other non-2xx responses,
    /// [`ApiError::Transport`]/[`ApiError::Timeout`] when no response
    /// arrived, [`ApiError::Decode`] when the payload does not match `T`.
    #[instrument(skip(self, body, options), fields(method = %method, path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let sent_token = self.session.access_token().await;

        let response = self.send(&method, &url, &body, &options, sent_token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::decode(response).await;
        }

        let unauthorized = Self::error_from(response).await;
        debug!("Request rejected with 401");

        let Some(token) = self.recover_access_token(sent_token.as_deref()).await else {
            return Err(unauthorized);
        };

        debug!("Retrying request with refreshed token");
        let retried = self.send(&method, &url, &body, &options, Some(&token)).await?;
        Self::decode(retried).await
    }

    /// `GET /health`, reported as a plain flag. Transport failures are
    /// errors; an unhealthy status is not.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = self.url("/health");
        let response = self
            .send(&Method::GET, &url, &RequestBody::Empty, &RequestOptions::default(), None)
            .await?;

        if response.status().is_success() {
            info!("API is healthy");
            Ok(true)
        } else {
            warn!(status = %response.status(), "API returned non-success status");
            Ok(false)
        }
    }

    /// Token to retry with after a 401, or `None` when the session is gone.
    async fn recover_access_token(&self, sent: Option<&str>) -> Option<String> {
        // A refresh that finished while this request was in flight has
        // already stored a newer token.
        if let Some(current) = self.session.access_token().await {
            if sent != Some(current.as_str()) {
                debug!("Access token changed since request was sent");
                return Some(current);
            }
        }

        match self.refresh.refresh(|| self.start_refresh()).await {
            Ok(tokens) => Some(tokens.access_token),
            Err(_) => None,
        }
    }

    /// The refresh future shared by every waiter. It stores the new pair
    /// before resolving and wipes the session when it fails.
    fn start_refresh(
        &self,
    ) -> impl Future<Output = Result<TokenPair, RefreshError>> + Send + 'static {
        let http_client = self.http_client.clone();
        let session = self.session.clone();
        let url = self.url(AUTH_REFRESH_PATH);
        let timeout = self.config.timeout;

        async move {
            let result = refresh_tokens(&http_client, &session, &url, timeout).await;
            match &result {
                Ok(_) => info!("Token refresh succeeded"),
                Err(e) => {
                    warn!(error = %e, "Token refresh failed, clearing stored session");
                    session.clear().await;
                }
            }
            result
        }
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: &RequestBody,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.http_client.request(method.clone(), url);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let builder = body.apply(builder)?;

        let timeout = options.timeout.unwrap_or(self.config.timeout);
        match tokio::time::timeout(timeout, self.http_client.send(builder)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(ApiError::Transport(err.user_message().to_string())),
            Err(_) => Err(ApiError::Timeout(timeout)),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {e}")))?;

        // 204/205 and empty 200s carry no body
        if bytes.is_empty() {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "Empty response ({}), but response type cannot be deserialized from an empty body",
                    status.as_u16()
                ))
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_response(status, &body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("refresh", &self.refresh)
            .finish_non_exhaustive()
    }
}

/// `POST /auth/refresh` with the stored refresh token, then persist the new
/// pair.
async fn refresh_tokens(
    http_client: &HttpClient,
    session: &SessionStore,
    url: &str,
    timeout: Duration,
) -> Result<TokenPair, RefreshError> {
    let refresh_token = session.refresh_token().await.ok_or(RefreshError::MissingRefreshToken)?;

    let request = http_client.request(Method::POST, url).json(&RefreshRequest { refresh_token });
    let response = match tokio::time::timeout(timeout, http_client.send(request)).await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => return Err(RefreshError::Transport(err.user_message().to_string())),
        Err(_) => {
            return Err(RefreshError::Transport(format!(
                "timeout of {}ms exceeded",
                timeout.as_millis()
            )))
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RefreshError::Rejected {
            status: Some(status.as_u16()),
            message: server_message(status, &body),
        });
    }

    let envelope: ApiResponse<TokenPair> = response.json().await.map_err(|e| {
        RefreshError::Rejected {
            status: Some(status.as_u16()),
            message: format!("Malformed refresh response: {e}"),
        }
    })?;

    let tokens = match envelope {
        ApiResponse { success: true, data: Some(tokens), .. } => tokens,
        rejected => {
            return Err(RefreshError::Rejected {
                status: None,
                message: rejected.message_or("Token refresh rejected").to_string(),
            })
        }
    };

    session.store_tokens(&tokens).await.map_err(|e| RefreshError::Storage(e.to_string()))?;
    Ok(tokens)
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    session: Option<SessionStore>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential session the client authenticates with
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let session =
            self.session.ok_or_else(|| ApiError::Config("Session store not set".to_string()))?;

        ApiClient::new(config, session)
    }
}
