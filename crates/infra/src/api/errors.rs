//! API-specific error types
//!
//! Every failure of [`ApiClient::request`](super::ApiClient::request) is an
//! [`ApiError`] carrying the HTTP status when there was a response and a
//! normalized message otherwise.

use std::time::Duration;

use jobmatch_domain::JobMatchError;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 after the refresh-and-retry path has been exhausted, or 403
    Authentication,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// 4xx except the ones above
    Client,
    /// No response at all (offline, DNS, connection reset, timeout)
    Network,
    /// Local misuse: bad base URL, undecodable payload
    Config,
}

/// API operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// HTTP 401 that could not be recovered by a token refresh
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = server_message(status, body);
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized { message }
        } else {
            Self::Status { status: status.as_u16(), message }
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Normalized message without category prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.clone(),
            Self::Transport(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized { .. } => ApiErrorCategory::Authentication,
            Self::Status { status, .. } => match *status {
                403 => ApiErrorCategory::Authentication,
                429 => ApiErrorCategory::RateLimit,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Transport(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) | Self::Config(_) => ApiErrorCategory::Config,
        }
    }
}

impl From<ApiError> for JobMatchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(message) => JobMatchError::Network(message),
            ApiError::Timeout(timeout) => {
                JobMatchError::Network(format!("timeout of {}ms exceeded", timeout.as_millis()))
            }
            ApiError::Unauthorized { message } => JobMatchError::Auth(message),
            ApiError::Status { status, message } => match status {
                403 => JobMatchError::Auth(message),
                404 => JobMatchError::NotFound(message),
                400..=499 => JobMatchError::InvalidInput(message),
                _ => JobMatchError::Network(message),
            },
            ApiError::Decode(message) => JobMatchError::Internal(message),
            ApiError::Config(message) => JobMatchError::Config(message),
        }
    }
}

/// Message for a failed response: the body's `error` field, then its
/// `message` field, then a generic status line.
pub fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["error", "message"].into_iter().find_map(|field| {
                json.get(field)
                    .and_then(Value::as_str)
                    .filter(|text| !text.trim().is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}
