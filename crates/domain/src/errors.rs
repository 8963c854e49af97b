//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for JobMatch
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum JobMatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The server answered with `success: false` in its envelope.
    #[error("{0}")]
    Rejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobMatchError {
    /// Message without the category prefix, suitable for end users.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Config(m)
            | Self::Storage(m)
            | Self::Network(m)
            | Self::Auth(m)
            | Self::NotFound(m)
            | Self::InvalidInput(m)
            | Self::Rejected(m)
            | Self::Internal(m) => m,
        }
    }

    /// Replace an empty message with `fallback`, keeping the category.
    #[must_use]
    pub fn with_fallback(self, fallback: &str) -> Self {
        if !self.user_message().trim().is_empty() {
            return self;
        }
        let fallback = fallback.to_string();
        match self {
            Self::Config(_) => Self::Config(fallback),
            Self::Storage(_) => Self::Storage(fallback),
            Self::Network(_) => Self::Network(fallback),
            Self::Auth(_) => Self::Auth(fallback),
            Self::NotFound(_) => Self::NotFound(fallback),
            Self::InvalidInput(_) => Self::InvalidInput(fallback),
            Self::Rejected(_) => Self::Rejected(fallback),
            Self::Internal(_) => Self::Internal(fallback),
        }
    }

    /// Whether the failure means the user must sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Result type alias for JobMatch operations
pub type Result<T> = std::result::Result<T, JobMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = JobMatchError::Auth("session expired".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Auth");
        assert_eq!(json["message"], "session expired");
    }

    #[test]
    fn user_message_strips_category() {
        let err = JobMatchError::Rejected("Invalid credentials".into());
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(JobMatchError::Network("offline".into()).user_message(), "offline");
    }

    #[test]
    fn only_auth_errors_require_reauthentication() {
        assert!(JobMatchError::Auth("x".into()).requires_reauthentication());
        assert!(!JobMatchError::Network("x".into()).requires_reauthentication());
        assert!(!JobMatchError::Rejected("x".into()).requires_reauthentication());
    }

    #[test]
    fn fallback_only_fills_empty_messages() {
        assert_eq!(
            JobMatchError::Network(String::new()).with_fallback("Login failed"),
            JobMatchError::Network("Login failed".into())
        );
        assert_eq!(
            JobMatchError::Auth("expired".into()).with_fallback("Login failed"),
            JobMatchError::Auth("expired".into())
        );
    }
}
