//! Response envelope shared by every endpoint
//!
//! Every response body has the shape `{ success, data?, message }`. A body
//! with `success: false` is a logical failure even when the HTTP status is
//! 2xx.

use serde::{Deserialize, Serialize};

use crate::errors::JobMatchError;

/// Standard API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data: Some(data), message: message.into() }
    }

    /// Logical failure with a server message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: message.into() }
    }

    /// Server message, or `fallback` when the server sent an empty one.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }

    /// Convert a logical failure into [`JobMatchError::Rejected`].
    ///
    /// Successful envelopes yield their (possibly absent) data.
    ///
    /// # Errors
    /// Returns `Rejected` carrying the server message (or `fallback`) when
    /// `success` is false.
    pub fn into_result(self, fallback: &str) -> Result<Option<T>, JobMatchError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(JobMatchError::Rejected(self.message_or(fallback).to_string()))
        }
    }

    /// Like [`into_result`](Self::into_result) but also rejects a successful
    /// envelope that carries no data.
    ///
    /// # Errors
    /// Returns `Rejected` with the server message (or `fallback`) unless the
    /// envelope is successful and has data.
    pub fn into_data(self, fallback: &str) -> Result<T, JobMatchError> {
        if !self.success {
            return Err(JobMatchError::Rejected(self.message_or(fallback).to_string()));
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(JobMatchError::Rejected(self.message_or(fallback).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_envelope_without_data() {
        let env: ApiResponse<String> =
            serde_json::from_value(json!({ "success": true, "message": "Status updated" }))
                .unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let env: ApiResponse<u32> =
            serde_json::from_value(json!({ "success": true, "data": 3 })).unwrap();
        assert_eq!(env.data, Some(3));
        assert_eq!(env.message, "");
    }

    #[test]
    fn rejection_uses_server_message_then_fallback() {
        let rejected: ApiResponse<u32> = ApiResponse::failure("Invalid credentials");
        assert_eq!(
            rejected.into_result("Login failed"),
            Err(JobMatchError::Rejected("Invalid credentials".into()))
        );

        let silent: ApiResponse<u32> = ApiResponse::failure("");
        assert_eq!(
            silent.into_result("Login failed"),
            Err(JobMatchError::Rejected("Login failed".into()))
        );
    }

    #[test]
    fn success_yields_data() {
        let env = ApiResponse::ok(7_u32, "ok");
        assert_eq!(env.into_result("unused"), Ok(Some(7)));
    }

    #[test]
    fn into_data_rejects_success_without_data() {
        let empty: ApiResponse<u32> =
            serde_json::from_value(json!({ "success": true, "message": "" })).unwrap();
        assert_eq!(empty.into_data("Search failed"), Err(JobMatchError::Rejected("Search failed".into())));
        assert_eq!(ApiResponse::ok(1_u32, "").into_data("unused"), Ok(1));
    }
}
