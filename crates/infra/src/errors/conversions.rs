//! Conversions from external infrastructure errors into domain errors.

use jobmatch_domain::JobMatchError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub JobMatchError);

impl From<InfraError> for JobMatchError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<JobMatchError> for InfraError {
    fn from(value: JobMatchError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoJobMatchError {
    fn into_jobmatch(self) -> JobMatchError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → JobMatchError */
/* -------------------------------------------------------------------------- */

impl IntoJobMatchError for HttpError {
    fn into_jobmatch(self) -> JobMatchError {
        if self.is_timeout() {
            return JobMatchError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return JobMatchError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return JobMatchError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => JobMatchError::Auth(message),
                404 => JobMatchError::NotFound(message),
                400..=499 => JobMatchError::InvalidInput(message),
                _ => JobMatchError::Network(message),
            };
        }

        JobMatchError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_jobmatch())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
