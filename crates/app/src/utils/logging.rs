//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr so stdout carries only command output.

use jobmatch_domain::{JobMatchError, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a
/// no-op.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Stable label for a command failure, used as the `error_kind` log field.
///
/// Errors that did not originate as a [`JobMatchError`] are labelled `other`.
pub fn error_label(error: &anyhow::Error) -> &'static str {
    let Some(error) = error.downcast_ref::<JobMatchError>() else {
        return "other";
    };

    match error {
        JobMatchError::Config(_) => "config",
        JobMatchError::Storage(_) => "storage",
        JobMatchError::Network(_) => "network",
        JobMatchError::Auth(_) => "auth",
        JobMatchError::NotFound(_) => "not_found",
        JobMatchError::InvalidInput(_) => "invalid_input",
        JobMatchError::Rejected(_) => "rejected",
        JobMatchError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context as _;

    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&JobMatchError::Auth("x".into()).into()), "auth");
        assert_eq!(error_label(&JobMatchError::Rejected("x".into()).into()), "rejected");
    }

    #[test]
    fn label_survives_added_context() {
        let err = Err::<(), _>(JobMatchError::Network("offline".into()))
            .context("http://localhost:3000/api is unreachable")
            .unwrap_err();
        assert_eq!(error_label(&err), "network");
    }

    #[test]
    fn foreign_errors_are_other() {
        assert_eq!(error_label(&anyhow::anyhow!("No user logged in")), "other");
    }

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&config);
    }
}
