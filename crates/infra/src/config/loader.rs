//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `JOBMATCH_API_URL` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. If no file exists either, uses built-in defaults
//!
//! ## Environment Variables
//! - `JOBMATCH_API_URL`: API base URL (required for the environment path)
//! - `JOBMATCH_API_TIMEOUT_SECS`: Default request timeout in seconds
//! - `JOBMATCH_API_LONG_TIMEOUT_SECS`: Timeout for job sync and resume
//!   matching
//! - `JOBMATCH_STORAGE_BACKEND`: `keychain`, `file` or `memory`
//! - `JOBMATCH_KEYCHAIN_SERVICE`: Keychain service name
//! - `JOBMATCH_STORAGE_PATH`: Credential file for the `file` backend
//! - `JOBMATCH_LOG_FORMAT`: `pretty` or `json`
//! - `JOBMATCH_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./jobmatch.json` or `./jobmatch.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use jobmatch_domain::{
    ApiConfig, Config, JobMatchError, LogFormat, LoggingConfig, Result, StorageBackend,
    StorageConfig,
};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `JobMatchError::Config` if an environment value or a config file
/// that does exist is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// Only `JOBMATCH_API_URL` is required; every other value falls back to its
/// default.
///
/// # Errors
/// Returns `JobMatchError::Config` if the base URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("JOBMATCH_API_URL")?;
    let defaults = Config::default();

    let timeout_secs = env_parse("JOBMATCH_API_TIMEOUT_SECS", defaults.api.timeout_secs)?;
    let long_timeout_secs =
        env_parse("JOBMATCH_API_LONG_TIMEOUT_SECS", defaults.api.long_timeout_secs)?;

    let backend = env_parse::<StorageBackend>("JOBMATCH_STORAGE_BACKEND", defaults.storage.backend)?;
    let keychain_service = std::env::var("JOBMATCH_KEYCHAIN_SERVICE")
        .unwrap_or(defaults.storage.keychain_service);
    let path = std::env::var("JOBMATCH_STORAGE_PATH").ok();

    let format = env_parse::<LogFormat>("JOBMATCH_LOG_FORMAT", defaults.logging.format)?;
    let level = std::env::var("JOBMATCH_LOG_LEVEL").unwrap_or(defaults.logging.level);

    Ok(Config {
        api: ApiConfig { base_url, timeout_secs, long_timeout_secs },
        storage: StorageConfig { backend, keychain_service, path },
        logging: LoggingConfig { format, level },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `JobMatchError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(JobMatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            JobMatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| JobMatchError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| JobMatchError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| JobMatchError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(JobMatchError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "jobmatch.json", "jobmatch.toml"];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `JobMatchError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        JobMatchError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, using `default` when unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| JobMatchError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 8] = [
        "JOBMATCH_API_URL",
        "JOBMATCH_API_TIMEOUT_SECS",
        "JOBMATCH_API_LONG_TIMEOUT_SECS",
        "JOBMATCH_STORAGE_BACKEND",
        "JOBMATCH_KEYCHAIN_SERVICE",
        "JOBMATCH_STORAGE_PATH",
        "JOBMATCH_LOG_FORMAT",
        "JOBMATCH_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("JOBMATCH_API_URL", "https://jobs.example.com/api");
        std::env::set_var("JOBMATCH_API_TIMEOUT_SECS", "10");
        std::env::set_var("JOBMATCH_API_LONG_TIMEOUT_SECS", "90");
        std::env::set_var("JOBMATCH_STORAGE_BACKEND", "file");
        std::env::set_var("JOBMATCH_STORAGE_PATH", "/tmp/creds.json");
        std::env::set_var("JOBMATCH_LOG_FORMAT", "json");
        std::env::set_var("JOBMATCH_LOG_LEVEL", "debug");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.long_timeout_secs, 90);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/creds.json"));
        assert_eq!(config.storage.keychain_service, "JobMatch.auth");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");

        clear_env();
    }

    #[test]
    fn test_load_from_env_only_base_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("JOBMATCH_API_URL", "http://10.0.2.2:8080/api");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.long_timeout_secs, 60);
        assert_eq!(config.storage.backend, StorageBackend::Keychain);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let result = load_from_env();
        assert!(matches!(result, Err(JobMatchError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("JOBMATCH_API_URL", "http://localhost:8080/api");
        std::env::set_var("JOBMATCH_API_TIMEOUT_SECS", "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, JobMatchError::Config(ref m) if m.contains("JOBMATCH_API_TIMEOUT_SECS")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_backend() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("JOBMATCH_API_URL", "http://localhost:8080/api");
        std::env::set_var("JOBMATCH_STORAGE_BACKEND", "cloud");

        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "api": {
                "base_url": "https://jobs.example.com/api",
                "timeout_secs": 15
            },
            "storage": {
                "backend": "memory"
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.api.long_timeout_secs, 60);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging, LoggingConfig::default());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[api]
base_url = "http://127.0.0.1:9000/api"
long_timeout_secs = 120

[storage]
backend = "file"
path = "creds.json"

[logging]
format = "json"
level = "warn"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.long_timeout_secs, 120);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path.as_deref(), Some("creds.json"));
        assert_eq!(config.logging.format, LogFormat::Json);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(JobMatchError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let result = parse_config("api: {}", Path::new("config.yaml"));
        assert!(matches!(result, Err(JobMatchError::Config(ref m)) if m.contains("yaml")));
    }
}
