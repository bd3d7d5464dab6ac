use std::{env, time::Duration};
use thiserror::Error;

/// Base URL used when `IMGFLIP_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.imgflip.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment variable format for {0}: {1}")]
    InvalidVar(String, String),
}

#[derive(Clone, Debug)] // Clone needed if passed around, Debug for logging
pub struct Config {
    pub base_url: String,
    /// Per-request timeout for the HTTP client. `None` means the call may
    /// wait on the transport indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors, relies on env vars otherwise)
        dotenvy::dotenv().ok();

        let base_url = base_url_from(env::var("IMGFLIP_BASE_URL").ok());
        let request_timeout = timeout_from(env::var("HTTP_TIMEOUT_SECS").ok())?;

        Ok(Config {
            base_url,
            request_timeout,
        })
    }
}

fn base_url_from(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn timeout_from(raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    match raw {
        Some(value) => {
            let secs: u64 = value
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidVar("HTTP_TIMEOUT_SECS".into(), e.to_string())
                })?;
            Ok(Some(Duration::from_secs(secs)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_imgflip() {
        assert_eq!(base_url_from(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_honors_override() {
        assert_eq!(
            base_url_from(Some("http://localhost:8080".to_string())),
            "http://localhost:8080"
        );
    }

    #[test]
    fn timeout_parses_whole_seconds() {
        let timeout = timeout_from(Some("30".to_string())).unwrap();
        assert_eq!(timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn absent_timeout_means_no_limit() {
        assert_eq!(timeout_from(None).unwrap(), None);
    }

    #[test]
    fn malformed_timeout_is_a_config_error() {
        let err = timeout_from(Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar(ref var, _) if var == "HTTP_TIMEOUT_SECS"));
    }
}
