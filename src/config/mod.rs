//! Configuration management for the storefront API connection.
//!
//! Settings load from `config.toml`; the `FSTORE_API_BASE_URL` environment
//! variable (usually via `.env`) overrides the file entirely so deployments
//! can point the console at another backend without editing files.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const BASE_URL_ENV: &str = "FSTORE_API_BASE_URL";

const fn default_request_timeout_secs() -> u64 {
    30
}

/// Connection settings for the storefront API.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the backend, e.g. `https://fstore.example.com`
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Configuration structure representing the entire config.toml file.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// API connection settings
    pub api: ApiSettings,
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration: environment override first, then
/// `./config.toml`.
///
/// # Errors
/// Returns an error when neither the environment variable nor a readable
/// config file provides a base URL.
pub fn load_app_configuration() -> Result<AppConfig> {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        return Ok(AppConfig {
            api: ApiSettings {
                base_url,
                request_timeout_secs: default_request_timeout_secs(),
            },
        });
    }
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_api_settings() {
        let toml_str = r#"
            [api]
            base_url = "https://fstore.example.com"
            request_timeout_secs = 10
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://fstore.example.com");
        assert_eq!(config.api.request_timeout_secs, 10);
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let toml_str = r#"
            [api]
            base_url = "https://fstore.example.com"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_base_url_is_a_config_error() {
        let toml_str = "[api]\n";
        let parsed: std::result::Result<AppConfig, _> = toml::from_str(toml_str);
        assert!(parsed.is_err());
    }
}
