//! HTTP surface consumed by the pipeline (JSON over HTTPS).
//!
//! [`ApiClient`] owns the `reqwest` client — cookie store enabled, since the
//! storefront authenticates with a session cookie and every request goes out
//! with credentials included. The order and report endpoints are exposed
//! behind the [`OrderApi`] and [`ReportApi`] traits so the workflow layer can
//! run against a mock in tests without touching the network.

/// Wire record definitions
pub mod dto;
/// Order endpoints and the `OrderApi` trait
pub mod orders;
/// Report endpoints and the `ReportApi` trait
pub mod reports;

pub use orders::OrderApi;
pub use reports::ReportApi;

use crate::config::ApiSettings;
use crate::errors::Result;
use std::time::Duration;

/// HTTP client for the storefront API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from the configured settings.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Network`] if the underlying client
    /// cannot be constructed.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins an absolute API path onto the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let settings = ApiSettings {
            base_url: "https://store.example.com/".to_string(),
            request_timeout_secs: 5,
        };
        let client = ApiClient::new(&settings).unwrap();
        assert_eq!(
            client.url("/api/orders"),
            "https://store.example.com/api/orders"
        );
    }
}
