//! HTTP transport for the Skolmaten listing API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use tracing::instrument;

use meny_core::ports::PortError;

/// Default base URL of the Skolmaten API.
pub const DEFAULT_BASE_URL: &str = "https://skolmaten.se/api/4";

const DEFAULT_USER_AGENT: &str = concat!("meny/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkolmatenConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SkolmatenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SkolmatenConfig {
    /// Set a custom base URL (for testing or a mirror).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait]
/// Fetches raw response bodies for relative resource paths.
///
/// Implementations report every network or status failure as an error and
/// never retry; decoding the body is left to the caller.
pub trait Transport: Send + Sync {
    /// Fetch the body behind `path`, e.g. `/districts?province=1`.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::ProviderUnavailable`] when the request fails or the
    /// provider answers with a non-success status.
    async fn fetch(&self, path: &str) -> Result<String, PortError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport and its HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &SkolmatenConfig) -> Result<Self, PortError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| PortError::Internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(client, config.base_url.as_str()))
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(level = "debug", skip(self), err)]
    async fn fetch(&self, path: &str) -> Result<String, PortError> {
        let unavailable = |source: ReqwestError| PortError::ProviderUnavailable {
            path: path.to_owned(),
            source,
        };

        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .text()
            .await
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SkolmatenConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(
            config.user_agent.starts_with("meny/"),
            "user agent names the crate"
        );
    }

    #[test]
    fn config_setters_override_defaults() {
        let config = SkolmatenConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout_secs(5)
            .with_user_agent("test-agent");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let transport = HttpTransport::with_client(Client::new(), "http://localhost:8080/api/");
        assert_eq!(transport.base_url(), "http://localhost:8080/api");
    }
}
