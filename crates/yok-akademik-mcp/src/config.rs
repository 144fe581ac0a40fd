//! Configuration for the YOK Akademik MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Default base URL for the YOK Akademik backend.
    pub const BASE_URL: &str = "http://91.99.144.40:3002";

    /// Request timeout (the collaborator crawl can take minutes).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(120_000);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections per host.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the YOK Akademik backend.
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration.
    ///
    /// `base_url` falls back to the default backend host when `None`;
    /// a trailing slash is trimmed so endpoint paths join cleanly.
    #[must_use]
    pub fn new(base_url: Option<String>, timeout_ms: Option<u64>) -> Self {
        let base_url = base_url.unwrap_or_else(|| api::BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: timeout_ms.map_or(api::REQUEST_TIMEOUT, Duration::from_millis),
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `YOK_BASE_URL` and `YOK_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns error if `YOK_TIMEOUT_MS` is set but not a valid integer.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("YOK_BASE_URL").ok();
        let timeout_ms = match std::env::var("YOK_TIMEOUT_MS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
                anyhow::anyhow!("invalid YOK_TIMEOUT_MS value '{raw}': {e}")
            })?),
            Err(_) => None,
        };
        Ok(Self::new(base_url, timeout_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, api::BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_millis(120_000));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new(Some("http://localhost:9999".to_string()), Some(5000));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = Config::new(Some("http://localhost:9999/".to_string()), None);
        assert_eq!(config.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:4000");
        assert_eq!(config.base_url, "http://127.0.0.1:4000");
        assert!(config.request_timeout < api::REQUEST_TIMEOUT);
    }
}
