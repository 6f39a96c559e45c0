//! Client configuration.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default interval between two scheduled polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default per-request timeout against the remote store
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building the configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint is not a valid URL
    #[error("invalid endpoint URL '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    /// Only http and https endpoints are supported
    #[error("unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// A zero interval would poll in a busy loop
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    /// A zero timeout would fail every request
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Settings for one chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Remote store endpoint, used for both GET and POST
    pub endpoint: Url,
    /// Interval between scheduled polls
    pub poll_interval: Duration,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default intervals for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEndpoint` or `ConfigError::UnsupportedScheme`
    /// if the endpoint cannot be used
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint.trim()).map_err(|e| ConfigError::InvalidEndpoint {
            value: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            endpoint: url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        self.poll_interval = interval;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroRequestTimeout);
        }
        self.request_timeout = timeout;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        // テスト項目: エンドポイントだけ指定するとデフォルトの間隔になる
        // when (操作):
        let config = ClientConfig::new("https://chat.example.com/api/messages").unwrap();

        // then (期待する結果):
        assert_eq!(config.endpoint.as_str(), "https://chat.example.com/api/messages");
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_endpoint_fails() {
        // テスト項目: URL として解釈できないエンドポイントは拒否される
        let result = ClientConfig::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_non_http_scheme_fails() {
        // テスト項目: http / https 以外のスキームは拒否される
        let result = ClientConfig::new("ftp://example.com/messages");
        assert_eq!(result, Err(ConfigError::UnsupportedScheme("ftp".to_string())));
    }

    #[test]
    fn test_zero_durations_are_rejected() {
        // テスト項目: 0 の間隔・タイムアウトは設定できない
        let config = ClientConfig::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            config.clone().with_poll_interval(Duration::ZERO),
            Err(ConfigError::ZeroPollInterval)
        );
        assert_eq!(
            config.clone().with_request_timeout(Duration::ZERO),
            Err(ConfigError::ZeroRequestTimeout)
        );
        let tuned = config.with_poll_interval(Duration::from_millis(500)).unwrap();
        assert_eq!(tuned.poll_interval, Duration::from_millis(500));
    }
}
