//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::time::Duration;

use crate::error::ClientError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default header name carrying the API credential.
pub const DEFAULT_AUTH_HEADER: &str = "Authorization";

/// Default page requested for listings when the caller sets none.
pub const DEFAULT_PAGE: u64 = 0;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,

    /// API credential, sent verbatim as the value of `auth_header` on
    /// every request.
    pub api_key: String,

    /// Name of the header carrying the credential.
    pub auth_header: String,

    /// Request timeout, passed through to the transport.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Page sent for listings requests when the caller sets none.
    pub default_page: u64,
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL and credential.
    ///
    /// A trailing slash on the base URL is stripped so paths can always be
    /// appended with a leading `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: api_key.into(),
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("bitbond-sdk/{}", env!("CARGO_PKG_VERSION")),
            default_page: DEFAULT_PAGE,
        }
    }

    /// Sets the header name carrying the credential.
    #[must_use]
    pub fn with_auth_header(mut self, auth_header: impl Into<String>) -> Self {
        self.auth_header = auth_header.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the default listings page.
    #[must_use]
    pub fn with_default_page(mut self, default_page: u64) -> Self {
        self.default_page = default_page;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            return Err(ClientError::InvalidConfig(
                "api_key cannot be empty".to_string(),
            ));
        }

        if self.auth_header.is_empty() {
            return Err(ClientError::InvalidConfig(
                "auth_header cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("https://api.example.com", "secret");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.auth_header, DEFAULT_AUTH_HEADER);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.default_page, DEFAULT_PAGE);
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/", "secret");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.example.com", "secret")
            .with_auth_header("X-Api-Key")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("my-app/1.0")
            .with_default_page(1);

        assert_eq!(config.auth_header, "X-Api-Key");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.default_page, 1);
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::new("https://api.example.com", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_url() {
        let config = ClientConfig::new("", "secret");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("ftp://api.example.com", "secret");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_empty_api_key() {
        let config = ClientConfig::new("https://api.example.com", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_empty_auth_header() {
        let config = ClientConfig::new("https://api.example.com", "secret").with_auth_header("");
        assert!(config.validate().is_err());
    }
}
