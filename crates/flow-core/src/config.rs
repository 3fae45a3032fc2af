//! Client configuration for the Flow gateway.

use std::fmt;

use thiserror::Error;

/// Errors raised while validating a [`FlowConfig`].
///
/// All of these are fatal and surface before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base URL must not be empty")]
    EmptyBaseUrl,

    #[error("Base URL must start with http:// or https://: '{0}'")]
    InvalidBaseUrl(String),

    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error("Secret key must not be empty")]
    EmptySecret,
}

/// Immutable configuration for one gateway client.
///
/// Holds the base endpoint URL, the public API key and the private signing
/// secret. Constructed once, never mutated; a single value can back any
/// number of concurrent requests. Multiple independently configured clients
/// can coexist in one process.
///
/// # Example
///
/// ```rust
/// use flow_core::FlowConfig;
///
/// let config = FlowConfig::new(
///     "https://sandbox.flow.cl/api",
///     "my-api-key",
///     "my-secret",
/// );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlowConfig {
    base_url: String,
    api_key: String,
    secret: String,
}

impl FlowConfig {
    /// Create a new configuration.
    ///
    /// A trailing slash on `base_url` is trimmed so endpoint paths can
    /// always be joined with a single `/`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL, API key or secret is missing
    /// or malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(())
    }

    /// Base endpoint URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Private signing secret. Never transmitted, never logged.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Manual impl so the secret never leaks through debug logging.
impl fmt::Debug for FlowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = FlowConfig::new("https://api.example.com/", "key", "secret");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_valid_config() {
        let config = FlowConfig::new("https://api.example.com", "key", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_base_url() {
        let config = FlowConfig::new("", "key", "secret");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBaseUrl)));
    }

    #[test]
    fn test_invalid_scheme() {
        let config = FlowConfig::new("ftp://api.example.com", "key", "secret");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_empty_api_key() {
        let config = FlowConfig::new("https://api.example.com", "", "secret");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_empty_secret() {
        let config = FlowConfig::new("https://api.example.com", "key", "");
        assert!(matches!(config.validate(), Err(ConfigError::EmptySecret)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = FlowConfig::new("https://api.example.com", "key", "super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
