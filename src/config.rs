//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::options::RequestOption;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ONE_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ONE_API_BASE_URL";

/// A secret string type for sensitive data like API keys.
/// Prevents accidental logging or display of secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret string.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Configuration for [`OneApiClient`](crate::OneApiClient).
///
/// `timeout` and `proxy` only shape the default HTTP client and are ignored
/// when `http_client` is set.
#[derive(Clone)]
pub struct ClientConfig {
    /// HTTP client to send requests with
    pub http_client: Option<reqwest::Client>,

    /// API root, e.g. `https://the-one-api.dev/v2`
    pub base_url: String,

    /// API key; when present every request is authenticated
    pub api_key: Option<SecretString>,

    /// Options applied to every request before per-call options
    pub persistent_options: Vec<RequestOption>,

    /// Request timeout for the default HTTP client
    pub timeout: Option<Duration>,

    /// HTTP proxy URL for the default HTTP client
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            persistent_options: Vec::new(),
            timeout: None,
            proxy: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("http_client", &self.http_client.as_ref().map(|_| "<custom>"))
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("persistent_options", &self.persistent_options.len())
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load the API key and base URL from `ONE_API_KEY` / `ONE_API_BASE_URL`.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.api_key = non_empty(API_KEY_ENV).map(SecretString::new);
        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url cannot be empty".to_string()));
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base_url: {}", e)))?;

        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Use an existing HTTP client instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.config.http_client = Some(client);
        self
    }

    /// Add one persistent option.
    pub fn persistent_option(mut self, option: RequestOption) -> Self {
        self.config.persistent_options.push(option);
        self
    }

    /// Add several persistent options, in order.
    pub fn persistent_options(mut self, options: impl IntoIterator<Item = RequestOption>) -> Self {
        self.config.persistent_options.extend(options);
        self
    }

    /// Set the request timeout of the default HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Route the default HTTP client through `proxy`.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
