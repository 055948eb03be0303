//! Client builder implementation
//!
//! Builds the `reqwest::Client` shared by a service client and its IAM token
//! manager.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as ReqwestClient;

use crate::config::{WatsonConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{Result, ServiceError};
use crate::services::UserAgent;

/// HTTP client builder for Watson service clients
pub struct ClientBuilder {
    /// Custom headers to include with all requests
    custom_headers: HashMap<String, String>,

    /// Request timeout
    timeout: Option<Duration>,

    /// User agent
    user_agent: Option<String>,

    /// Enable response decompression
    compression: bool,

    /// Accept invalid TLS certificates
    disable_ssl_verification: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            custom_headers: HashMap::new(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            user_agent: Some(UserAgent::default().to_string()),
            compression: true,
            disable_ssl_verification: false,
        }
    }
}

impl ClientBuilder {
    /// Create a new client builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with a service configuration
    pub fn from_config(config: &WatsonConfig) -> Self {
        let mut builder = Self::new().disable_ssl_verification(config.disable_ssl_verification);
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        builder
    }

    /// Add a custom header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable or disable compression
    pub fn compression(mut self, enabled: bool) -> Self {
        self.compression = enabled;
        self
    }

    /// Accept invalid TLS certificates
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Build an HTTP client with the configured settings
    pub fn build_http_client(&self) -> Result<ReqwestClient> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder = builder.gzip(self.compression);

        if self.disable_ssl_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder = builder.default_headers(build_header_map(&self.custom_headers)?);

        builder
            .build()
            .map_err(|e| ServiceError::configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

/// Convert name/value pairs into a header map
pub fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let header_name = HeaderName::from_str(key)
            .map_err(|e| ServiceError::configuration(format!("Invalid header name: {}", e)))?;

        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ServiceError::configuration(format!("Invalid header value: {}", e)))?;

        map.insert(header_name, header_value);
    }
    Ok(map)
}
