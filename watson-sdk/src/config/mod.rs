//! Configuration management for service clients
//!
//! This module provides utilities for loading and validating the configuration
//! of Watson service clients, with support for environment variables and the
//! Cloud Foundry `VCAP_SERVICES` document.

use std::collections::HashMap;
use std::env;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ServiceError};
use crate::util::has_bad_first_or_last_char;

/// Default IAM token endpoint
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Username that marks the password as an IAM API key
const APIKEY_USERNAME: &str = "apikey";

/// Prefix of ICP (IBM Cloud Private) API keys, which still use basic auth
const ICP_PREFIX: &str = "icp-";

/// Base trait for configuration providers
pub trait ConfigProvider: Send + Sync {
    /// Get a string configuration value
    fn get_string(&self, key: &str) -> Result<String>;
}

/// Extension methods for configuration providers
pub trait ConfigProviderExt: ConfigProvider {
    /// Get an integer configuration value
    fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get_string(key)?;
        value.trim().parse::<i64>()
            .map_err(|e| ServiceError::configuration(format!("Invalid integer for key {}: {}", key, e)))
    }

    /// Get a boolean configuration value
    fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get_string(key)?;
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(ServiceError::configuration(format!("Invalid boolean value for key {}: {}", key, value))),
        }
    }

    /// Get a string configuration value with a default
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get an integer configuration value with a default
    fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }

    /// Get a boolean configuration value with a default
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProviderExt for T {}

/// Environment variable based configuration provider
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    /// Optional prefix for environment variables
    prefix: Option<String>,

    /// Optional namespace for variables
    namespace: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment variable config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set a namespace for environment variables
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Format a configuration key as an environment variable
    pub(crate) fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        if let Some(ref namespace) = self.namespace {
            env_key.push_str(namespace);
            env_key.push('_');
        }

        // uppercase, anything that is not alphanumeric becomes an underscore
        env_key.push_str(&key.to_uppercase().replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

        env_key
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let env_key = self.format_key(key);

        env::var(&env_key)
            .map_err(|e| {
                match e {
                    env::VarError::NotPresent => {
                        ServiceError::configuration(format!("Environment variable not set: {}", env_key))
                    }
                    env::VarError::NotUnicode(_) => {
                        ServiceError::configuration(format!("Environment variable is not valid unicode: {}", env_key))
                    }
                }
            })
    }
}

/// In-memory config provider for testing or static configuration
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    /// Configuration values
    values: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory config provider with initial values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Set a configuration value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ServiceError::configuration(format!("Configuration key not found: {}", key)))
    }
}

/// Reads bound service credentials out of the Cloud Foundry `VCAP_SERVICES` JSON
///
/// Answers `<service>_url`, `<service>_username`, `<service>_password`,
/// `<service>_apikey` and `<service>_iam_url` from the credentials of the first
/// instance bound under the service's VCAP label.
#[derive(Debug, Clone)]
pub struct VcapConfigProvider {
    /// Name used as the key prefix by callers, e.g. `assistant`
    service_name: String,

    /// Credentials of the first bound instance
    credentials: HashMap<String, String>,
}

impl VcapConfigProvider {
    /// Parse a `VCAP_SERVICES` document for the given service
    pub fn from_json(vcap: &str, service_name: impl Into<String>, label: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(vcap)
            .map_err(|e| ServiceError::configuration(format!("Invalid VCAP_SERVICES document: {}", e)))?;

        let credentials = document
            .get(label)
            .and_then(Value::as_array)
            .and_then(|instances| instances.first())
            .and_then(|instance| instance.get("credentials"))
            .and_then(Value::as_object)
            .map(|creds| {
                creds
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect::<HashMap<_, _>>()
            })
            .ok_or_else(|| {
                ServiceError::configuration(format!("No credentials for '{}' in VCAP_SERVICES", label))
            })?;

        Ok(Self {
            service_name: service_name.into(),
            credentials,
        })
    }

    /// Read `VCAP_SERVICES` from the environment
    pub fn from_env(service_name: impl Into<String>, label: &str) -> Result<Self> {
        let vcap = env::var("VCAP_SERVICES")
            .map_err(|_| ServiceError::configuration("Environment variable not set: VCAP_SERVICES"))?;
        Self::from_json(&vcap, service_name, label)
    }
}

impl ConfigProvider for VcapConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let field = key
            .strip_prefix(self.service_name.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .ok_or_else(|| ServiceError::configuration(format!("Configuration key not found: {}", key)))?;

        self.credentials
            .get(field)
            .cloned()
            .ok_or_else(|| ServiceError::configuration(format!("Configuration key not found: {}", key)))
    }
}

/// A composite config provider that tries multiple providers in order
#[derive(Default)]
pub struct CompositeConfigProvider {
    /// Ordered list of config providers to try
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl CompositeConfigProvider {
    /// Create a new composite config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the chain
    pub fn add_provider(&mut self, provider: impl ConfigProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Add a provider and return self (builder pattern)
    pub fn with_provider(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.add_provider(provider);
        self
    }
}

impl ConfigProvider for CompositeConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        for provider in &self.providers {
            if let Ok(value) = provider.get_string(key) {
                return Ok(value);
            }
        }

        Err(ServiceError::configuration(format!("Configuration key not found in any provider: {}", key)))
    }
}

/// Trait for service-specific configuration
pub trait ServiceConfig: Debug + Send + Sync {
    /// Validate this configuration
    fn validate(&self) -> Result<()>;

    /// Service name
    fn service_name(&self) -> &str;
}

/// Connection and credential settings of one Watson service client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatsonConfig {
    /// Short service name, also the key prefix used when loading (e.g. `assistant`)
    pub service_name: String,

    /// Service endpoint URL
    pub url: String,

    /// API version date for versioned services
    pub version: Option<String>,

    /// Basic auth username
    pub username: Option<String>,

    /// Basic auth password
    pub password: Option<String>,

    /// IAM API key
    pub iam_api_key: Option<String>,

    /// User-managed IAM access token
    pub iam_access_token: Option<String>,

    /// IAM token endpoint override
    pub iam_url: Option<String>,

    /// Timeout in seconds
    pub timeout_seconds: u64,

    /// Accept invalid TLS certificates
    pub disable_ssl_verification: bool,
}

impl WatsonConfig {
    /// Create a configuration for a service endpoint
    pub fn new(service_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            url: url.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            ..Self::default()
        }
    }

    /// Set the service URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the API version date
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Use HTTP Basic authentication
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Use IAM authentication with an API key
    pub fn iam_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.iam_api_key = Some(api_key.into());
        self
    }

    /// Use a user-managed IAM access token
    pub fn iam_access_token(mut self, token: impl Into<String>) -> Self {
        self.iam_access_token = Some(token.into());
        self
    }

    /// Override the IAM token endpoint
    pub fn iam_url(mut self, iam_url: impl Into<String>) -> Self {
        self.iam_url = Some(iam_url.into());
        self
    }

    /// Set the timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Accept invalid TLS certificates
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Load configuration from a config provider
    ///
    /// Keys are `<service>_url`, `<service>_version`, `<service>_username`,
    /// `<service>_password`, `<service>_apikey`, `<service>_iam_access_token`,
    /// `<service>_iam_url`, `<service>_timeout_seconds` and `<service>_disable_ssl`.
    pub fn from_provider<P: ConfigProvider + ?Sized>(
        provider: &P,
        service_name: &str,
        default_url: &str,
    ) -> Result<Self> {
        let key = |field: &str| format!("{}_{}", service_name, field);

        let config = Self {
            service_name: service_name.to_string(),
            url: provider.get_string_or(&key("url"), default_url),
            version: provider.get_string(&key("version")).ok(),
            username: provider.get_string(&key("username")).ok(),
            password: provider.get_string(&key("password")).ok(),
            iam_api_key: provider.get_string(&key("apikey")).ok(),
            iam_access_token: provider.get_string(&key("iam_access_token")).ok(),
            iam_url: provider.get_string(&key("iam_url")).ok(),
            timeout_seconds: provider
                .get_int_or(&key("timeout_seconds"), DEFAULT_TIMEOUT_SECONDS as i64)
                .max(0) as u64,
            disable_ssl_verification: provider.get_bool_or(&key("disable_ssl"), false),
        }
        .normalized();

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the environment, falling back to `VCAP_SERVICES`
    pub fn from_env(service_name: &str, vcap_label: &str, default_url: &str) -> Result<Self> {
        let mut providers = CompositeConfigProvider::new()
            .with_provider(EnvConfigProvider::new());

        match VcapConfigProvider::from_env(service_name, vcap_label) {
            Ok(vcap) => providers.add_provider(vcap),
            Err(e) => log::debug!("VCAP_SERVICES not used for {}: {}", service_name, e),
        }

        Self::from_provider(&providers, service_name, default_url)
    }

    /// Drop blank credentials and turn `username = "apikey"` credentials into an IAM API key
    pub fn normalized(mut self) -> Self {
        for credential in [
            &mut self.username,
            &mut self.password,
            &mut self.iam_api_key,
            &mut self.iam_access_token,
        ] {
            if credential.as_deref().map(is_blank).unwrap_or(false) {
                *credential = None;
            }
        }

        let is_apikey_user = self.username.as_deref() == Some(APIKEY_USERNAME);
        let is_icp = self
            .password
            .as_deref()
            .map(|p| p.starts_with(ICP_PREFIX))
            .unwrap_or(false);

        if is_apikey_user && !is_icp && self.iam_api_key.is_none() {
            self.iam_api_key = self.password.take();
            self.username = None;
        }

        self
    }

    /// True when either a non-blank IAM API key or access token is configured
    pub fn uses_iam(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().map(|v| !is_blank(v)).unwrap_or(false);
        present(&self.iam_api_key) || present(&self.iam_access_token)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ServiceConfig for WatsonConfig {
    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ServiceError::configuration(format!(
                "{} service URL is required",
                self.service_name
            )));
        }

        if has_bad_first_or_last_char(&self.url) {
            return Err(ServiceError::configuration(
                "The service URL shouldn't start or end with curly brackets or quotes. Be sure to remove any {} and \" characters surrounding it",
            ));
        }

        url::Url::parse(&self.url)
            .map_err(|e| ServiceError::configuration(format!("Invalid service URL '{}': {}", self.url, e)))?;

        let credentials = [
            ("username", &self.username),
            ("password", &self.password),
            ("apikey", &self.iam_api_key),
            ("iam_access_token", &self.iam_access_token),
        ];
        for (name, value) in credentials {
            if let Some(value) = value {
                if has_bad_first_or_last_char(value) {
                    return Err(ServiceError::configuration(format!(
                        "The {} shouldn't start or end with curly brackets or quotes. Be sure to remove any {{}} and \" characters surrounding it",
                        name
                    )));
                }
            }
        }

        if self.uses_iam() {
            return Ok(());
        }

        match (&self.username, &self.password) {
            (Some(u), Some(p)) if !is_blank(u) && !is_blank(p) => Ok(()),
            _ => Err(ServiceError::configuration(format!(
                "{} credentials are required: set an IAM API key, an IAM access token, or username and password",
                self.service_name
            ))),
        }
    }

    fn service_name(&self) -> &str {
        &self.service_name
    }
}
