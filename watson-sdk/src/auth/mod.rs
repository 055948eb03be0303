//! Request authentication
//!
//! Every Watson call is authenticated either with HTTP Basic credentials or
//! with an IAM bearer token. The `Authenticator` trait is the seam the request
//! pipeline talks to; it is applied last, after every other header is set.

pub mod iam;
pub use iam::{IamTokenInfo, IamTokenManager};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use crate::config::WatsonConfig;
use crate::error::{Result, ServiceError};

/// Kind of credentials a client authenticates with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// HTTP Basic username and password
    Basic,
    /// IAM bearer token obtained from an API key or supplied by the caller
    Iam,
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthType::Basic => write!(f, "basic"),
            AuthType::Iam => write!(f, "iam"),
        }
    }
}

/// Adds credentials to an outgoing request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Kind of credentials applied
    fn auth_type(&self) -> AuthType;

    /// Set the `Authorization` header
    async fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// HTTP Basic authentication
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Create a basic authenticator
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Basic
    }

    async fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(AUTHORIZATION, sensitive_header(&self.header_value())?);
        Ok(())
    }
}

/// IAM bearer token authentication
pub struct IamAuthenticator {
    token_manager: Arc<IamTokenManager>,
}

impl IamAuthenticator {
    /// Create an authenticator backed by a token manager
    pub fn new(token_manager: Arc<IamTokenManager>) -> Self {
        Self { token_manager }
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Iam
    }

    async fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()> {
        let token = self.token_manager.get_token().await?;
        headers.insert(AUTHORIZATION, sensitive_header(&format!("Bearer {}", token))?);
        Ok(())
    }
}

fn sensitive_header(value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| ServiceError::authentication("Credentials contain characters not allowed in an HTTP header"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Pick the authenticator for a validated configuration
///
/// IAM wins when an API key or access token is configured; the token manager is
/// returned alongside so the client can swap tokens at runtime.
pub fn authenticator_from_config(
    config: &WatsonConfig,
    http_client: Client,
) -> Result<(Arc<dyn Authenticator>, Option<Arc<IamTokenManager>>)> {
    if config.uses_iam() {
        let mut manager = IamTokenManager::new(http_client, config.iam_url.clone());
        if let Some(ref api_key) = config.iam_api_key {
            manager = manager.with_api_key(api_key.clone());
        }
        if let Some(ref token) = config.iam_access_token {
            manager = manager.with_access_token(token.clone());
        }

        let manager = Arc::new(manager);
        return Ok((Arc::new(IamAuthenticator::new(manager.clone())), Some(manager)));
    }

    match (&config.username, &config.password) {
        (Some(username), Some(password)) => Ok((
            Arc::new(BasicAuthenticator::new(username.clone(), password.clone())),
            None,
        )),
        _ => Err(ServiceError::configuration(format!(
            "{} has no usable credentials",
            config.service_name
        ))),
    }
}
