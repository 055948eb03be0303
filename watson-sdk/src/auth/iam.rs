//! IAM token management
//!
//! Exchanges an IBM Cloud API key for a short-lived bearer token, caches it and
//! refreshes it once 80% of its lifetime has elapsed. A user-managed access
//! token, when set, short-circuits all of this and is returned verbatim.

use chrono::Utc;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::config::DEFAULT_IAM_URL;
use crate::error::{ErrorContext, Result, ServiceError};
use crate::util::truncate_string;

/// Grant type for exchanging an API key
pub const REQUEST_TOKEN_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Response type requested from the token endpoint
pub const REQUEST_TOKEN_RESPONSE_TYPE: &str = "cloud_iam";

/// Grant type for refreshing a token
pub const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Client credentials the token endpoint expects (`bx:bx`)
const IAM_CLIENT_AUTHORIZATION: &str = "Basic Yng6Yng=";

/// Fraction of the token lifetime after which it is refreshed
const FRACTION_OF_TTL: f64 = 0.8;

/// Refresh tokens outlive their access token by seven days
const REFRESH_TOKEN_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Token document returned by the IAM endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IamTokenInfo {
    /// Bearer token
    pub access_token: String,

    /// Token used to obtain a new access token
    #[serde(default)]
    pub refresh_token: String,

    /// Usually `Bearer`
    #[serde(default)]
    pub token_type: String,

    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,

    /// Expiry as a unix timestamp
    #[serde(default)]
    pub expiration: i64,
}

impl IamTokenInfo {
    /// True once 80% of the access token lifetime has passed
    pub fn needs_refresh(&self, now: i64) -> bool {
        let refresh_time = self.expiration as f64 - self.expires_in as f64 * (1.0 - FRACTION_OF_TTL);
        refresh_time < now as f64
    }

    /// True when the refresh token can no longer be used
    pub fn is_refresh_token_expired(&self, now: i64) -> bool {
        self.refresh_token.is_empty() || self.expiration + REFRESH_TOKEN_LIFETIME_SECS < now
    }
}

#[derive(Debug, Default)]
struct IamState {
    api_key: Option<String>,
    user_access_token: Option<String>,
    token_info: Option<IamTokenInfo>,
}

/// Fetches, caches and refreshes IAM bearer tokens
#[derive(Debug)]
pub struct IamTokenManager {
    /// HTTP client used for token requests
    http_client: Client,

    /// Token endpoint
    iam_url: String,

    /// Credentials and cached token
    state: RwLock<IamState>,

    /// Serializes token fetches so concurrent callers trigger a single request
    fetch_guard: Mutex<()>,
}

impl IamTokenManager {
    /// Create a token manager for the given endpoint (`None` uses the public IAM endpoint)
    pub fn new(http_client: Client, iam_url: Option<String>) -> Self {
        Self {
            http_client,
            iam_url: iam_url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
            state: RwLock::new(IamState::default()),
            fetch_guard: Mutex::new(()),
        }
    }

    /// Set the API key at construction time
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.state.get_mut().api_key = Some(api_key.into());
        self
    }

    /// Set a user-managed access token at construction time
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.state.get_mut().user_access_token = Some(token.into());
        self
    }

    /// The token endpoint in use
    pub fn iam_url(&self) -> &str {
        &self.iam_url
    }

    /// Replace the user-managed access token
    ///
    /// The SDK never refreshes a user-managed token; callers own its lifetime.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        self.state.write().await.user_access_token = Some(token.into());
    }

    /// Replace the API key and drop any token obtained with the previous key
    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        let mut state = self.state.write().await;
        state.api_key = Some(api_key.into());
        state.token_info = None;
    }

    /// Snapshot of the cached token document
    pub async fn token_info(&self) -> Option<IamTokenInfo> {
        self.state.read().await.token_info.clone()
    }

    pub(crate) async fn set_token_info(&self, info: IamTokenInfo) {
        self.state.write().await.token_info = Some(info);
    }

    /// Return a usable access token, fetching or refreshing it when needed
    #[tracing::instrument(skip(self), fields(iam_url = %self.iam_url))]
    pub async fn get_token(&self) -> Result<String> {
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let _guard = self.fetch_guard.lock().await;

        // another task may have fetched while we waited
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let (api_key, current) = {
            let state = self.state.read().await;
            (state.api_key.clone(), state.token_info.clone())
        };

        let now = Utc::now().timestamp();
        let info = match current {
            Some(info) if !info.is_refresh_token_expired(now) => {
                self.refresh_token(&info.refresh_token).await?
            }
            _ => {
                let api_key = api_key.ok_or_else(|| {
                    ServiceError::authentication("IAM API key or access token must be set")
                })?;
                self.request_token(&api_key).await?
            }
        };

        let access_token = info.access_token.clone();
        self.state.write().await.token_info = Some(info);

        Ok(access_token)
    }

    /// Exchange an API key for a new token
    pub async fn request_token(&self, api_key: &str) -> Result<IamTokenInfo> {
        debug!("Requesting new IAM token from {}", self.iam_url);
        self.post_token_form(&[
            ("grant_type", REQUEST_TOKEN_GRANT_TYPE),
            ("apikey", api_key),
            ("response_type", REQUEST_TOKEN_RESPONSE_TYPE),
        ])
        .await
    }

    /// Use a refresh token to obtain a new access token
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<IamTokenInfo> {
        debug!("Refreshing IAM token at {}", self.iam_url);
        self.post_token_form(&[
            ("grant_type", REFRESH_TOKEN_GRANT_TYPE),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn cached_token(&self) -> Option<String> {
        let state = self.state.read().await;

        if let Some(ref token) = state.user_access_token {
            return Some(token.clone());
        }

        let now = Utc::now().timestamp();
        state
            .token_info
            .as_ref()
            .filter(|info| !info.needs_refresh(now))
            .map(|info| info.access_token.clone())
    }

    async fn post_token_form(&self, form: &[(&str, &str)]) -> Result<IamTokenInfo> {
        let response = self
            .http_client
            .post(&self.iam_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, IAM_CLIENT_AUTHORIZATION)
            .form(form)
            .send()
            .await
            .map_err(|e| ServiceError::authentication(format!("Failed to fetch IAM token: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("Failed to read error response: {}", e),
            };
            let context = ErrorContext::for_service("iam")
                .endpoint(self.iam_url.clone())
                .status_code(status.as_u16())
                .headers(headers)
                .body(body.clone());

            return Err(ServiceError::authentication(format!(
                "IAM token request failed with status {}: {}",
                status,
                truncate_string(&body, 512)
            ))
            .with_context(context));
        }

        let info = response
            .json::<IamTokenInfo>()
            .await
            .map_err(|e| ServiceError::parsing(format!("Failed to parse IAM token: {}", e)))?;

        debug!("IAM token fetched, expires in {} seconds", info.expires_in);

        Ok(info)
    }
}
