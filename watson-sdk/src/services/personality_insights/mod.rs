//! Watson Personality Insights v3 client
//!
//! The profile input is sent as JSON content items, plain text or HTML;
//! `ProfileContent` selects the content type.

mod models;
pub use models::*;

use std::sync::Arc;

use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::{BaseService, DetailedResponse, RequestExecutor, ServiceClient, ServiceRequest};
use crate::error::Result;

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "personality_insights";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/personality-insights/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "personality_insights";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2017-10-13";

watson_options! {
    /// Options for `profile` and `profile_as_csv`
    pub struct ProfileOptions {
        required {
            /// Content to analyze
            content: ProfileContent,
        }
        optional {
            /// Language of the input (`Content-Language`)
            content_language: String,
            /// Language of the response (`Accept-Language`)
            accept_language: String,
            /// Include raw scores
            raw_scores: bool,
            /// Include consumption preferences
            consumption_preferences: bool,
            /// Include a header row; only used by `profile_as_csv`
            csv_headers: bool,
        }
    }
}

/// Watson Personality Insights client
pub struct PersonalityInsightsClient {
    base: BaseService,
}

impl PersonalityInsightsClient {
    /// Create a client from a configuration; a version date is required
    pub fn new(config: WatsonConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config, true)?,
        })
    }

    /// Create a client that authenticates through a caller-supplied authenticator
    pub fn with_authenticator(config: WatsonConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            base: BaseService::with_authenticator(config, true, authenticator)?,
        })
    }

    /// Create a client from environment variables or `VCAP_SERVICES`
    pub fn from_env() -> Result<Self> {
        let mut config = WatsonConfig::from_env(SERVICE_NAME, VCAP_LABEL, DEFAULT_URL)?;
        if config.version.is_none() {
            config.version = Some(DEFAULT_VERSION.to_string());
        }
        Self::new(config)
    }

    /// Configuration pointing at the default endpoint
    pub fn default_config(version: &str) -> WatsonConfig {
        WatsonConfig::new(SERVICE_NAME, DEFAULT_URL).version(version)
    }

    /// Generate a personality profile
    pub async fn profile(&self, options: ProfileOptions) -> Result<DetailedResponse<Profile>> {
        let request = self.profile_request(options, "application/json", false)?;
        self.base.execute(request).await
    }

    /// Generate a personality profile as CSV
    pub async fn profile_as_csv(&self, options: ProfileOptions) -> Result<DetailedResponse<Vec<u8>>> {
        let request = self.profile_request(options, "text/csv", true)?;
        self.base.execute_bytes(request).await
    }

    fn profile_request(&self, options: ProfileOptions, accept: &str, csv: bool) -> Result<ServiceRequest> {
        let mut request = self
            .base
            .request(Method::POST, "/v3/profile", &[])?
            .query_opt("raw_scores", options.raw_scores)
            .query_opt("consumption_preferences", options.consumption_preferences);
        if csv {
            request = request.query_opt("csv_headers", options.csv_headers);
        }

        let request = request
            .accept(accept)
            .header_opt("Content-Language", options.content_language.as_ref())
            .header_opt("Accept-Language", options.accept_language.as_ref())
            .headers(&options.headers);

        match options.content {
            ProfileContent::Json(content) => request.json(&content),
            ProfileContent::Text(text) => Ok(request.text("text/plain", text)),
            ProfileContent::Html(html) => Ok(request.text("text/html", html)),
        }
    }
}

impl ServiceClient for PersonalityInsightsClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
