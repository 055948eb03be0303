//! Watson Natural Language Understanding v1 client

mod models;
pub use models::*;

use std::sync::Arc;

use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::{BaseService, DetailedResponse, RequestExecutor, ServiceClient};
use crate::error::{Result, ServiceError};

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "natural_language_understanding";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/natural-language-understanding/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "natural-language-understanding";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2018-03-16";

watson_options! {
    /// Options for `analyze`
    ///
    /// Exactly one of `text`, `html` and `url` must be set.
    pub struct AnalyzeOptions {
        required {
            /// Features to run
            features: Features,
        }
        optional {
            /// Plain text to analyze
            text: String,
            /// HTML to analyze
            html: String,
            /// Public web page to analyze
            url: String,
            /// Remove website elements such as ads
            clean: bool,
            /// XPath query selecting the text to analyze
            xpath: String,
            /// Analyze the raw page if cleaning fails
            fallback_to_raw: bool,
            /// Return the analyzed text
            return_analyzed_text: bool,
            /// Language code overriding detection
            language: String,
            /// Maximum number of characters analyzed
            limit_text_characters: i64,
        }
    }
}

watson_options! {
    /// Options for `list_models`
    pub struct ListModelsOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `delete_model`
    pub struct DeleteModelOptions {
        required {
            /// Model ID
            model_id: String,
        }
        optional {}
    }
}

/// Watson Natural Language Understanding client
pub struct NaturalLanguageUnderstandingClient {
    base: BaseService,
}

impl NaturalLanguageUnderstandingClient {
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

    /// Analyze text, HTML or a public web page
    pub async fn analyze(&self, options: AnalyzeOptions) -> Result<DetailedResponse<AnalysisResults>> {
        let sources = [&options.text, &options.html, &options.url]
            .iter()
            .filter(|source| source.is_some())
            .count();
        if sources != 1 {
            return Err(ServiceError::validation("Exactly one of text, html or url must be provided"));
        }
        if options.features.is_empty() {
            return Err(ServiceError::validation("At least one feature must be requested"));
        }

        let body = AnalyzeRequest {
            text: options.text,
            html: options.html,
            url: options.url,
            features: options.features,
            clean: options.clean,
            xpath: options.xpath,
            fallback_to_raw: options.fallback_to_raw,
            return_analyzed_text: options.return_analyzed_text,
            language: options.language,
            limit_text_characters: options.limit_text_characters,
        };

        let request = self
            .base
            .request(Method::POST, "/v1/analyze", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List custom models deployed to the service instance
    pub async fn list_models(&self, options: ListModelsOptions) -> Result<DetailedResponse<ListModelsResults>> {
        let request = self
            .base
            .request(Method::GET, "/v1/models", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a custom model
    pub async fn delete_model(&self, options: DeleteModelOptions) -> Result<DetailedResponse<DeleteModelResults>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/models/{model_id}",
                &[("model_id", options.model_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }
}

impl ServiceClient for NaturalLanguageUnderstandingClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
