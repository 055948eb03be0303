//! Watson Tone Analyzer v3 client

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
pub const SERVICE_NAME: &str = "tone_analyzer";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/tone-analyzer/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "tone_analyzer";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2017-09-21";

watson_options! {
    /// Options for `tone`
    pub struct ToneOptions {
        required {
            /// Content to analyze
            content: ToneContent,
        }
        optional {
            /// Include sentence-level analysis
            sentences: bool,
            /// Tone categories to return, for the 2016-05-19 version
            tones: Vec<String>,
            /// Language of the input (`Content-Language`)
            content_language: String,
            /// Language of the response (`Accept-Language`)
            accept_language: String,
        }
    }
}

watson_options! {
    /// Options for `tone_chat`
    pub struct ToneChatOptions {
        required {
            /// Utterances to analyze
            utterances: Vec<Utterance>,
        }
        optional {
            /// Language of the input (`Content-Language`)
            content_language: String,
            /// Language of the response (`Accept-Language`)
            accept_language: String,
        }
    }
}

/// Watson Tone Analyzer client
pub struct ToneAnalyzerClient {
    base: BaseService,
}

impl ToneAnalyzerClient {
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

    /// Analyze the tone of a document
    pub async fn tone(&self, options: ToneOptions) -> Result<DetailedResponse<ToneAnalysis>> {
        let request = self
            .base
            .request(Method::POST, "/v3/tone", &[])?
            .query_opt("sentences", options.sentences)
            .query_list("tones", options.tones.as_ref())
            .accept("application/json")
            .header_opt("Content-Language", options.content_language.as_ref())
            .header_opt("Accept-Language", options.accept_language.as_ref())
            .headers(&options.headers);

        let request = match options.content {
            ToneContent::Json(input) => request.json(&input)?,
            ToneContent::Text(text) => request.text("text/plain", text),
            ToneContent::Html(html) => request.text("text/html", html),
        };

        self.base.execute(request).await
    }

    /// Analyze customer-engagement tones of a conversation
    pub async fn tone_chat(&self, options: ToneChatOptions) -> Result<DetailedResponse<UtteranceAnalyses>> {
        if options.utterances.is_empty() {
            return Err(ServiceError::validation("utterances must be provided"));
        }

        let body = ToneChatInput {
            utterances: options.utterances,
        };

        let request = self
            .base
            .request(Method::POST, "/v3/tone_chat", &[])?
            .accept("application/json")
            .header_opt("Content-Language", options.content_language.as_ref())
            .header_opt("Accept-Language", options.accept_language.as_ref())
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }
}

impl ServiceClient for ToneAnalyzerClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
