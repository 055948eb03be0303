//! Watson Language Translator v3 client

mod models;
pub use models::*;

use std::sync::Arc;

use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::request::require_non_empty;
use crate::core::{BaseService, DetailedResponse, FileUpload, MultipartField, RequestExecutor, ServiceClient};
use crate::error::{Result, ServiceError};

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "language_translator";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/language-translator/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "language_translator";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2018-05-01";

watson_options! {
    /// Options for `translate`
    ///
    /// Either `model_id` or both `source` and `target` must be set.
    pub struct TranslateOptions {
        required {
            /// Input text, one entry per segment
            text: Vec<String>,
        }
        optional {
            /// Translation model
            model_id: String,
            /// Source language code
            source: String,
            /// Target language code
            target: String,
        }
    }
}

watson_options! {
    /// Options for `identify`
    pub struct IdentifyOptions {
        required {
            /// Text to identify
            text: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `list_identifiable_languages`
    pub struct ListIdentifiableLanguagesOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `list_models`
    pub struct ListModelsOptions {
        required {}
        optional {
            /// Filter by source language
            source: String,
            /// Filter by target language
            target: String,
            /// Only default models (`true`) or only non-default models (`false`)
            default_models: bool,
        }
    }
}

watson_options! {
    /// Options for `create_model`
    ///
    /// At least one of `forced_glossary` and `parallel_corpus` must be set.
    pub struct CreateModelOptions {
        required {
            /// Model to customize
            base_model_id: String,
        }
        optional {
            /// Name of the custom model
            name: String,
            /// TMX glossary whose terms always win
            forced_glossary: FileUpload,
            /// TMX parallel corpus
            parallel_corpus: FileUpload,
        }
    }
}

watson_options! {
    /// Options for `get_model`
    pub struct GetModelOptions {
        required {
            /// Model ID
            model_id: String,
        }
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

/// Watson Language Translator client
pub struct LanguageTranslatorClient {
    base: BaseService,
}

impl LanguageTranslatorClient {
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

    /// Translate text
    pub async fn translate(&self, options: TranslateOptions) -> Result<DetailedResponse<TranslationResult>> {
        let has_pair = options.source.is_some() && options.target.is_some();
        if options.model_id.is_none() && !has_pair {
            return Err(ServiceError::validation(
                "Either model_id or both source and target must be provided",
            ));
        }

        let body = TranslateRequest {
            text: options.text,
            model_id: options.model_id,
            source: options.source,
            target: options.target,
        };

        let request = self
            .base
            .request(Method::POST, "/v3/translate", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Identify the language of a text
    pub async fn identify(&self, options: IdentifyOptions) -> Result<DetailedResponse<IdentifiedLanguages>> {
        let request = self
            .base
            .request(Method::POST, "/v3/identify", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .text("text/plain", options.text);

        self.base.execute(request).await
    }

    /// List the languages `identify` can recognize
    pub async fn list_identifiable_languages(
        &self,
        options: ListIdentifiableLanguagesOptions,
    ) -> Result<DetailedResponse<IdentifiableLanguages>> {
        let request = self
            .base
            .request(Method::GET, "/v3/identifiable_languages", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// List translation models
    pub async fn list_models(&self, options: ListModelsOptions) -> Result<DetailedResponse<TranslationModels>> {
        let request = self
            .base
            .request(Method::GET, "/v3/models", &[])?
            .query_opt("source", options.source)
            .query_opt("target", options.target)
            .query_opt("default", options.default_models)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Customize a base model with a glossary or parallel corpus
    pub async fn create_model(&self, options: CreateModelOptions) -> Result<DetailedResponse<TranslationModel>> {
        require_non_empty("base_model_id", &options.base_model_id)?;
        if options.forced_glossary.is_none() && options.parallel_corpus.is_none() {
            return Err(ServiceError::validation(
                "At least one of forced_glossary or parallel_corpus must be supplied",
            ));
        }

        let mut fields = Vec::new();
        if let Some(glossary) = options.forced_glossary {
            fields.push(MultipartField::file(
                "forced_glossary",
                glossary.with_defaults("glossary.tmx", "application/octet-stream"),
            ));
        }
        if let Some(corpus) = options.parallel_corpus {
            fields.push(MultipartField::file(
                "parallel_corpus",
                corpus.with_defaults("corpus.tmx", "application/octet-stream"),
            ));
        }

        let request = self
            .base
            .request(Method::POST, "/v3/models", &[])?
            .query("base_model_id", &options.base_model_id)
            .query_opt("name", options.name)
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// Get a translation model
    pub async fn get_model(&self, options: GetModelOptions) -> Result<DetailedResponse<TranslationModel>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v3/models/{model_id}",
                &[("model_id", options.model_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a custom translation model
    pub async fn delete_model(&self, options: DeleteModelOptions) -> Result<DetailedResponse<DeleteModelResult>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v3/models/{model_id}",
                &[("model_id", options.model_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }
}

impl ServiceClient for LanguageTranslatorClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
