//! Watson Speech to Text v1 client
//!
//! Audio is sent as the raw request body with the caller's content type
//! (`audio/wav`, `audio/flac`, `audio/ogg;codecs=opus`, ...). Only the HTTP
//! interface is covered; streaming recognition over WebSocket is not.

mod models;
pub use models::*;

use std::sync::Arc;

use log::debug;
use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::request::require_non_empty;
use crate::core::{BaseService, DetailedResponse, RequestExecutor, ServiceClient};
use crate::error::{Result, ServiceError};

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "speech_to_text";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://stream.watsonplatform.net/speech-to-text/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "speech_to_text";

watson_options! {
    /// Options for `list_models`
    pub struct ListModelsOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `get_model`
    pub struct GetModelOptions {
        required {
            /// Model name
            model_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `recognize`
    pub struct RecognizeOptions {
        required {
            /// Audio bytes
            audio: Vec<u8>,
            /// MIME type of the audio
            content_type: String,
        }
        optional {
            /// Recognition model
            model: String,
            /// Custom language model
            customization_id: String,
            /// Custom acoustic model
            acoustic_customization_id: String,
            /// Version of the base model
            base_model_version: String,
            /// Weight of the custom language model
            customization_weight: f64,
            /// Seconds of silence after which the connection closes
            inactivity_timeout: i64,
            /// Keywords to spot
            keywords: Vec<String>,
            /// Minimum confidence of a keyword match
            keywords_threshold: f64,
            /// Maximum number of alternative transcripts
            max_alternatives: i64,
            /// Minimum confidence of a word alternative
            word_alternatives_threshold: f64,
            /// Include per-word confidence
            word_confidence: bool,
            /// Include per-word timestamps
            timestamps: bool,
            /// Censor profanity
            profanity_filter: bool,
            /// Convert dates, times and numbers
            smart_formatting: bool,
            /// Identify speakers
            speaker_labels: bool,
        }
    }
}

watson_options! {
    /// Options for `register_callback`
    pub struct RegisterCallbackOptions {
        required {
            /// URL to allowlist for job notifications
            callback_url: String,
        }
        optional {
            /// Secret used to sign notifications
            user_secret: String,
        }
    }
}

watson_options! {
    /// Options for `create_job`
    pub struct CreateJobOptions {
        required {
            /// Audio bytes
            audio: Vec<u8>,
            /// MIME type of the audio
            content_type: String,
        }
        optional {
            /// Registered callback URL
            callback_url: String,
            /// Comma-separated events to notify
            events: String,
            /// Token echoed to the callback
            user_token: String,
            /// Minutes the results are kept
            results_ttl: i64,
            /// Recognition model
            model: String,
            /// Custom language model
            customization_id: String,
            /// Custom acoustic model
            acoustic_customization_id: String,
            /// Version of the base model
            base_model_version: String,
            /// Weight of the custom language model
            customization_weight: f64,
            /// Seconds of silence after which recognition stops
            inactivity_timeout: i64,
            /// Keywords to spot
            keywords: Vec<String>,
            /// Minimum confidence of a keyword match
            keywords_threshold: f64,
            /// Maximum number of alternative transcripts
            max_alternatives: i64,
            /// Minimum confidence of a word alternative
            word_alternatives_threshold: f64,
            /// Include per-word confidence
            word_confidence: bool,
            /// Include per-word timestamps
            timestamps: bool,
            /// Censor profanity
            profanity_filter: bool,
            /// Convert dates, times and numbers
            smart_formatting: bool,
            /// Identify speakers
            speaker_labels: bool,
        }
    }
}

watson_options! {
    /// Options for `check_jobs`
    pub struct CheckJobsOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `check_job`
    pub struct CheckJobOptions {
        required {
            /// Job ID
            id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_job`
    pub struct DeleteJobOptions {
        required {
            /// Job ID
            id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `create_language_model`
    pub struct CreateLanguageModelOptions {
        required {
            /// Model name
            name: String,
            /// Base model to customize
            base_model_name: String,
        }
        optional {
            /// Dialect of the base model language
            dialect: String,
            /// Description
            description: String,
        }
    }
}

watson_options! {
    /// Options for `list_language_models`
    pub struct ListLanguageModelsOptions {
        required {}
        optional {
            /// Filter by language
            language: String,
        }
    }
}

watson_options! {
    /// Options for `get_language_model`
    pub struct GetLanguageModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_language_model`
    pub struct DeleteLanguageModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `train_language_model`
    pub struct TrainLanguageModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {
            /// `all` or `user`
            word_type_to_add: String,
            /// Weight of the custom model during recognition
            customization_weight: f64,
        }
    }
}

watson_options! {
    /// Options for `delete_user_data`
    pub struct DeleteUserDataOptions {
        required {
            /// Customer ID whose data is deleted
            customer_id: String,
        }
        optional {}
    }
}

/// Watson Speech to Text client
pub struct SpeechToTextClient {
    base: BaseService,
}

impl SpeechToTextClient {
    /// Create a client from a configuration
    pub fn new(config: WatsonConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config, false)?,
        })
    }

    /// Create a client that authenticates through a caller-supplied authenticator
    pub fn with_authenticator(config: WatsonConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            base: BaseService::with_authenticator(config, false, authenticator)?,
        })
    }

    /// Create a client from environment variables or `VCAP_SERVICES`
    pub fn from_env() -> Result<Self> {
        Self::new(WatsonConfig::from_env(SERVICE_NAME, VCAP_LABEL, DEFAULT_URL)?)
    }

    /// Configuration pointing at the default endpoint
    pub fn default_config() -> WatsonConfig {
        WatsonConfig::new(SERVICE_NAME, DEFAULT_URL)
    }

    /// List recognition models
    pub async fn list_models(&self, options: ListModelsOptions) -> Result<DetailedResponse<SpeechModels>> {
        let request = self
            .base
            .request(Method::GET, "/v1/models", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a recognition model
    pub async fn get_model(&self, options: GetModelOptions) -> Result<DetailedResponse<SpeechModel>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/models/{model_id}",
                &[("model_id", options.model_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Transcribe audio in a single request
    pub async fn recognize(&self, options: RecognizeOptions) -> Result<DetailedResponse<SpeechRecognitionResults>> {
        if options.audio.is_empty() {
            return Err(ServiceError::validation("audio must be provided"));
        }
        require_non_empty("content_type", &options.content_type)?;
        debug!("Recognizing {} bytes of {}", options.audio.len(), options.content_type);

        let request = self
            .base
            .request(Method::POST, "/v1/recognize", &[])?
            .query_opt("model", options.model)
            .query_opt("customization_id", options.customization_id)
            .query_opt("acoustic_customization_id", options.acoustic_customization_id)
            .query_opt("base_model_version", options.base_model_version)
            .query_opt("customization_weight", options.customization_weight)
            .query_opt("inactivity_timeout", options.inactivity_timeout)
            .query_list("keywords", options.keywords.as_ref())
            .query_opt("keywords_threshold", options.keywords_threshold)
            .query_opt("max_alternatives", options.max_alternatives)
            .query_opt("word_alternatives_threshold", options.word_alternatives_threshold)
            .query_opt("word_confidence", options.word_confidence)
            .query_opt("timestamps", options.timestamps)
            .query_opt("profanity_filter", options.profanity_filter)
            .query_opt("smart_formatting", options.smart_formatting)
            .query_opt("speaker_labels", options.speaker_labels)
            .accept("application/json")
            .headers(&options.headers)
            .binary(options.content_type, options.audio);

        self.base.execute(request).await
    }

    /// Allowlist a callback URL for asynchronous jobs
    pub async fn register_callback(&self, options: RegisterCallbackOptions) -> Result<DetailedResponse<RegisterStatus>> {
        require_non_empty("callback_url", &options.callback_url)?;

        let request = self
            .base
            .request(Method::POST, "/v1/register_callback", &[])?
            .query("callback_url", &options.callback_url)
            .query_opt("user_secret", options.user_secret)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Submit audio for asynchronous recognition
    pub async fn create_job(&self, options: CreateJobOptions) -> Result<DetailedResponse<RecognitionJob>> {
        if options.audio.is_empty() {
            return Err(ServiceError::validation("audio must be provided"));
        }
        require_non_empty("content_type", &options.content_type)?;

        let request = self
            .base
            .request(Method::POST, "/v1/recognitions", &[])?
            .query_opt("callback_url", options.callback_url)
            .query_opt("events", options.events)
            .query_opt("user_token", options.user_token)
            .query_opt("results_ttl", options.results_ttl)
            .query_opt("model", options.model)
            .query_opt("customization_id", options.customization_id)
            .query_opt("acoustic_customization_id", options.acoustic_customization_id)
            .query_opt("base_model_version", options.base_model_version)
            .query_opt("customization_weight", options.customization_weight)
            .query_opt("inactivity_timeout", options.inactivity_timeout)
            .query_list("keywords", options.keywords.as_ref())
            .query_opt("keywords_threshold", options.keywords_threshold)
            .query_opt("max_alternatives", options.max_alternatives)
            .query_opt("word_alternatives_threshold", options.word_alternatives_threshold)
            .query_opt("word_confidence", options.word_confidence)
            .query_opt("timestamps", options.timestamps)
            .query_opt("profanity_filter", options.profanity_filter)
            .query_opt("smart_formatting", options.smart_formatting)
            .query_opt("speaker_labels", options.speaker_labels)
            .accept("application/json")
            .headers(&options.headers)
            .binary(options.content_type, options.audio);

        self.base.execute(request).await
    }

    /// List the caller's recognition jobs
    pub async fn check_jobs(&self, options: CheckJobsOptions) -> Result<DetailedResponse<RecognitionJobs>> {
        let request = self
            .base
            .request(Method::GET, "/v1/recognitions", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get the status and results of a job
    pub async fn check_job(&self, options: CheckJobOptions) -> Result<DetailedResponse<RecognitionJob>> {
        let request = self
            .base
            .request(Method::GET, "/v1/recognitions/{id}", &[("id", options.id.as_str())])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a job
    pub async fn delete_job(&self, options: DeleteJobOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(Method::DELETE, "/v1/recognitions/{id}", &[("id", options.id.as_str())])?
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// Create a custom language model
    pub async fn create_language_model(
        &self,
        options: CreateLanguageModelOptions,
    ) -> Result<DetailedResponse<LanguageModel>> {
        require_non_empty("name", &options.name)?;
        require_non_empty("base_model_name", &options.base_model_name)?;

        let body = CreateLanguageModel {
            name: options.name,
            base_model_name: options.base_model_name,
            dialect: options.dialect,
            description: options.description,
        };

        let request = self
            .base
            .request(Method::POST, "/v1/customizations", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List custom language models
    pub async fn list_language_models(
        &self,
        options: ListLanguageModelsOptions,
    ) -> Result<DetailedResponse<LanguageModels>> {
        let request = self
            .base
            .request(Method::GET, "/v1/customizations", &[])?
            .query_opt("language", options.language)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a custom language model
    pub async fn get_language_model(
        &self,
        options: GetLanguageModelOptions,
    ) -> Result<DetailedResponse<LanguageModel>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/customizations/{customization_id}",
                &[("customization_id", options.customization_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a custom language model
    pub async fn delete_language_model(&self, options: DeleteLanguageModelOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/customizations/{customization_id}",
                &[("customization_id", options.customization_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// Start training a custom language model
    pub async fn train_language_model(&self, options: TrainLanguageModelOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::POST,
                "/v1/customizations/{customization_id}/train",
                &[("customization_id", options.customization_id.as_str())],
            )?
            .query_opt("word_type_to_add", options.word_type_to_add)
            .query_opt("customization_weight", options.customization_weight)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// Delete all data associated with a customer ID
    pub async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<DetailedResponse<()>> {
        require_non_empty("customer_id", &options.customer_id)?;

        let request = self
            .base
            .request(Method::DELETE, "/v1/user_data", &[])?
            .query("customer_id", &options.customer_id)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }
}

impl ServiceClient for SpeechToTextClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
