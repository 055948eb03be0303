//! Watson Text to Speech v1 client

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
use crate::error::Result;

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "text_to_speech";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://stream.watsonplatform.net/text-to-speech/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "text_to_speech";

/// Audio format requested by `synthesize` when none is given
pub const DEFAULT_AUDIO_FORMAT: &str = "audio/ogg;codecs=opus";

watson_options! {
    /// Options for `list_voices`
    pub struct ListVoicesOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `get_voice`
    pub struct GetVoiceOptions {
        required {
            /// Voice name
            voice: String,
        }
        optional {
            /// Include this custom model in the response
            customization_id: String,
        }
    }
}

watson_options! {
    /// Options for `synthesize`
    pub struct SynthesizeOptions {
        required {
            /// Text or SSML to synthesize
            text: String,
        }
        optional {
            /// Audio format such as `audio/wav` (sent as `Accept`)
            accept: String,
            /// Voice name
            voice: String,
            /// Custom voice model
            customization_id: String,
        }
    }
}

watson_options! {
    /// Options for `get_pronunciation`
    pub struct GetPronunciationOptions {
        required {
            /// Word to pronounce
            text: String,
        }
        optional {
            /// Voice whose language is used
            voice: String,
            /// `ibm` or `ipa`
            format: String,
            /// Custom voice model
            customization_id: String,
        }
    }
}

watson_options! {
    /// Options for `create_voice_model`
    pub struct CreateVoiceModelOptions {
        required {
            /// Name
            name: String,
        }
        optional {
            /// Language code
            language: String,
            /// Description
            description: String,
        }
    }
}

watson_options! {
    /// Options for `list_voice_models`
    pub struct ListVoiceModelsOptions {
        required {}
        optional {
            /// Filter by language
            language: String,
        }
    }
}

watson_options! {
    /// Options for `get_voice_model`
    pub struct GetVoiceModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `update_voice_model`
    pub struct UpdateVoiceModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {
            /// New name
            name: String,
            /// New description
            description: String,
            /// Words to add or update
            words: Vec<Word>,
        }
    }
}

watson_options! {
    /// Options for `delete_voice_model`
    pub struct DeleteVoiceModelOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `add_word`
    pub struct AddWordOptions {
        required {
            /// Customization ID
            customization_id: String,
            /// Word to add or update
            word: String,
            /// Sounds-like spelling or phonetic translation
            translation: String,
        }
        optional {
            /// Japanese part of speech
            part_of_speech: String,
        }
    }
}

watson_options! {
    /// Options for `list_words`
    pub struct ListWordsOptions {
        required {
            /// Customization ID
            customization_id: String,
        }
        optional {}
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

/// Watson Text to Speech client
pub struct TextToSpeechClient {
    base: BaseService,
}

impl TextToSpeechClient {
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

    /// List available voices
    pub async fn list_voices(&self, options: ListVoicesOptions) -> Result<DetailedResponse<Voices>> {
        let request = self
            .base
            .request(Method::GET, "/v1/voices", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a voice
    pub async fn get_voice(&self, options: GetVoiceOptions) -> Result<DetailedResponse<Voice>> {
        let request = self
            .base
            .request(Method::GET, "/v1/voices/{voice}", &[("voice", options.voice.as_str())])?
            .query_opt("customization_id", options.customization_id)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Synthesize text to audio
    pub async fn synthesize(&self, options: SynthesizeOptions) -> Result<DetailedResponse<Vec<u8>>> {
        let accept = options
            .accept
            .unwrap_or_else(|| DEFAULT_AUDIO_FORMAT.to_string());
        debug!("Synthesizing {} characters as {}", options.text.len(), accept);

        let body = Text { text: options.text };

        let request = self
            .base
            .request(Method::POST, "/v1/synthesize", &[])?
            .query_opt("voice", options.voice)
            .query_opt("customization_id", options.customization_id)
            .accept(accept)
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute_bytes(request).await
    }

    /// Get the pronunciation of a word
    pub async fn get_pronunciation(&self, options: GetPronunciationOptions) -> Result<DetailedResponse<Pronunciation>> {
        require_non_empty("text", &options.text)?;

        let request = self
            .base
            .request(Method::GET, "/v1/pronunciation", &[])?
            .query("text", &options.text)
            .query_opt("voice", options.voice)
            .query_opt("format", options.format)
            .query_opt("customization_id", options.customization_id)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Create a custom voice model
    pub async fn create_voice_model(&self, options: CreateVoiceModelOptions) -> Result<DetailedResponse<VoiceModel>> {
        require_non_empty("name", &options.name)?;

        let body = CreateVoiceModel {
            name: options.name,
            language: options.language,
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

    /// List custom voice models
    pub async fn list_voice_models(&self, options: ListVoiceModelsOptions) -> Result<DetailedResponse<VoiceModels>> {
        let request = self
            .base
            .request(Method::GET, "/v1/customizations", &[])?
            .query_opt("language", options.language)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a custom voice model with its words
    pub async fn get_voice_model(&self, options: GetVoiceModelOptions) -> Result<DetailedResponse<VoiceModel>> {
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

    /// Update the metadata and words of a custom voice model
    pub async fn update_voice_model(&self, options: UpdateVoiceModelOptions) -> Result<DetailedResponse<()>> {
        let body = UpdateVoiceModel {
            name: options.name,
            description: options.description,
            words: options.words.unwrap_or_default(),
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/customizations/{customization_id}",
                &[("customization_id", options.customization_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute_empty(request).await
    }

    /// Delete a custom voice model
    pub async fn delete_voice_model(&self, options: DeleteVoiceModelOptions) -> Result<DetailedResponse<()>> {
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

    /// Add or replace one word of a custom voice model
    pub async fn add_word(&self, options: AddWordOptions) -> Result<DetailedResponse<()>> {
        let body = Translation {
            translation: options.translation,
            part_of_speech: options.part_of_speech,
        };

        let request = self
            .base
            .request(
                Method::PUT,
                "/v1/customizations/{customization_id}/words/{word}",
                &[
                    ("customization_id", options.customization_id.as_str()),
                    ("word", options.word.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute_empty(request).await
    }

    /// List the words of a custom voice model
    pub async fn list_words(&self, options: ListWordsOptions) -> Result<DetailedResponse<Words>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/customizations/{customization_id}/words",
                &[("customization_id", options.customization_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
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

impl ServiceClient for TextToSpeechClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
