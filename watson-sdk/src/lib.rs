//! # Watson SDK
//!
//! Typed async clients for the IBM Watson family of REST services.
//!
//! This crate provides:
//!
//! - One client per service: Assistant, Discovery, Language Translator,
//!   Natural Language Classifier, Natural Language Understanding,
//!   Personality Insights, Speech to Text, Text to Speech, Tone Analyzer and
//!   Visual Recognition
//! - A shared request pipeline handling URLs, headers, bodies and decoding
//! - Basic and IAM authentication with a cached, automatically refreshed token
//! - Typed errors that keep the status code and raw body of failed calls
//! - Configuration from code, environment variables or `VCAP_SERVICES`
//!
//! ## Architecture
//!
//! - `BaseService`: Shared HTTP client, credentials and default headers
//! - `ServiceClient`: Trait implemented by every service client
//! - `RequestExecutor`: Sends a `ServiceRequest` and returns a `DetailedResponse`
//! - `Authenticator`: Applies Basic or IAM credentials to each request
//! - `ServiceError`: Error taxonomy shared by all services
//!
//! ## Example
//!
//! ```no_run
//! use watson_sdk::services::language_translator::{LanguageTranslatorClient, TranslateOptions};
//!
//! # async fn run() -> watson_sdk::Result<()> {
//! let config = LanguageTranslatorClient::default_config("2018-05-01").iam_api_key("my-api-key");
//! let translator = LanguageTranslatorClient::new(config)?;
//!
//! let options = TranslateOptions::new(vec!["Hello".to_string()]).model_id("en-es");
//! let response = translator.translate(options).await?;
//! println!("{:?}", response.result().translations);
//! # Ok(())
//! # }
//! ```

// Re-export core modules
pub mod core;
pub use self::core::{BaseService, ClientBuilder, DetailedResponse, FileUpload, RequestExecutor, ServiceClient};

// Authentication
pub mod auth;
pub use auth::{AuthType, Authenticator, BasicAuthenticator, IamAuthenticator, IamTokenManager};

// Re-export service-specific modules
pub mod services;
pub use services::{
    assistant, discovery, language_translator, natural_language_classifier, natural_language_understanding,
    personality_insights, speech_to_text, text_to_speech, tone_analyzer, visual_recognition,
};

// Re-export error handling
pub mod error;
pub use error::{ErrorContext, Result, ServiceError};

// Re-export configuration management
pub mod config;
pub use config::{ConfigProvider, ServiceConfig, WatsonConfig};

// Utility module for common functionality
mod util;

#[cfg(test)]
mod tests;

/// Create a new default client builder
pub fn client() -> self::core::ClientBuilder {
    self::core::ClientBuilder::new()
}

/// Create an Assistant client from environment variables or `VCAP_SERVICES`
pub fn assistant_client() -> Result<assistant::AssistantClient> {
    assistant::AssistantClient::from_env()
}

/// Create a Speech to Text client from environment variables or `VCAP_SERVICES`
pub fn speech_to_text_client() -> Result<speech_to_text::SpeechToTextClient> {
    speech_to_text::SpeechToTextClient::from_env()
}

/// Create a Text to Speech client from environment variables or `VCAP_SERVICES`
pub fn text_to_speech_client() -> Result<text_to_speech::TextToSpeechClient> {
    text_to_speech::TextToSpeechClient::from_env()
}
