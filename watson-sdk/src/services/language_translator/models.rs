//! Language Translator v3 data models

use serde::{Deserialize, Serialize};

/// Body of `translate`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslateRequest {
    /// Input text, one entry per segment
    pub text: Vec<String>,

    /// Translation model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Source language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// One translated segment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Translation {
    /// Translated text
    #[serde(rename = "translation")]
    pub translation_output: String,
}

/// Response of `translate`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationResult {
    /// Words in the input
    #[serde(default)]
    pub word_count: i64,

    /// Characters in the input
    #[serde(default)]
    pub character_count: i64,

    /// Translated segments, in input order
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// A language guess
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentifiedLanguage {
    /// Language code
    pub language: String,

    /// Confidence between 0 and 1
    pub confidence: f64,
}

/// Response of `identify`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentifiedLanguages {
    /// Guesses, most likely first
    #[serde(default)]
    pub languages: Vec<IdentifiedLanguage>,
}

/// A language the service can identify
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentifiableLanguage {
    /// Language code
    pub language: String,

    /// Language name
    pub name: String,
}

/// Response of `list_identifiable_languages`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentifiableLanguages {
    /// Identifiable languages
    #[serde(default)]
    pub languages: Vec<IdentifiableLanguage>,
}

/// A translation model
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationModel {
    /// Model ID
    #[serde(default)]
    pub model_id: String,

    /// Optional model name
    pub name: Option<String>,

    /// Source language code
    pub source: Option<String>,

    /// Target language code
    pub target: Option<String>,

    /// Model this one was customized from
    pub base_model_id: Option<String>,

    /// Domain of the model
    pub domain: Option<String>,

    /// Whether the model can be customized
    #[serde(default)]
    pub customizable: bool,

    /// Whether this is the default model for its language pair
    #[serde(default)]
    pub default_model: bool,

    /// Owner of a custom model
    pub owner: Option<String>,

    /// Training status
    pub status: Option<String>,
}

/// Response of `list_models`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationModels {
    /// Models
    #[serde(default)]
    pub models: Vec<TranslationModel>,
}

/// Response of `delete_model`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteModelResult {
    /// `OK` when the model was deleted
    pub status: String,
}
