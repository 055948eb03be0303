//! Speech to Text v1 data models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Features a model supports
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupportedFeatures {
    /// Whether custom language models can be built on the model
    pub custom_language_model: bool,

    /// Whether speaker labels are available
    pub speaker_labels: bool,
}

/// A recognition model
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechModel {
    /// Model name such as `en-US_BroadbandModel`
    pub name: String,

    /// Language code
    pub language: String,

    /// Sampling rate in Hz
    pub rate: i64,

    /// Link to the model
    pub url: String,

    /// Supported features
    #[serde(default)]
    pub supported_features: SupportedFeatures,

    /// Description
    #[serde(default)]
    pub description: String,
}

/// Response of `list_models`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechModels {
    /// Models
    #[serde(default)]
    pub models: Vec<SpeechModel>,
}

/// A keyword match in the audio
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordResult {
    /// Normalized spelling of the match
    pub normalized_text: String,

    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds
    pub end_time: f64,

    /// Confidence between 0 and 1
    pub confidence: f64,
}

/// An alternative word hypothesis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordAlternativeResult {
    /// Confidence between 0 and 1
    pub confidence: f64,

    /// Hypothesized word
    pub word: String,
}

/// Word alternatives for one time span
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordAlternativeResults {
    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds
    pub end_time: f64,

    /// Alternatives ordered by confidence
    #[serde(default)]
    pub alternatives: Vec<WordAlternativeResult>,
}

/// A transcription hypothesis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechRecognitionAlternative {
    /// Transcript
    pub transcript: String,

    /// Confidence, present for the best final hypothesis
    pub confidence: Option<f64>,

    /// `[word, start, end]` triples
    #[serde(default)]
    pub timestamps: Vec<Value>,

    /// `[word, confidence]` pairs
    #[serde(default)]
    pub word_confidence: Vec<Value>,
}

/// Recognition result for one utterance
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechRecognitionResult {
    /// Whether the result is final
    #[serde(rename = "final")]
    pub final_results: bool,

    /// Hypotheses ordered by confidence
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,

    /// Keyword matches per requested keyword
    pub keywords_result: Option<HashMap<String, Vec<KeywordResult>>>,

    /// Word alternatives
    #[serde(default)]
    pub word_alternatives: Vec<WordAlternativeResults>,
}

/// Speaker label for a span of audio
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeakerLabelsResult {
    /// Start time in seconds
    pub from: f64,

    /// End time in seconds
    pub to: f64,

    /// Speaker number
    pub speaker: i64,

    /// Confidence between 0 and 1
    pub confidence: f64,

    /// Whether the label is final
    #[serde(rename = "final")]
    pub final_results: bool,
}

/// Response of `recognize`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechRecognitionResults {
    /// Results
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,

    /// Index of the first result
    pub result_index: Option<i64>,

    /// Speaker labels, when requested
    #[serde(default)]
    pub speaker_labels: Vec<SpeakerLabelsResult>,

    /// Warnings about the request
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Response of `register_callback`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterStatus {
    /// `created` or `already created`
    pub status: String,

    /// The registered callback URL
    pub url: String,
}

/// An asynchronous recognition job
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecognitionJob {
    /// Job ID
    pub id: String,

    /// `waiting`, `processing`, `completed` or `failed`
    pub status: String,

    /// Creation time
    pub created: Option<String>,

    /// Last update time
    pub updated: Option<String>,

    /// Link to the job
    pub url: Option<String>,

    /// Token echoed to the callback
    pub user_token: Option<String>,

    /// Results of a completed job
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResults>,

    /// Warnings about the request
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Response of `check_jobs`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecognitionJobs {
    /// Jobs of the caller
    #[serde(default)]
    pub recognitions: Vec<RecognitionJob>,
}

/// Body of `create_language_model`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateLanguageModel {
    /// Model name
    pub name: String,

    /// Base model to customize
    pub base_model_name: String,

    /// Dialect of the base model language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A custom language model
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageModel {
    /// Customization ID
    pub customization_id: String,

    /// Creation time
    pub created: Option<String>,

    /// Language code
    pub language: Option<String>,

    /// Dialect
    pub dialect: Option<String>,

    /// Base model versions the model was built on
    #[serde(default)]
    pub versions: Vec<String>,

    /// Owner credentials
    pub owner: Option<String>,

    /// Name
    pub name: Option<String>,

    /// Description
    pub description: Option<String>,

    /// Base model name
    pub base_model_name: Option<String>,

    /// `pending`, `ready`, `training`, `available` or `failed`
    pub status: Option<String>,

    /// Training progress in percent
    pub progress: Option<i64>,

    /// Error from the last training run
    pub error: Option<String>,

    /// Warnings from the last training run
    pub warnings: Option<String>,
}

/// Response of `list_language_models`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageModels {
    /// Custom language models
    #[serde(default)]
    pub customizations: Vec<LanguageModel>,
}
