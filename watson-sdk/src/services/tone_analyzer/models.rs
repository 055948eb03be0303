//! Tone Analyzer v3 data models

use serde::{Deserialize, Serialize};

/// JSON input of `tone`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToneInput {
    /// Text to analyze
    pub text: String,
}

/// Input of a tone request, sent with the matching content type
#[derive(Debug, Clone)]
pub enum ToneContent {
    /// `application/json`
    Json(ToneInput),
    /// `text/plain`
    Text(String),
    /// `text/html`
    Html(String),
}

impl Default for ToneContent {
    fn default() -> Self {
        ToneContent::Text(String::new())
    }
}

impl From<ToneInput> for ToneContent {
    fn from(input: ToneInput) -> Self {
        ToneContent::Json(input)
    }
}

impl From<&str> for ToneContent {
    fn from(text: &str) -> Self {
        ToneContent::Text(text.to_string())
    }
}

impl From<String> for ToneContent {
    fn from(text: String) -> Self {
        ToneContent::Text(text)
    }
}

/// Score of one tone
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToneScore {
    /// Score between 0.5 and 1
    pub score: f64,

    /// Tone ID such as `joy`
    pub tone_id: String,

    /// Display name
    pub tone_name: String,
}

/// Tones of one category
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToneCategory {
    /// Scores
    #[serde(default)]
    pub tones: Vec<ToneScore>,

    /// Category ID such as `emotion_tone`
    pub category_id: String,

    /// Display name
    pub category_name: String,
}

/// Document-level tones
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentAnalysis {
    /// Tones above the reporting threshold
    #[serde(default)]
    pub tones: Vec<ToneScore>,

    /// Tones by category, for the 2016-05-19 version
    #[serde(default)]
    pub tone_categories: Vec<ToneCategory>,

    /// Warning about the input
    pub warning: Option<String>,
}

/// Sentence-level tones
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentenceAnalysis {
    /// Sentence index
    pub sentence_id: i64,

    /// Sentence text
    pub text: String,

    /// Tones above the reporting threshold
    #[serde(default)]
    pub tones: Vec<ToneScore>,

    /// Tones by category
    #[serde(default)]
    pub tone_categories: Vec<ToneCategory>,

    /// Offset of the first character
    pub input_from: Option<i64>,

    /// Offset past the last character
    pub input_to: Option<i64>,
}

/// Response of `tone`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToneAnalysis {
    /// Document-level tones
    #[serde(default)]
    pub document_tone: DocumentAnalysis,

    /// Sentence-level tones
    #[serde(default)]
    pub sentences_tone: Vec<SentenceAnalysis>,
}

/// One chat utterance
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Utterance {
    /// Utterance text
    pub text: String,

    /// Speaker of the utterance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Utterance {
    /// Utterance with an optional user
    pub fn new(text: impl Into<String>, user: Option<&str>) -> Self {
        Self {
            text: text.into(),
            user: user.map(str::to_string),
        }
    }
}

/// Body of `tone_chat`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToneChatInput {
    /// Utterances to analyze
    pub utterances: Vec<Utterance>,
}

/// Tones of one utterance
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UtteranceAnalysis {
    /// Utterance index
    pub utterance_id: i64,

    /// Utterance text
    pub utterance_text: String,

    /// Customer-engagement tones
    #[serde(default)]
    pub tones: Vec<ToneScore>,

    /// Error for this utterance
    pub error: Option<String>,
}

/// Response of `tone_chat`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UtteranceAnalyses {
    /// One analysis per utterance
    #[serde(default)]
    pub utterances_tone: Vec<UtteranceAnalysis>,

    /// Warning about the input
    pub warning: Option<String>,
}
