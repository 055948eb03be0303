//! Text to Speech v1 data models

use serde::{Deserialize, Serialize};

/// Features a voice supports
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupportedFeatures {
    /// Whether custom pronunciations are supported
    pub custom_pronunciation: bool,

    /// Whether voice transformation is supported
    pub voice_transformation: bool,
}

/// A word and its custom translation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Word {
    /// The word
    pub word: String,

    /// Sounds-like spelling or phonetic translation
    pub translation: String,

    /// Japanese part of speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl Word {
    /// Word with its translation
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            part_of_speech: None,
        }
    }
}

/// Response of `list_words`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Words {
    /// Words of the custom model
    #[serde(default)]
    pub words: Vec<Word>,
}

/// A custom voice model
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VoiceModel {
    /// Customization ID
    pub customization_id: String,

    /// Name
    pub name: Option<String>,

    /// Language code
    pub language: Option<String>,

    /// Owner credentials
    pub owner: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Last modification time
    pub last_modified: Option<String>,

    /// Description
    pub description: Option<String>,

    /// Words of the model
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Response of `list_voice_models`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VoiceModels {
    /// Custom voice models
    #[serde(default)]
    pub customizations: Vec<VoiceModel>,
}

/// A synthesis voice
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Voice {
    /// Link to the voice
    pub url: String,

    /// `male` or `female`
    pub gender: String,

    /// Voice name such as `en-US_AllisonVoice`
    pub name: String,

    /// Language code
    pub language: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Whether the voice can be customized
    #[serde(default)]
    pub customizable: bool,

    /// Supported features
    #[serde(default)]
    pub supported_features: SupportedFeatures,

    /// Custom model, when a customization ID was given
    pub customization: Option<VoiceModel>,
}

/// Response of `list_voices`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Voices {
    /// Voices
    #[serde(default)]
    pub voices: Vec<Voice>,
}

/// Response of `get_pronunciation`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pronunciation {
    /// Pronunciation in the requested format
    pub pronunciation: String,
}

/// Body of `synthesize`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Text {
    /// Text or SSML to synthesize
    pub text: String,
}

/// Body of `create_voice_model`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateVoiceModel {
    /// Name
    pub name: String,

    /// Language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `update_voice_model`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateVoiceModel {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Words to add or update
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub words: Vec<Word>,
}

/// Body of `add_word`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Translation {
    /// Sounds-like spelling or phonetic translation
    pub translation: String,

    /// Japanese part of speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}
