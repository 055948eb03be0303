//! Personality Insights v3 data models

use serde::{Deserialize, Serialize};

/// One piece of authored content
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentItem {
    /// Text of the item
    pub content: String,

    /// Unique identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Creation time in milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Last update time in milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,

    /// `text/plain` or `text/html`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contenttype: Option<String>,

    /// Language code of the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// ID of the parent item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentid: Option<String>,

    /// Whether the item is a reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<bool>,

    /// Whether the item was forwarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
}

impl ContentItem {
    /// Content item with only its text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

/// JSON input of `profile`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    /// Content items
    #[serde(rename = "contentItems")]
    pub content_items: Vec<ContentItem>,
}

/// Input of a profile request, sent with the matching content type
#[derive(Debug, Clone)]
pub enum ProfileContent {
    /// `application/json`
    Json(Content),
    /// `text/plain`
    Text(String),
    /// `text/html`
    Html(String),
}

impl Default for ProfileContent {
    fn default() -> Self {
        ProfileContent::Text(String::new())
    }
}

impl From<Content> for ProfileContent {
    fn from(content: Content) -> Self {
        ProfileContent::Json(content)
    }
}

impl From<&str> for ProfileContent {
    fn from(text: &str) -> Self {
        ProfileContent::Text(text.to_string())
    }
}

impl From<String> for ProfileContent {
    fn from(text: String) -> Self {
        ProfileContent::Text(text)
    }
}

/// A personality characteristic
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Trait {
    /// Characteristic ID such as `big5_openness`
    pub trait_id: String,

    /// Display name
    pub name: String,

    /// `personality`, `needs` or `values`
    pub category: String,

    /// Normalized percentile between 0 and 1
    pub percentile: f64,

    /// Raw score, present when `raw_scores` was requested
    pub raw_score: Option<f64>,

    /// Whether the characteristic is meaningful for the input language
    pub significant: Option<bool>,

    /// Facets of a Big Five dimension
    #[serde(default)]
    pub children: Vec<Trait>,
}

/// Temporal behavior derived from content timestamps
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Behavior {
    /// Characteristic ID
    pub trait_id: String,

    /// Display name
    pub name: String,

    /// `behavior`
    pub category: String,

    /// Share of content created in the period
    pub percentage: f64,
}

/// One consumption preference
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsumptionPreferences {
    /// Preference ID
    pub consumption_preference_id: String,

    /// Display name
    pub name: String,

    /// 0, 0.5 or 1
    pub score: f64,
}

/// A category of consumption preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsumptionPreferencesCategory {
    /// Category ID
    pub consumption_preference_category_id: String,

    /// Display name
    pub name: String,

    /// Preferences in the category
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreferences>,
}

/// Warning about the input
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Warning {
    /// Warning ID such as `WORD_COUNT_MESSAGE`
    pub warning_id: String,

    /// Human-readable message
    pub message: String,
}

/// Response of `profile`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Language model used for the analysis
    pub processed_language: String,

    /// Number of words in the input
    pub word_count: i64,

    /// Note about the word count
    pub word_count_message: Option<String>,

    /// Big Five dimensions
    #[serde(default)]
    pub personality: Vec<Trait>,

    /// Needs
    #[serde(default)]
    pub needs: Vec<Trait>,

    /// Values
    #[serde(default)]
    pub values: Vec<Trait>,

    /// Temporal behavior
    #[serde(default)]
    pub behavior: Vec<Behavior>,

    /// Consumption preferences, when requested
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreferencesCategory>,

    /// Warnings about the input
    #[serde(default)]
    pub warnings: Vec<Warning>,
}
