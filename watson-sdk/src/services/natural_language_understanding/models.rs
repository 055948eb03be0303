//! Natural Language Understanding v1 data models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Concept extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConceptsOptions {
    /// Maximum number of concepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Emotion analysis settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmotionOptions {
    /// Analyze the whole document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,

    /// Target phrases to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

/// Entity extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntitiesOptions {
    /// Maximum number of entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Return the locations of entity mentions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<bool>,

    /// Custom model ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Return sentiment per entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,

    /// Return emotion per entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

/// Keyword extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordsOptions {
    /// Maximum number of keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Return sentiment per keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,

    /// Return emotion per keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

/// Metadata extraction settings (no parameters)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetadataOptions {}

/// Relation extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelationsOptions {
    /// Custom model ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Semantic role extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SemanticRolesOptions {
    /// Maximum number of semantic roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Return keywords of subjects and objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<bool>,

    /// Return entities of subjects and objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<bool>,
}

/// Sentiment analysis settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentOptions {
    /// Analyze the whole document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,

    /// Target phrases to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

/// Category classification settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriesOptions {
    /// Maximum number of categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Analysis features to run; at least one must be set
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Features {
    /// Concepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<ConceptsOptions>,

    /// Emotion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionOptions>,

    /// Entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,

    /// Keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsOptions>,

    /// Metadata of web pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataOptions>,

    /// Relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<RelationsOptions>,

    /// Semantic roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRolesOptions>,

    /// Sentiment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOptions>,

    /// Categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesOptions>,
}

impl Features {
    /// True when no feature is selected
    pub fn is_empty(&self) -> bool {
        self.concepts.is_none()
            && self.emotion.is_none()
            && self.entities.is_none()
            && self.keywords.is_none()
            && self.metadata.is_none()
            && self.relations.is_none()
            && self.semantic_roles.is_none()
            && self.sentiment.is_none()
            && self.categories.is_none()
    }
}

/// Body of `analyze`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyzeRequest {
    /// Plain text to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// HTML to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Public web page to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Features to run
    pub features: Features,

    /// Remove website elements such as ads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,

    /// XPath query selecting the text to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// Analyze the raw page if cleaning fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_raw: Option<bool>,

    /// Return the analyzed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_analyzed_text: Option<bool>,

    /// Language code overriding detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Maximum number of characters analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_text_characters: Option<i64>,
}

/// Usage accounting of an analysis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Usage {
    /// Number of features used
    pub features: Option<i64>,

    /// Number of characters processed
    pub text_characters: Option<i64>,

    /// Number of text units billed
    pub text_units: Option<i64>,
}

/// Emotion scores between 0 and 1
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmotionScores {
    /// Anger
    pub anger: Option<f64>,

    /// Disgust
    pub disgust: Option<f64>,

    /// Fear
    pub fear: Option<f64>,

    /// Joy
    pub joy: Option<f64>,

    /// Sadness
    pub sadness: Option<f64>,
}

/// Sentiment score of a feature
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeatureSentimentResults {
    /// Score from -1 (negative) to 1 (positive)
    pub score: Option<f64>,
}

/// An extracted concept
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConceptsResult {
    /// Concept name
    pub text: Option<String>,

    /// Relevance between 0 and 1
    pub relevance: Option<f64>,

    /// Link to the DBpedia resource
    pub dbpedia_resource: Option<String>,
}

/// An extracted entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntitiesResult {
    /// Entity type
    #[serde(rename = "type")]
    pub entity_type: Option<String>,

    /// Entity text
    pub text: Option<String>,

    /// Relevance between 0 and 1
    pub relevance: Option<f64>,

    /// Number of mentions
    pub count: Option<i64>,

    /// Sentiment towards the entity
    pub sentiment: Option<FeatureSentimentResults>,

    /// Emotion towards the entity
    pub emotion: Option<EmotionScores>,

    /// Disambiguation details
    pub disambiguation: Option<Value>,
}

/// An extracted keyword
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordsResult {
    /// Keyword text
    pub text: Option<String>,

    /// Relevance between 0 and 1
    pub relevance: Option<f64>,

    /// Number of occurrences
    pub count: Option<i64>,

    /// Sentiment towards the keyword
    pub sentiment: Option<FeatureSentimentResults>,

    /// Emotion towards the keyword
    pub emotion: Option<EmotionScores>,
}

/// A category of the content
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriesResult {
    /// Hierarchical label such as `/technology and computing`
    pub label: Option<String>,

    /// Score between 0 and 1
    pub score: Option<f64>,
}

/// Document-level emotion
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentEmotionResults {
    /// Emotion scores
    pub emotion: Option<EmotionScores>,
}

/// Emotion towards a target phrase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TargetedEmotionResults {
    /// Target phrase
    pub text: Option<String>,

    /// Emotion scores
    pub emotion: Option<EmotionScores>,
}

/// Emotion analysis result
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmotionResult {
    /// Document-level emotion
    pub document: Option<DocumentEmotionResults>,

    /// Emotion per target
    #[serde(default)]
    pub targets: Vec<TargetedEmotionResults>,
}

/// Document-level sentiment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentSentimentResults {
    /// `positive`, `neutral` or `negative`
    pub label: Option<String>,

    /// Score from -1 to 1
    pub score: Option<f64>,
}

/// Sentiment towards a target phrase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TargetedSentimentResults {
    /// Target phrase
    pub text: Option<String>,

    /// Score from -1 to 1
    pub score: Option<f64>,
}

/// Sentiment analysis result
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentResult {
    /// Document-level sentiment
    pub document: Option<DocumentSentimentResults>,

    /// Sentiment per target
    #[serde(default)]
    pub targets: Vec<TargetedSentimentResults>,
}

/// Response of `analyze`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisResults {
    /// Language of the content
    pub language: Option<String>,

    /// Analyzed text, when requested
    pub analyzed_text: Option<String>,

    /// URL of the analyzed page
    pub retrieved_url: Option<String>,

    /// Usage accounting
    pub usage: Option<Usage>,

    /// Concepts
    #[serde(default)]
    pub concepts: Vec<ConceptsResult>,

    /// Entities
    #[serde(default)]
    pub entities: Vec<EntitiesResult>,

    /// Keywords
    #[serde(default)]
    pub keywords: Vec<KeywordsResult>,

    /// Categories
    #[serde(default)]
    pub categories: Vec<CategoriesResult>,

    /// Emotion
    pub emotion: Option<EmotionResult>,

    /// Page metadata
    pub metadata: Option<Value>,

    /// Relations
    #[serde(default)]
    pub relations: Vec<Value>,

    /// Semantic roles
    #[serde(default)]
    pub semantic_roles: Vec<Value>,

    /// Sentiment
    pub sentiment: Option<SentimentResult>,
}

/// A custom model
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Model {
    /// Model ID
    pub model_id: Option<String>,

    /// Deployment status
    pub status: Option<String>,

    /// Language of the model
    pub language: Option<String>,

    /// Description
    pub description: Option<String>,
}

/// Response of `list_models`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListModelsResults {
    /// Models
    #[serde(default)]
    pub models: Vec<Model>,
}

/// Response of `delete_model`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteModelResults {
    /// ID of the deleted model
    pub deleted: Option<String>,
}
