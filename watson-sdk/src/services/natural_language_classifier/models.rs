//! Natural Language Classifier v1 data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A class and its confidence
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifiedClass {
    /// Class name
    pub class_name: String,

    /// Confidence between 0 and 1
    pub confidence: f64,
}

/// Response of `classify`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Classification {
    /// Classifier ID
    pub classifier_id: Option<String>,

    /// Link to the classifier
    pub url: Option<String>,

    /// Input text
    pub text: Option<String>,

    /// Class with the highest confidence
    pub top_class: Option<String>,

    /// Classes ordered by confidence
    #[serde(default)]
    pub classes: Vec<ClassifiedClass>,
}

/// Body of `classify`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifyInput {
    /// Text to classify
    pub text: String,
}

/// Body of `classify_collection`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifyCollectionInput {
    /// Texts to classify
    pub collection: Vec<ClassifyInput>,
}

/// Classification of one text in a collection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectionItem {
    /// Input text
    pub text: Option<String>,

    /// Class with the highest confidence
    pub top_class: Option<String>,

    /// Classes ordered by confidence
    #[serde(default)]
    pub classes: Vec<ClassifiedClass>,
}

/// Response of `classify_collection`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassificationCollection {
    /// Classifier ID
    pub classifier_id: Option<String>,

    /// Link to the classifier
    pub url: Option<String>,

    /// One classification per input text
    #[serde(default)]
    pub collection: Vec<CollectionItem>,
}

/// A classifier
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Classifier {
    /// Classifier ID
    #[serde(default)]
    pub classifier_id: String,

    /// Link to the classifier
    #[serde(default)]
    pub url: String,

    /// Classifier name
    pub name: Option<String>,

    /// `Non Existent`, `Training`, `Failed`, `Available` or `Unavailable`
    pub status: Option<String>,

    /// Creation time
    pub created: Option<DateTime<Utc>>,

    /// Additional detail about the status
    pub status_description: Option<String>,

    /// Language of the training data
    pub language: Option<String>,
}

/// Response of `list_classifiers`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifierList {
    /// Classifiers
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}
