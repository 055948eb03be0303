//! Discovery v1 data models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Discovery environment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Environment {
    /// Environment ID
    #[serde(default)]
    pub environment_id: String,

    /// Environment name
    #[serde(default)]
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Last update time
    pub updated: Option<String>,

    /// `active`, `pending`, `maintenance` or `resizing`
    pub status: Option<String>,

    /// True for the read-only Watson Discovery News environment
    #[serde(default)]
    pub read_only: bool,

    /// Size of the environment
    pub size: Option<String>,

    /// Disk and document capacity details
    pub index_capacity: Option<Value>,
}

/// Body of `create_environment`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateEnvironmentRequest {
    /// Environment name
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Size of the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Body of `update_environment`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateEnvironmentRequest {
    /// Environment name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `list_environments`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListEnvironmentsResponse {
    /// Environments
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Response of `delete_environment`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteEnvironmentResponse {
    /// Environment ID
    pub environment_id: String,

    /// Deletion status
    pub status: String,
}

/// Document counts of a collection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentCounts {
    /// Documents available for querying
    #[serde(default)]
    pub available: i64,

    /// Documents being processed
    #[serde(default)]
    pub processing: i64,

    /// Documents that failed ingestion
    #[serde(default)]
    pub failed: i64,
}

/// A collection of documents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Collection {
    /// Collection ID
    #[serde(default)]
    pub collection_id: String,

    /// Collection name
    #[serde(default)]
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Last update time
    pub updated: Option<String>,

    /// `active` or `pending`
    pub status: Option<String>,

    /// Configuration applied to ingested documents
    pub configuration_id: Option<String>,

    /// Language of the documents
    pub language: Option<String>,

    /// Document counts
    pub document_counts: Option<DocumentCounts>,
}

/// Body of `create_collection`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateCollectionRequest {
    /// Collection name
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Configuration applied to ingested documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,

    /// Language of the documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response of `list_collections`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListCollectionsResponse {
    /// Collections
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Response of `delete_collection`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteCollectionResponse {
    /// Collection ID
    pub collection_id: String,

    /// Deletion status
    pub status: String,
}

/// A warning or error raised while ingesting a document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Notice {
    /// Notice ID
    pub notice_id: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Document the notice refers to
    pub document_id: Option<String>,

    /// Query the notice refers to
    pub query_id: Option<String>,

    /// `warning` or `error`
    pub severity: Option<String>,

    /// Ingestion step that raised the notice
    pub step: Option<String>,

    /// Notice text
    pub description: Option<String>,
}

/// Response of `add_document`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentAccepted {
    /// Document ID
    #[serde(default)]
    pub document_id: String,

    /// `processing` or `pending`
    #[serde(default)]
    pub status: String,

    /// Ingestion notices
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Response of `get_document_status`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentStatus {
    /// Document ID
    #[serde(default)]
    pub document_id: String,

    /// Configuration used during ingestion
    pub configuration_id: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Last update time
    pub updated: Option<String>,

    /// `available`, `available with notices`, `failed`, `processing` or `pending`
    #[serde(default)]
    pub status: String,

    /// Description of the status
    pub status_description: Option<String>,

    /// Original file name
    pub filename: Option<String>,

    /// File type
    pub file_type: Option<String>,

    /// SHA-1 of the document
    pub sha1: Option<String>,

    /// Ingestion notices
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Response of `delete_document`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteDocumentResponse {
    /// Document ID
    pub document_id: Option<String>,

    /// Deletion status
    pub status: Option<String>,
}

/// One matching document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QueryResult {
    /// Document ID
    pub id: Option<String>,

    /// Query metadata such as the score
    pub result_metadata: Option<Value>,

    /// Document fields
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// A passage extracted from a matching document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QueryPassages {
    /// Document the passage comes from
    pub document_id: Option<String>,

    /// Relevance score
    pub passage_score: Option<f64>,

    /// Passage text
    pub passage_text: Option<String>,

    /// Start offset in the field
    pub start_offset: Option<i64>,

    /// End offset in the field
    pub end_offset: Option<i64>,

    /// Field the passage comes from
    pub field: Option<String>,
}

/// Response of `query`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    /// Number of matching documents
    #[serde(default)]
    pub matching_results: i64,

    /// Matching documents
    #[serde(default)]
    pub results: Vec<QueryResult>,

    /// Aggregation results
    #[serde(default)]
    pub aggregations: Vec<Value>,

    /// Passages
    #[serde(default)]
    pub passages: Vec<QueryPassages>,

    /// Number of duplicates removed
    pub duplicates_removed: Option<i64>,
}
