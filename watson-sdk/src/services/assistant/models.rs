//! Assistant v1 data models
//!
//! This module contains type definitions for Assistant API requests and responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User input of a message
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageInput {
    /// Text of the user input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Any additional input properties
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<&str> for MessageInput {
    fn from(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            extra: HashMap::new(),
        }
    }
}

impl From<String> for MessageInput {
    fn from(text: String) -> Self {
        Self {
            text: Some(text),
            extra: HashMap::new(),
        }
    }
}

/// Conversation state carried from one turn to the next
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Context {
    /// Unique conversation identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// Dialog state maintained by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Value>,

    /// Context variables
    #[serde(flatten)]
    pub variables: HashMap<String, Value>,
}

/// An intent recognized in the user input
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeIntent {
    /// Intent name
    pub intent: String,

    /// Confidence between 0 and 1
    pub confidence: f64,
}

/// An entity value recognized in the user input
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeEntity {
    /// Entity name
    pub entity: String,

    /// Start and end offsets of the mention
    #[serde(default)]
    pub location: Vec<i64>,

    /// Recognized entity value
    pub value: String,

    /// Confidence between 0 and 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Entity metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Dialog log message
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogMessage {
    /// Severity (`info`, `error`, `warn`)
    pub level: String,

    /// Message text
    pub msg: String,
}

/// Output of the dialog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputData {
    /// Messages logged during the turn
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,

    /// Responses to the user
    #[serde(default)]
    pub text: Vec<String>,

    /// Dialog nodes visited during the turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,

    /// Details of the visited nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<Value>>,

    /// Any additional output properties
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Body of a `message` call
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageRequest {
    /// User input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,

    /// Return more than one intent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    /// Conversation state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Entities to use instead of the recognized ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,

    /// Intents to use instead of the recognized ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,

    /// Output from the previous turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

/// Response of a `message` call
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    /// The user input
    #[serde(default)]
    pub input: Option<MessageInput>,

    /// Recognized intents
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,

    /// Recognized entities
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,

    /// Whether alternate intents were requested
    #[serde(default)]
    pub alternate_intents: Option<bool>,

    /// Conversation state to send with the next turn
    #[serde(default)]
    pub context: Context,

    /// Dialog output
    #[serde(default)]
    pub output: OutputData,

    /// Actions requested by the dialog
    #[serde(default)]
    pub actions: Option<Vec<Value>>,
}

/// Pagination details of a collection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pagination {
    /// URL that reloads the current page
    pub refresh_url: Option<String>,

    /// URL of the next page
    pub next_url: Option<String>,

    /// Number of objects on this page
    pub total: Option<i64>,

    /// Number of objects matching the query
    pub matched: Option<i64>,

    /// Cursor of the current page
    pub refresh_cursor: Option<String>,

    /// Cursor of the next page
    pub next_cursor: Option<String>,
}

/// A user input example of an intent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Example {
    /// Example text
    pub text: String,

    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    /// An example with just its text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// An intent of a workspace
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Intent {
    /// Intent name
    pub intent: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// User input examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

/// A list of intents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntentCollection {
    /// Intents
    #[serde(default)]
    pub intents: Vec<Intent>,

    /// Pagination details
    #[serde(default)]
    pub pagination: Pagination,
}

/// One value of an entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntityValue {
    /// Value text
    pub value: String,

    /// Value metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// `synonyms` or `patterns`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Synonyms of the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,

    /// Patterns of the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
}

/// An entity of a workspace
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Entity {
    /// Entity name
    pub entity: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entity metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Use fuzzy matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,

    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Entity values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EntityValue>,
}

/// A list of entities
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntityCollection {
    /// Entities
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Pagination details
    #[serde(default)]
    pub pagination: Pagination,
}

/// An example the dialog should not match to any intent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Counterexample {
    /// Input text
    pub text: String,
}

/// A workspace
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Workspace {
    /// Workspace name
    pub name: String,

    /// Language of the workspace
    #[serde(default)]
    pub language: String,

    /// Workspace ID
    #[serde(default)]
    pub workspace_id: String,

    /// Description
    pub description: Option<String>,

    /// Workspace metadata
    pub metadata: Option<Value>,

    /// Whether IBM may use the workspace for training
    #[serde(default)]
    pub learning_opt_out: bool,

    /// Global settings
    pub system_settings: Option<Value>,

    /// Training status
    pub status: Option<String>,

    /// Creation time
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    pub updated: Option<DateTime<Utc>>,

    /// Intents, present in exports
    pub intents: Option<Vec<Intent>>,

    /// Entities, present in exports
    pub entities: Option<Vec<Entity>>,

    /// Dialog nodes, present in exports
    pub dialog_nodes: Option<Vec<Value>>,

    /// Counterexamples, present in exports
    pub counterexamples: Option<Vec<Counterexample>>,
}

/// Body of `create_workspace` and `update_workspace`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceRequest {
    /// Workspace name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language of the workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Intents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,

    /// Entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,

    /// Dialog nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<Value>>,

    /// Counterexamples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,

    /// Workspace metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Whether IBM may use the workspace for training
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,

    /// Global settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<Value>,
}

/// A list of workspaces
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceCollection {
    /// Workspaces
    #[serde(default)]
    pub workspaces: Vec<Workspace>,

    /// Pagination details
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `create_intent`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateIntent {
    /// Intent name
    pub intent: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// User input examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

/// Body of `create_entity`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateEntity {
    /// Entity name
    pub entity: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entity metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Entity values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<EntityValue>>,

    /// Use fuzzy matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
}

/// One logged conversation turn
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogExport {
    /// The message request
    #[serde(default)]
    pub request: MessageRequest,

    /// The message response
    #[serde(default)]
    pub response: MessageResponse,

    /// Log ID
    #[serde(default)]
    pub log_id: String,

    /// Request time
    pub request_timestamp: Option<String>,

    /// Response time
    pub response_timestamp: Option<String>,

    /// Workspace that handled the turn
    pub workspace_id: Option<String>,

    /// Language of the workspace
    pub language: Option<String>,
}

/// A list of logged turns
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogCollection {
    /// Logs
    #[serde(default)]
    pub logs: Vec<LogExport>,

    /// Pagination details
    #[serde(default)]
    pub pagination: Pagination,
}
