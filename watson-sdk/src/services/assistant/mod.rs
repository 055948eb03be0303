//! Watson Assistant v1 client
//!
//! Conversation turns, plus management of workspaces, intents, entities and logs.

mod models;
pub use models::*;

use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::request::require_non_empty;
use crate::core::{BaseService, DetailedResponse, RequestExecutor, ServiceClient};
use crate::error::Result;

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "assistant";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "conversation";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2018-09-20";

watson_options! {
    /// Options for `message`
    pub struct MessageOptions {
        required {
            /// Workspace to send the message to
            workspace_id: String,
        }
        optional {
            /// User input
            input: MessageInput,
            /// Return more than one intent
            alternate_intents: bool,
            /// Conversation state from the previous turn
            context: Context,
            /// Entities to use instead of the recognized ones
            entities: Vec<RuntimeEntity>,
            /// Intents to use instead of the recognized ones
            intents: Vec<RuntimeIntent>,
            /// Output from the previous turn
            output: OutputData,
            /// Include details of the visited dialog nodes
            nodes_visited_details: bool,
        }
    }
}

watson_options! {
    /// Options for `list_workspaces`
    pub struct ListWorkspacesOptions {
        required {}
        optional {
            /// Number of records per page
            page_limit: i64,
            /// Include the total count in the pagination
            include_count: bool,
            /// Sort attribute, prefix with `-` for descending
            sort: String,
            /// Cursor of the page to fetch
            cursor: String,
            /// Include audit properties
            include_audit: bool,
        }
    }
}

watson_options! {
    /// Options for `create_workspace`
    pub struct CreateWorkspaceOptions {
        required {}
        optional {
            /// Workspace name
            name: String,
            /// Description
            description: String,
            /// Language of the workspace
            language: String,
            /// Intents
            intents: Vec<Intent>,
            /// Entities
            entities: Vec<Entity>,
            /// Dialog nodes
            dialog_nodes: Vec<Value>,
            /// Counterexamples
            counterexamples: Vec<Counterexample>,
            /// Workspace metadata
            metadata: Value,
            /// Whether IBM may use the workspace for training
            learning_opt_out: bool,
        }
    }
}

watson_options! {
    /// Options for `get_workspace`
    pub struct GetWorkspaceOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {
            /// Include all workspace content
            export: bool,
            /// Include audit properties
            include_audit: bool,
        }
    }
}

watson_options! {
    /// Options for `update_workspace`
    pub struct UpdateWorkspaceOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {
            /// Workspace name
            name: String,
            /// Description
            description: String,
            /// Language of the workspace
            language: String,
            /// Intents
            intents: Vec<Intent>,
            /// Entities
            entities: Vec<Entity>,
            /// Dialog nodes
            dialog_nodes: Vec<Value>,
            /// Counterexamples
            counterexamples: Vec<Counterexample>,
            /// Workspace metadata
            metadata: Value,
            /// Whether IBM may use the workspace for training
            learning_opt_out: bool,
            /// Add the new content to the existing content instead of replacing it
            append: bool,
        }
    }
}

watson_options! {
    /// Options for `delete_workspace`
    pub struct DeleteWorkspaceOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `list_intents`
    pub struct ListIntentsOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {
            /// Include the examples of each intent
            export: bool,
            /// Number of records per page
            page_limit: i64,
            /// Include the total count in the pagination
            include_count: bool,
            /// Sort attribute
            sort: String,
            /// Cursor of the page to fetch
            cursor: String,
        }
    }
}

watson_options! {
    /// Options for `create_intent`
    pub struct CreateIntentOptions {
        required {
            /// Workspace ID
            workspace_id: String,
            /// Intent name
            intent: String,
        }
        optional {
            /// Description
            description: String,
            /// User input examples
            examples: Vec<Example>,
        }
    }
}

watson_options! {
    /// Options for `get_intent`
    pub struct GetIntentOptions {
        required {
            /// Workspace ID
            workspace_id: String,
            /// Intent name
            intent: String,
        }
        optional {
            /// Include the examples
            export: bool,
        }
    }
}

watson_options! {
    /// Options for `delete_intent`
    pub struct DeleteIntentOptions {
        required {
            /// Workspace ID
            workspace_id: String,
            /// Intent name
            intent: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `list_entities`
    pub struct ListEntitiesOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {
            /// Include the values of each entity
            export: bool,
            /// Number of records per page
            page_limit: i64,
        }
    }
}

watson_options! {
    /// Options for `create_entity`
    pub struct CreateEntityOptions {
        required {
            /// Workspace ID
            workspace_id: String,
            /// Entity name
            entity: String,
        }
        optional {
            /// Description
            description: String,
            /// Entity metadata
            metadata: Value,
            /// Entity values
            values: Vec<EntityValue>,
            /// Use fuzzy matching
            fuzzy_match: bool,
        }
    }
}

watson_options! {
    /// Options for `list_logs`
    pub struct ListLogsOptions {
        required {
            /// Workspace ID
            workspace_id: String,
        }
        optional {
            /// Sort attribute
            sort: String,
            /// Filter query
            filter: String,
            /// Number of records per page
            page_limit: i64,
            /// Cursor of the page to fetch
            cursor: String,
        }
    }
}

watson_options! {
    /// Options for `delete_user_data`
    pub struct DeleteUserDataOptions {
        required {
            /// Customer ID whose data is deleted
            customer_id: String,
        }
        optional {}
    }
}

/// Watson Assistant client
pub struct AssistantClient {
    base: BaseService,
}

impl AssistantClient {
    /// Create a client from a configuration; a version date is required
    pub fn new(config: WatsonConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config, true)?,
        })
    }

    /// Create a client that authenticates through a caller-supplied authenticator
    pub fn with_authenticator(config: WatsonConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            base: BaseService::with_authenticator(config, true, authenticator)?,
        })
    }

    /// Create a client from environment variables or `VCAP_SERVICES`
    pub fn from_env() -> Result<Self> {
        let mut config = WatsonConfig::from_env(SERVICE_NAME, VCAP_LABEL, DEFAULT_URL)?;
        if config.version.is_none() {
            config.version = Some(DEFAULT_VERSION.to_string());
        }
        Self::new(config)
    }

    /// Configuration pointing at the default endpoint
    pub fn default_config(version: &str) -> WatsonConfig {
        WatsonConfig::new(SERVICE_NAME, DEFAULT_URL).version(version)
    }

    /// Send user input to a workspace and get the dialog response
    pub async fn message(&self, options: MessageOptions) -> Result<DetailedResponse<MessageResponse>> {
        debug!("Sending message to workspace {}", options.workspace_id);

        let body = MessageRequest {
            input: options.input,
            alternate_intents: options.alternate_intents,
            context: options.context,
            entities: options.entities,
            intents: options.intents,
            output: options.output,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/message",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("nodes_visited_details", options.nodes_visited_details)
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List the workspaces of the service instance
    pub async fn list_workspaces(
        &self,
        options: ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        let request = self
            .base
            .request(Method::GET, "/v1/workspaces", &[])?
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort)
            .query_opt("cursor", options.cursor)
            .query_opt("include_audit", options.include_audit)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Create a workspace
    pub async fn create_workspace(&self, options: CreateWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        let body = WorkspaceRequest {
            name: options.name,
            description: options.description,
            language: options.language,
            intents: options.intents,
            entities: options.entities,
            dialog_nodes: options.dialog_nodes,
            counterexamples: options.counterexamples,
            metadata: options.metadata,
            learning_opt_out: options.learning_opt_out,
            system_settings: None,
        };

        let request = self
            .base
            .request(Method::POST, "/v1/workspaces", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Get a workspace, optionally with all of its content
    pub async fn get_workspace(&self, options: GetWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("export", options.export)
            .query_opt("include_audit", options.include_audit)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Update a workspace
    pub async fn update_workspace(&self, options: UpdateWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        let body = WorkspaceRequest {
            name: options.name,
            description: options.description,
            language: options.language,
            intents: options.intents,
            entities: options.entities,
            dialog_nodes: options.dialog_nodes,
            counterexamples: options.counterexamples,
            metadata: options.metadata,
            learning_opt_out: options.learning_opt_out,
            system_settings: None,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("append", options.append)
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Delete a workspace
    pub async fn delete_workspace(&self, options: DeleteWorkspaceOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/workspaces/{workspace_id}",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// List the intents of a workspace
    pub async fn list_intents(&self, options: ListIntentsOptions) -> Result<DetailedResponse<IntentCollection>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/intents",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("export", options.export)
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort)
            .query_opt("cursor", options.cursor)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Create an intent
    pub async fn create_intent(&self, options: CreateIntentOptions) -> Result<DetailedResponse<Intent>> {
        let body = CreateIntent {
            intent: options.intent,
            description: options.description,
            examples: options.examples,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/intents",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Get an intent
    pub async fn get_intent(&self, options: GetIntentOptions) -> Result<DetailedResponse<Intent>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/intents/{intent}",
                &[
                    ("workspace_id", options.workspace_id.as_str()),
                    ("intent", options.intent.as_str()),
                ],
            )?
            .query_opt("export", options.export)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete an intent
    pub async fn delete_intent(&self, options: DeleteIntentOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/workspaces/{workspace_id}/intents/{intent}",
                &[
                    ("workspace_id", options.workspace_id.as_str()),
                    ("intent", options.intent.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// List the entities of a workspace
    pub async fn list_entities(&self, options: ListEntitiesOptions) -> Result<DetailedResponse<EntityCollection>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/entities",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("export", options.export)
            .query_opt("page_limit", options.page_limit)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Create an entity
    pub async fn create_entity(&self, options: CreateEntityOptions) -> Result<DetailedResponse<Entity>> {
        let body = CreateEntity {
            entity: options.entity,
            description: options.description,
            metadata: options.metadata,
            values: options.values,
            fuzzy_match: options.fuzzy_match,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/entities",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List the conversation log of a workspace
    pub async fn list_logs(&self, options: ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/logs",
                &[("workspace_id", options.workspace_id.as_str())],
            )?
            .query_opt("sort", options.sort)
            .query_opt("filter", options.filter)
            .query_opt("page_limit", options.page_limit)
            .query_opt("cursor", options.cursor)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete all data associated with a customer ID
    pub async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<DetailedResponse<()>> {
        require_non_empty("customer_id", &options.customer_id)?;

        let request = self
            .base
            .request(Method::DELETE, "/v1/user_data", &[])?
            .query("customer_id", &options.customer_id)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }
}

impl ServiceClient for AssistantClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
