//! Watson Discovery v1 client
//!
//! Environments, collections, document ingestion and queries.

mod models;
pub use models::*;

use std::sync::Arc;

use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::{BaseService, DetailedResponse, FileUpload, MultipartField, RequestExecutor, ServiceClient};
use crate::error::{Result, ServiceError};

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "discovery";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/discovery/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "discovery";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2018-03-05";

watson_options! {
    /// Options for `create_environment`
    pub struct CreateEnvironmentOptions {
        required {
            /// Environment name
            name: String,
        }
        optional {
            /// Description
            description: String,
            /// Size of the environment (`LT`, `XS`, `S`, ...)
            size: String,
        }
    }
}

watson_options! {
    /// Options for `list_environments`
    pub struct ListEnvironmentsOptions {
        required {}
        optional {
            /// Only return the environment with this name
            name: String,
        }
    }
}

watson_options! {
    /// Options for `get_environment`
    pub struct GetEnvironmentOptions {
        required {
            /// Environment ID
            environment_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `update_environment`
    pub struct UpdateEnvironmentOptions {
        required {
            /// Environment ID
            environment_id: String,
        }
        optional {
            /// New name
            name: String,
            /// New description
            description: String,
        }
    }
}

watson_options! {
    /// Options for `delete_environment`
    pub struct DeleteEnvironmentOptions {
        required {
            /// Environment ID
            environment_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `create_collection`
    pub struct CreateCollectionOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection name
            name: String,
        }
        optional {
            /// Description
            description: String,
            /// Configuration applied to ingested documents
            configuration_id: String,
            /// Language of the documents
            language: String,
        }
    }
}

watson_options! {
    /// Options for `list_collections`
    pub struct ListCollectionsOptions {
        required {
            /// Environment ID
            environment_id: String,
        }
        optional {
            /// Only return the collection with this name
            name: String,
        }
    }
}

watson_options! {
    /// Options for `get_collection`
    pub struct GetCollectionOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_collection`
    pub struct DeleteCollectionOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `add_document`
    pub struct AddDocumentOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
        }
        optional {
            /// Document to ingest
            file: FileUpload,
            /// JSON metadata of the document
            metadata: String,
        }
    }
}

watson_options! {
    /// Options for `get_document_status`
    pub struct GetDocumentStatusOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
            /// Document ID
            document_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_document`
    pub struct DeleteDocumentOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
            /// Document ID
            document_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `query`
    pub struct QueryOptions {
        required {
            /// Environment ID
            environment_id: String,
            /// Collection ID
            collection_id: String,
        }
        optional {
            /// Filter in Discovery Query Language, applied before ranking
            filter: String,
            /// Query in Discovery Query Language
            query: String,
            /// Natural language query
            natural_language_query: String,
            /// Return passages
            passages: bool,
            /// Aggregation expression
            aggregation: String,
            /// Number of results to return
            count: i64,
            /// Comma-separated fields to return
            return_fields: String,
            /// Number of results to skip
            offset: i64,
            /// Comma-separated sort fields
            sort: String,
            /// Highlight matching terms
            highlight: bool,
            /// Remove duplicate results
            deduplicate: bool,
        }
    }
}

/// Watson Discovery client
pub struct DiscoveryClient {
    base: BaseService,
}

impl DiscoveryClient {
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

    /// Create an environment
    pub async fn create_environment(
        &self,
        options: CreateEnvironmentOptions,
    ) -> Result<DetailedResponse<Environment>> {
        let body = CreateEnvironmentRequest {
            name: options.name,
            description: options.description,
            size: options.size,
        };

        let request = self
            .base
            .request(Method::POST, "/v1/environments", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List environments
    pub async fn list_environments(
        &self,
        options: ListEnvironmentsOptions,
    ) -> Result<DetailedResponse<ListEnvironmentsResponse>> {
        let request = self
            .base
            .request(Method::GET, "/v1/environments", &[])?
            .query_opt("name", options.name)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get an environment
    pub async fn get_environment(&self, options: GetEnvironmentOptions) -> Result<DetailedResponse<Environment>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/environments/{environment_id}",
                &[("environment_id", options.environment_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Rename or re-describe an environment
    pub async fn update_environment(
        &self,
        options: UpdateEnvironmentOptions,
    ) -> Result<DetailedResponse<Environment>> {
        let body = UpdateEnvironmentRequest {
            name: options.name,
            description: options.description,
        };

        let request = self
            .base
            .request(
                Method::PUT,
                "/v1/environments/{environment_id}",
                &[("environment_id", options.environment_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Delete an environment
    pub async fn delete_environment(
        &self,
        options: DeleteEnvironmentOptions,
    ) -> Result<DetailedResponse<DeleteEnvironmentResponse>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/environments/{environment_id}",
                &[("environment_id", options.environment_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Create a collection
    pub async fn create_collection(&self, options: CreateCollectionOptions) -> Result<DetailedResponse<Collection>> {
        let body = CreateCollectionRequest {
            name: options.name,
            description: options.description,
            configuration_id: options.configuration_id,
            language: options.language,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/environments/{environment_id}/collections",
                &[("environment_id", options.environment_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// List the collections of an environment
    pub async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> Result<DetailedResponse<ListCollectionsResponse>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/environments/{environment_id}/collections",
                &[("environment_id", options.environment_id.as_str())],
            )?
            .query_opt("name", options.name)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a collection
    pub async fn get_collection(&self, options: GetCollectionOptions) -> Result<DetailedResponse<Collection>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/environments/{environment_id}/collections/{collection_id}",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a collection
    pub async fn delete_collection(
        &self,
        options: DeleteCollectionOptions,
    ) -> Result<DetailedResponse<DeleteCollectionResponse>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/environments/{environment_id}/collections/{collection_id}",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Upload a document for ingestion
    ///
    /// At least one of `file` and `metadata` must be set.
    pub async fn add_document(&self, options: AddDocumentOptions) -> Result<DetailedResponse<DocumentAccepted>> {
        if options.file.is_none() && options.metadata.is_none() {
            return Err(ServiceError::validation("At least one of file or metadata must be supplied"));
        }

        let mut fields = Vec::new();
        if let Some(file) = options.file {
            fields.push(MultipartField::file(
                "file",
                file.with_defaults("file", "application/octet-stream"),
            ));
        }
        if let Some(metadata) = options.metadata {
            fields.push(MultipartField::text("metadata", metadata));
        }

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/environments/{environment_id}/collections/{collection_id}/documents",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// Get the ingestion status of a document
    pub async fn get_document_status(
        &self,
        options: GetDocumentStatusOptions,
    ) -> Result<DetailedResponse<DocumentStatus>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                    ("document_id", options.document_id.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a document
    pub async fn delete_document(
        &self,
        options: DeleteDocumentOptions,
    ) -> Result<DetailedResponse<DeleteDocumentResponse>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                    ("document_id", options.document_id.as_str()),
                ],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Search a collection
    pub async fn query(&self, options: QueryOptions) -> Result<DetailedResponse<QueryResponse>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/environments/{environment_id}/collections/{collection_id}/query",
                &[
                    ("environment_id", options.environment_id.as_str()),
                    ("collection_id", options.collection_id.as_str()),
                ],
            )?
            .query_opt("filter", options.filter)
            .query_opt("query", options.query)
            .query_opt("natural_language_query", options.natural_language_query)
            .query_opt("passages", options.passages)
            .query_opt("aggregation", options.aggregation)
            .query_opt("count", options.count)
            .query_opt("return", options.return_fields)
            .query_opt("offset", options.offset)
            .query_opt("sort", options.sort)
            .query_opt("highlight", options.highlight)
            .query_opt("deduplicate", options.deduplicate)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }
}

impl ServiceClient for DiscoveryClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
