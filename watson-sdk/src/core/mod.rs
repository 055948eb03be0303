//! Core abstractions for the Watson SDK
//!
//! This module provides the pieces every service client is built from:
//!
//! - `ServiceClient`: The base trait for all service clients
//! - `RequestExecutor`: Sends a `ServiceRequest` and decodes the response
//! - `BaseService`: Shared HTTP client, credentials and default headers
//! - `ServiceRequest` / `DetailedResponse`: The request and response envelopes
//! - `ClientBuilder`: Builder for the underlying HTTP client

pub mod builder;
pub mod options;
pub mod request;
pub mod response;
pub mod service;

pub use builder::ClientBuilder;
pub use request::{FileUpload, MultipartField, RequestBody, ServiceRequest};
pub use response::DetailedResponse;
pub use service::BaseService;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Base trait for all service clients
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Shared pipeline of this client
    fn base(&self) -> &BaseService;

    /// Mutable access to the shared pipeline
    fn base_mut(&mut self) -> &mut BaseService;

    /// The client name/identifier
    fn name(&self) -> &str {
        self.base().service_name()
    }

    /// The endpoint URL for the service
    fn service_url(&self) -> &str {
        self.base().service_url()
    }

    /// API version date, for versioned services
    fn version(&self) -> Option<&str> {
        self.base().version()
    }

    /// Point the client at another endpoint
    fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.base_mut().set_service_url(url)
    }

    /// Headers sent with every call
    fn set_default_headers(&mut self, headers: HashMap<String, String>) -> Result<()> {
        self.base_mut().set_default_headers(&headers)
    }

    /// Replace the user-managed IAM access token
    async fn set_iam_access_token(&self, token: &str) -> Result<()> {
        self.base().set_iam_access_token(token).await
    }
}

/// Trait responsible for executing HTTP requests with strong typing
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute a request whose body decodes into `R`
    async fn execute<R>(&self, request: ServiceRequest) -> Result<DetailedResponse<R>>
    where
        R: DeserializeOwned + Send;

    /// Execute a request and return the raw body
    async fn execute_bytes(&self, request: ServiceRequest) -> Result<DetailedResponse<Vec<u8>>>;

    /// Execute a request whose body is ignored
    async fn execute_empty(&self, request: ServiceRequest) -> Result<DetailedResponse<()>>;
}
