//! Shared request pipeline of every Watson service client

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::{authenticator_from_config, Authenticator, IamTokenManager};
use crate::config::{ServiceConfig, WatsonConfig};
use crate::core::builder::{build_header_map, ClientBuilder};
use crate::core::request::{render_url, MultipartField, RequestBody, ServiceRequest};
use crate::core::response::DetailedResponse;
use crate::core::RequestExecutor;
use crate::error::{Result, ServiceError};
use crate::services::common::parse_error_response;
use crate::util::{generate_request_id, sanitize_for_logging};

/// Successful response before decoding
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// Connection, credentials and default headers of one service client
pub struct BaseService {
    http_client: Client,
    config: WatsonConfig,
    authenticator: Arc<dyn Authenticator>,
    token_manager: Option<Arc<IamTokenManager>>,
    default_headers: HeaderMap,
    versioned: bool,
}

impl BaseService {
    /// Validate the configuration and set up HTTP client and authenticator
    ///
    /// `versioned` services send `version=<date>` with every call and refuse to
    /// start without a version.
    pub fn new(config: WatsonConfig, versioned: bool) -> Result<Self> {
        let config = config.normalized();
        config.validate()?;
        Self::check_version(&config, versioned)?;

        let http_client = ClientBuilder::from_config(&config).build_http_client()?;
        let (authenticator, token_manager) = authenticator_from_config(&config, http_client.clone())?;

        Ok(Self {
            http_client,
            config,
            authenticator,
            token_manager,
            default_headers: HeaderMap::new(),
            versioned,
        })
    }

    /// Use a caller-supplied authenticator instead of the configured credentials
    pub fn with_authenticator(
        config: WatsonConfig,
        versioned: bool,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        Self::check_version(&config, versioned)?;
        if config.url.trim().is_empty() {
            return Err(ServiceError::configuration(format!(
                "{} service URL is required",
                config.service_name
            )));
        }

        let http_client = ClientBuilder::from_config(&config).build_http_client()?;

        Ok(Self {
            http_client,
            config,
            authenticator,
            token_manager: None,
            default_headers: HeaderMap::new(),
            versioned,
        })
    }

    fn check_version(config: &WatsonConfig, versioned: bool) -> Result<()> {
        let has_version = config
            .version
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);

        if versioned && !has_version {
            return Err(ServiceError::configuration(format!(
                "{} requires a version date",
                config.service_name
            )));
        }
        Ok(())
    }

    /// Configuration in use
    pub fn config(&self) -> &WatsonConfig {
        &self.config
    }

    /// Short service name
    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }

    /// Service endpoint URL
    pub fn service_url(&self) -> &str {
        &self.config.url
    }

    /// API version date
    pub fn version(&self) -> Option<&str> {
        self.config.version.as_deref()
    }

    /// Whether calls carry the `version` query parameter
    pub fn is_versioned(&self) -> bool {
        self.versioned
    }

    /// Authenticator applied to every call
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// IAM token manager when the client authenticates with IAM
    pub fn token_manager(&self) -> Option<&Arc<IamTokenManager>> {
        self.token_manager.as_ref()
    }

    /// Point the client at another endpoint
    pub fn set_service_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        url::Url::parse(&url)
            .map_err(|e| ServiceError::configuration(format!("Invalid service URL '{}': {}", url, e)))?;
        self.config.url = url;
        Ok(())
    }

    /// Headers sent with every call of this client
    pub fn set_default_headers(&mut self, headers: &HashMap<String, String>) -> Result<()> {
        self.default_headers = build_header_map(headers)?;
        Ok(())
    }

    /// Replace the user-managed IAM access token
    pub async fn set_iam_access_token(&self, token: impl Into<String>) -> Result<()> {
        match self.token_manager {
            Some(ref manager) => {
                manager.set_access_token(token).await;
                Ok(())
            }
            None => Err(ServiceError::configuration(format!(
                "{} is not configured for IAM authentication",
                self.config.service_name
            ))),
        }
    }

    /// Start a request for a path template such as `/v1/workspaces/{workspace_id}`
    pub fn request(&self, method: Method, template: &str, params: &[(&str, &str)]) -> Result<ServiceRequest> {
        let url = render_url(&self.config.url, template, params)?;
        let mut request = ServiceRequest::new(method, url);

        if self.versioned {
            if let Some(ref version) = self.config.version {
                request = request.query("version", version);
            }
        }

        Ok(request)
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            service = %self.config.service_name,
            method = %request.method,
            request_id = tracing::field::Empty
        )
    )]
    async fn send(&self, request: ServiceRequest) -> Result<RawResponse> {
        let ServiceRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let request_id = generate_request_id();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut header_map = self.default_headers.clone();
        for (name, value) in headers {
            let name = HeaderName::from_str(&name)
                .map_err(|e| ServiceError::validation(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ServiceError::validation(format!("Invalid header value for '{}': {}", name, e)))?;
            header_map.insert(name, value);
        }

        self.authenticator.apply_auth(&mut header_map).await?;

        let endpoint = url.path().to_string();
        debug!(
            "[{}] {} {} {}",
            request_id,
            self.config.service_name,
            method,
            sanitize_for_logging(url.as_str())
        );

        let body = match body {
            RequestBody::Json(bytes) => {
                if !header_map.contains_key(CONTENT_TYPE) {
                    header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                Some(reqwest::Body::from(bytes))
            }
            RequestBody::Text { content_type, body } => {
                if !header_map.contains_key(CONTENT_TYPE) {
                    header_map.insert(CONTENT_TYPE, content_type_value(&content_type)?);
                }
                Some(reqwest::Body::from(body))
            }
            RequestBody::Binary { content_type, data } => {
                if !header_map.contains_key(CONTENT_TYPE) {
                    header_map.insert(CONTENT_TYPE, content_type_value(&content_type)?);
                }
                Some(reqwest::Body::from(data))
            }
            RequestBody::Multipart(fields) => {
                // reqwest sets the boundary itself
                header_map.remove(CONTENT_TYPE);
                let builder = self
                    .http_client
                    .request(method, url)
                    .query(&query)
                    .headers(header_map)
                    .multipart(build_form(fields)?);
                return self.finish(builder, &endpoint).await;
            }
            RequestBody::Empty => None,
        };

        let mut builder = self
            .http_client
            .request(method, url)
            .query(&query)
            .headers(header_map);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        self.finish(builder, &endpoint).await
    }

    async fn finish(&self, builder: reqwest::RequestBuilder, endpoint: &str) -> Result<RawResponse> {
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(parse_error_response(&self.config.service_name, endpoint, response).await);
        }

        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        debug!(
            "{} {} returned {} ({} bytes)",
            self.config.service_name,
            endpoint,
            status,
            body.len()
        );

        Ok(RawResponse { status, headers, body })
    }
}

fn content_type_value(content_type: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(content_type)
        .map_err(|e| ServiceError::validation(format!("Invalid content type '{}': {}", content_type, e)))
}

fn build_form(fields: Vec<MultipartField>) -> Result<Form> {
    let mut form = Form::new();

    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File { name, file } => {
                let mut part = Part::bytes(file.data);
                if let Some(filename) = file.filename {
                    part = part.file_name(filename);
                }
                if let Some(ref content_type) = file.content_type {
                    part = part.mime_str(content_type).map_err(|e| {
                        ServiceError::validation(format!("Invalid content type '{}': {}", content_type, e))
                    })?;
                }
                form.part(name, part)
            }
        };
    }

    Ok(form)
}

#[async_trait]
impl RequestExecutor for BaseService {
    async fn execute<R>(&self, request: ServiceRequest) -> Result<DetailedResponse<R>>
    where
        R: DeserializeOwned + Send,
    {
        let raw = self.send(request).await?;
        let result = serde_json::from_slice::<R>(&raw.body)
            .map_err(|e| ServiceError::parsing(format!("Failed to parse response: {}", e)))?;

        Ok(DetailedResponse::new(raw.status.as_u16(), raw.headers, result))
    }

    async fn execute_bytes(&self, request: ServiceRequest) -> Result<DetailedResponse<Vec<u8>>> {
        let raw = self.send(request).await?;
        Ok(DetailedResponse::new(raw.status.as_u16(), raw.headers, raw.body))
    }

    async fn execute_empty(&self, request: ServiceRequest) -> Result<DetailedResponse<()>> {
        let raw = self.send(request).await?;
        Ok(DetailedResponse::new(raw.status.as_u16(), raw.headers, ()))
    }
}
