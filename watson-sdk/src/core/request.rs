//! Outgoing request construction
//!
//! A `ServiceRequest` is built by a service method and handed to the
//! `RequestExecutor`. Path templates are rendered here so that every path
//! parameter ends up percent-encoded as exactly one path segment.

use std::collections::HashMap;
use std::path::Path;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::{Result, ServiceError};

/// A file sent as one part of a multipart upload
#[derive(Debug, Clone, Default)]
pub struct FileUpload {
    /// File contents
    pub data: Vec<u8>,

    /// File name reported to the service
    pub filename: Option<String>,

    /// MIME type of the part
    pub content_type: Option<String>,
}

impl FileUpload {
    /// Wrap in-memory bytes
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Set the file name
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the MIME type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Fill in a file name and MIME type where the caller left them out
    pub(crate) fn with_defaults(mut self, filename: &str, content_type: &str) -> Self {
        if self.filename.is_none() {
            self.filename = Some(filename.to_string());
        }
        if self.content_type.is_none() {
            self.content_type = Some(content_type.to_string());
        }
        self
    }

    /// Read a file from disk; the file name defaults to the path's last component
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|e| {
            ServiceError::validation(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut upload = Self::new(data);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            upload = upload.filename(name);
        }
        Ok(upload)
    }
}

/// One field of a multipart body
#[derive(Debug, Clone)]
pub enum MultipartField {
    /// Plain text field
    Text { name: String, value: String },
    /// File part
    File { name: String, file: FileUpload },
}

impl MultipartField {
    /// Text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        MultipartField::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// File part
    pub fn file(name: impl Into<String>, file: FileUpload) -> Self {
        MultipartField::File {
            name: name.into(),
            file,
        }
    }
}

/// Request body kinds Watson operations send
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Serialized JSON document
    Json(Vec<u8>),
    /// Raw text with its content type (`text/plain`, `text/html`)
    Text { content_type: String, body: String },
    /// Raw bytes with their content type (audio, images)
    Binary { content_type: String, data: Vec<u8> },
    /// `multipart/form-data`
    Multipart(Vec<MultipartField>),
}

/// A fully described HTTP request against one Watson service
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: RequestBody,
}

impl ServiceRequest {
    /// Create a request for an already rendered URL
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Rendered URL, without query parameters
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Query parameters in insertion order
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Body to be sent
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Value of a header set on this request (last one wins)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Append a query parameter
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter when present
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Append a comma-separated list parameter when present and non-empty
    pub fn query_list(self, name: &str, values: Option<&Vec<String>>) -> Self {
        match values {
            Some(values) if !values.is_empty() => self.query(name, values.join(",")),
            _ => self,
        }
    }

    /// Set a header, replacing any earlier value with the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set a header when present
    pub fn header_opt(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(value) => self.header(name, value.clone()),
            None => self,
        }
    }

    /// Apply the per-call headers from an options struct
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self = self.header(name.clone(), value.clone());
        }
        self
    }

    /// Set the `Accept` header
    pub fn accept(self, value: impl Into<String>) -> Self {
        self.header("Accept", value)
    }

    /// Serialize a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ServiceError::validation(format!("Failed to serialize request: {}", e)))?;
        self.body = RequestBody::Json(bytes);
        Ok(self)
    }

    /// Raw text body
    pub fn text(mut self, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text {
            content_type: content_type.into(),
            body: body.into(),
        };
        self
    }

    /// Raw binary body
    pub fn binary(mut self, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.body = RequestBody::Binary {
            content_type: content_type.into(),
            data,
        };
        self
    }

    /// Multipart body
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }
}

/// Render a path template such as `/v1/classifiers/{classifier_id}` onto a base URL
///
/// Each `{name}` is looked up in `params`; a missing or empty value is a
/// validation error.
pub fn render_url(base_url: &str, template: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ServiceError::configuration(format!("Invalid service URL '{}': {}", base_url, e)))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ServiceError::configuration(format!("Service URL cannot be a base: {}", base_url)))?;
        segments.pop_if_empty();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| ServiceError::validation(format!("{} must be provided", name)))?;
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    Ok(url)
}

/// Reject a required parameter that is empty
pub fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{} must be provided", name)));
    }
    Ok(())
}
