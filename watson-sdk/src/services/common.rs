//! Common utilities for service clients
//!
//! This module provides shared functionality for all service clients.

use std::fmt;

use log::warn;
use reqwest::header::HeaderMap;

use crate::error::mapping::map_http_error;
use crate::error::{ErrorContext, ServiceError};
use crate::util::{sanitize_for_logging, truncate_string};

/// Header carrying Watson's request correlation id
pub const TRANSACTION_ID_HEADER: &str = "X-Global-Transaction-Id";

/// UserAgent structure for identifying the client to Watson
#[derive(Debug, Clone)]
pub struct UserAgent {
    /// SDK name
    pub app_name: String,

    /// Version string
    pub version: String,

    /// Optional extra info, the operating system by default
    pub extra: Option<String>,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            app_name: "watson-apis-rust-sdk".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extra: Some(std::env::consts::OS.to_string()),
        }
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.app_name, self.version)?;

        if let Some(ref extra) = self.extra {
            write!(f, " ({})", extra)?;
        }

        Ok(())
    }
}

/// Create error context for a failed call
pub fn create_error_context(service_name: &str, endpoint: &str, headers: &HeaderMap) -> ErrorContext {
    let mut context = ErrorContext::for_service(service_name)
        .endpoint(endpoint)
        .headers(headers.clone());

    if let Some(id) = headers.get(TRANSACTION_ID_HEADER).and_then(|v| v.to_str().ok()) {
        context = context.request_id(id);
    }

    context
}

/// Turn a non-2xx response into a ServiceError carrying the raw body
pub async fn parse_error_response(
    service_name: &str,
    endpoint: &str,
    response: reqwest::Response,
) -> ServiceError {
    let status = response.status();
    let mut context = create_error_context(service_name, endpoint, response.headers());

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => format!("Failed to read error response: {}", e),
    };

    warn!(
        "{} returned {} for {}: {}",
        service_name,
        status,
        endpoint,
        sanitize_for_logging(&truncate_string(&body, 256))
    );

    map_http_error(status, &body, &mut context).with_context(context)
}
