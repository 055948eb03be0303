//! Error mapping for Watson API responses
//!
//! Converts non-2xx HTTP responses into the normalized ServiceError type.
//! The error message is always the raw response body; the Watson error text
//! found inside a JSON body is recorded separately on the context.

use reqwest::StatusCode;
use serde_json::Value;

use super::{ErrorContext, ServiceError};

/// Keys Watson services use for the human-readable error text
const MESSAGE_KEYS: [&str; 5] = ["error", "message", "errorMessage", "description", "code_description"];

/// Extract the Watson error message from a JSON error body
///
/// Services disagree on the shape: `{"error": "..."}`, `{"error": {"message": "..."}}`,
/// `{"errorMessage": "..."}` and `{"description": "..."}` all occur in the wild.
pub fn extract_watson_message(json: &Value) -> Option<String> {
    for key in MESSAGE_KEYS {
        match json.get(key) {
            Some(Value::String(message)) if !message.is_empty() => {
                return Some(message.clone());
            }
            Some(nested @ Value::Object(_)) => {
                if let Some(message) = extract_watson_message(nested) {
                    return Some(message);
                }
            }
            _ => {}
        }
    }
    None
}

/// Map a non-2xx Watson HTTP response to a ServiceError
pub fn map_http_error(
    status: StatusCode,
    body: &str,
    context: &mut ErrorContext,
) -> ServiceError {
    context.status_code = Some(status.as_u16());
    context.body = Some(body.to_string());

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = extract_watson_message(&json) {
            context.error_code = Some(message);
        }
    }

    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string())
    } else {
        body.to_string()
    };

    match status {
        StatusCode::UNAUTHORIZED => ServiceError::authentication(message),
        StatusCode::FORBIDDEN => ServiceError::authorization(message),
        StatusCode::NOT_FOUND => ServiceError::not_found(message),
        StatusCode::TOO_MANY_REQUESTS => ServiceError::rate_limit(message),
        StatusCode::BAD_REQUEST => ServiceError::validation(message),
        _ => ServiceError::service(message),
    }
}

/// Helper function to classify HTTP errors by category
pub fn classify_http_error(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "validation",
        401 => "authentication",
        403 => "authorization",
        404 => "not_found",
        408 | 504 => "timeout",
        429 => "rate_limit",
        500..=599 => "server",
        _ => "unknown",
    }
}
