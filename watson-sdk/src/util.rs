//! Utility module for common functionality
//!
//! This module provides common utility functions used across the Watson SDK.

use once_cell::sync::Lazy;
use regex::Regex;

/// Redaction rules applied before anything credential-shaped reaches a log line
static REDACTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"Bearer [A-Za-z0-9\-_.=]+", "Bearer [REDACTED]"),
        (r"Basic [A-Za-z0-9+/=]+", "Basic [REDACTED]"),
        (r"(?i)api[_-]?key[=:]\s*[A-Za-z0-9\-_]+", "apikey=[REDACTED]"),
        (r"(?i)(access|refresh)_token[=:]\s*[^\s&]+", "${1}_token=[REDACTED]"),
        (r"(?i)password[=:]\s*[^\s&]+", "password=[REDACTED]"),
        (r"(?i)user_secret[=:]\s*[^\s&]+", "user_secret=[REDACTED]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Truncate a string to a maximum length, adding ellipsis if truncated
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let keep = if max_len <= 3 { max_len } else { max_len - 3 };
    let mut end = keep;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    if max_len <= 3 {
        s[..end].to_string()
    } else {
        format!("{}...", &s[..end])
    }
}

/// Sanitize a string for logging (remove sensitive data patterns)
pub fn sanitize_for_logging(s: &str) -> String {
    let mut result = s.to_string();
    for (re, replacement) in REDACTIONS.iter() {
        result = re.replace_all(&result, *replacement).to_string();
    }
    result
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// True when a credential or URL was pasted with its surrounding braces or quotes
pub fn has_bad_first_or_last_char(s: &str) -> bool {
    const BAD: [char; 3] = ['{', '}', '"'];
    s.starts_with(BAD) || s.ends_with(BAD)
}
