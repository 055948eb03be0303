//! Response envelope

use reqwest::header::HeaderMap;

/// Decoded result of a successful call together with its status and headers
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    status_code: u16,
    headers: HeaderMap,
    result: T,
}

impl<T> DetailedResponse<T> {
    /// Wrap a decoded result
    pub fn new(status_code: u16, headers: HeaderMap, result: T) -> Self {
        Self {
            status_code,
            headers,
            result,
        }
    }

    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single response header as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded result
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Take ownership of the decoded result
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transform the result, keeping status and headers
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}
