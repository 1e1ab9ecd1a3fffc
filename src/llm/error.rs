//! Typed errors for language-model calls
//!
//! The pipeline treats every variant the same way (abort the generation);
//! the variants exist so callers and logs can tell auth, quota and network
//! failures apart without string matching.

use thiserror::Error;

/// Language-model call errors with typed variants
#[derive(Debug, Error)]
pub enum ModelError {
    /// Credential is invalid or rejected (HTTP 401/403)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Quota or rate limit exceeded (HTTP 429)
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Malformed request (HTTP 400)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Server-side error (HTTP 5xx)
    #[error("service error: {0}")]
    ServiceError(String),

    /// Connection, TLS or timeout failure
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but carried no usable candidate text
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ModelError {
    /// Convert an HTTP status code and error body into a typed error
    pub fn from_http_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => ModelError::Unauthorized(body),
            429 => ModelError::RateLimited(body),
            400 => ModelError::BadRequest(body),
            500..=599 => ModelError::ServiceError(body),
            code => ModelError::ServiceError(format!("HTTP {code}: {body}")),
        }
    }

    /// Convert a transport-level failure into a typed error
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ModelError::Network(format!("request timeout: {e}"))
        } else if e.is_connect() {
            ModelError::Network(format!("connection failed: {e}"))
        } else if let Some(status) = e.status() {
            Self::from_http_status(status, e.to_string())
        } else {
            ModelError::Network(e.to_string())
        }
    }
}
