//! Error types for content-hub
//!
//! This module provides error handling for the service, including:
//! - Domain-specific error types ([`Error`], [`FetchError`])
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for content-hub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for content-hub
#[derive(Debug, Error)]
pub enum Error {
    /// The inbound request was invalid (e.g. empty uid list); no remote
    /// calls were attempted
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A remote page fetch failed
    ///
    /// Recovered locally by the paginator and never surfaced as an overall
    /// request failure; present here so the fetch layer can propagate it
    /// with full context.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g. "remote.endpoint")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error outside the per-page fetch path
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Failure fetching one page of one collection
///
/// Every variant carries the collection uid and the page URL so a single
/// log line identifies exactly which fetch broke.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, ...)
    #[error("request for collection {uid} failed at {url}: {source}")]
    Request {
        /// Collection uid being paginated
        uid: String,
        /// Page URL that failed
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered with a non-success status
    #[error("collection {uid} returned HTTP {status} at {url}")]
    Status {
        /// Collection uid being paginated
        uid: String,
        /// Page URL that failed
        url: String,
        /// HTTP status code returned
        status: u16,
    },

    /// The response body could not be decoded as a listing page
    #[error("collection {uid} returned an unparseable body at {url}: {source}")]
    Decode {
        /// Collection uid being paginated
        uid: String,
        /// Page URL that failed
        url: String,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Collection uid this failure belongs to.
    #[must_use]
    pub fn uid(&self) -> &str {
        match self {
            FetchError::Request { uid, .. }
            | FetchError::Status { uid, .. }
            | FetchError::Decode { uid, .. } => uid,
        }
    }

    /// Page URL this failure occurred at.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// API error response format
///
/// Returned by API endpoints when an infrastructure error occurs.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_request",
///     "message": "invalid request: No UIDs provided"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "invalid_request", "network_error")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::InvalidRequest(_) => 400,
            Error::Config { .. } => 400,

            // 502 Bad Gateway - External service errors
            Error::Fetch(_) => 502,
            Error::Network(_) => 502,

            // 500 Internal Server Error - Server-side issues
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Other(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::InvalidRequest(_) => "invalid_request",
            Error::Config { .. } => "config_error",
            Error::Fetch(e) => match e {
                FetchError::Request { .. } => "fetch_request_failed",
                FetchError::Status { .. } => "fetch_bad_status",
                FetchError::Decode { .. } => "fetch_decode_failed",
            },
            Error::Io(_) => "io_error",
            Error::Network(_) => "network_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
            Error::Other(_) => "internal_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::Fetch(fetch) => Some(serde_json::json!({
                "uid": fetch.uid(),
                "url": fetch.url(),
            })),
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            _ => None,
        };

        match details {
            Some(details) => ApiError::with_details(code, message, details),
            None => ApiError::new(code, message),
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let error = Error::InvalidRequest("No UIDs provided".to_string());
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.error_code(), "invalid_request");
    }

    #[test]
    fn fetch_error_maps_to_502() {
        let error = Error::Fetch(FetchError::Status {
            uid: "ABC".to_string(),
            url: "https://remote.example/page".to_string(),
            status: 503,
        });
        assert_eq!(error.status_code(), 502);
        assert_eq!(error.error_code(), "fetch_bad_status");
    }

    #[test]
    fn other_error_maps_to_500() {
        let error = Error::Other("boom".to_string());
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.error_code(), "internal_error");
    }

    #[test]
    fn fetch_error_carries_uid_and_url_context() {
        let error = FetchError::Status {
            uid: "ABC".to_string(),
            url: "https://remote.example/page".to_string(),
            status: 404,
        };
        assert_eq!(error.uid(), "ABC");
        assert_eq!(error.url(), "https://remote.example/page");
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn api_error_from_fetch_includes_details() {
        let error = Error::Fetch(FetchError::Status {
            uid: "XYZ".to_string(),
            url: "https://remote.example/items".to_string(),
            status: 500,
        });
        let api_error: ApiError = error.into();

        assert_eq!(api_error.error.code, "fetch_bad_status");
        let details = api_error.error.details.unwrap();
        assert_eq!(details["uid"], "XYZ");
        assert_eq!(details["url"], "https://remote.example/items");
    }

    #[test]
    fn api_error_skips_absent_details_in_json() {
        let api_error = ApiError::new("invalid_request", "No UIDs provided");
        let json = serde_json::to_value(&api_error).unwrap();
        assert!(json["error"].get("details").is_none());
        assert_eq!(json["error"]["code"], "invalid_request");
    }
}
