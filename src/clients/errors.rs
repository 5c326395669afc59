//! HTTP-specific error types for the Sendcloud API client.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! Errors are surfaced as they happen. There is no retry or translation
//! layer, so a transport failure reaches the caller as
//! [`HttpError::Network`] wrapping the original `reqwest::Error`.
//!
//! # Example
//!
//! ```rust,ignore
//! use sendcloud_api::HttpError;
//!
//! match client.parcels().get(42).await {
//!     Ok(body) => println!("Parcel: {body}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("Request not sent: {other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the raw response body so Sendcloud's own error payload
/// (`{"error": {"code": ..., "message": ...}}`) is preserved.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":{"code":404,"message":"Not found"}}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body text.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent if:
/// - a POST or PUT request has no body
/// - a body is provided without a `body_type`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_and_body() {
        let error = HttpResponseError {
            code: 401,
            message: r#"{"error":{"code":401,"message":"Invalid username/password."}}"#
                .to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.starts_with("HTTP 401: "));
        assert!(message.contains("Invalid username/password."));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_is_transparent_over_response_error() {
        let error = HttpError::from(HttpResponseError {
            code: 500,
            message: "oops".to_string(),
            error_reference: Some("req-1".to_string()),
        });
        assert_eq!(error.to_string(), "HTTP 500: oops");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
