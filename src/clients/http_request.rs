//! HTTP request types for the Sendcloud API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Sendcloud API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::{QueryParams, QueryValue};

/// HTTP methods used by the Sendcloud API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent to the Sendcloud API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "parcels")
///     .query_param("order_number", "ORD-1001")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "parcels/42/cancel")
///     .body(json!({}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters appended to the path, in order.
    pub query: Option<QueryParams>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<QueryParams>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "parcels/statuses")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "parcels/statuses");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "labels")
            .body(json!({"label": {"parcels": [1, 2]}}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(request.body.is_some());
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "parcels").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_for_put() {
        let result = HttpRequest::builder(HttpMethod::Put, "integrations/1").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let request = HttpRequest {
            http_method: HttpMethod::Get,
            path: "parcels".to_string(),
            body: Some(json!({"key": "value"})),
            body_type: None,
            query: None,
        };

        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_builder_keeps_query_param_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "shipping_methods")
            .query_param("sender_address", "all")
            .query_param("is_return", true)
            .build()
            .unwrap();

        let query = request.query.unwrap();
        let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["sender_address", "is_return"]);
        assert_eq!(query.get("is_return"), Some(&QueryValue::Bool(true)));
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
    }
}
