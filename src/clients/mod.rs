//! HTTP client types for Sendcloud API communication.
//!
//! This module provides the transport layer underneath the resource
//! namespaces. It builds requests, attaches basic-auth credentials, sends
//! them and decodes JSON responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a decoded response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT)
//! - [`DataType`]: content types for request bodies
//!
//! # Failure Behavior
//!
//! Requests are sent once. Non-2xx responses become
//! [`HttpError::Response`] and transport failures become
//! [`HttpError::Network`]; neither is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
