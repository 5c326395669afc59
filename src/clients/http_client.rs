//! HTTP client for Sendcloud API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Sendcloud API.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::SendcloudConfig;
use crate::rest::serialize_query;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Sendcloud API.
///
/// The client handles:
/// - URL construction from the configured base URL, the request path and
///   its query string
/// - Default headers including User-Agent and basic authentication
/// - JSON decoding of response bodies
///
/// Each call to [`request`](Self::request) performs exactly one HTTP round
/// trip. Nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sendcloud_api::{SendcloudConfig, ApiKey, ApiSecret};
/// use sendcloud_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = SendcloudConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "parcels/statuses")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL, always ending in `/`.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SendcloudConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Sendcloud API Library v{SDK_VERSION} | Rust {rust_version}");

        let credentials = format!(
            "{}:{}",
            config.api_key().as_ref(),
            config.api_secret().as_ref()
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to.
    ///
    /// The query string is appended verbatim, see
    /// [`serialize_query`](crate::rest::serialize_query).
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            request.path.trim_start_matches('/'),
            serialize_query(request.query.as_ref())
        )
    }

    /// Sends an HTTP request to the Sendcloud API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Sendcloud request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = HttpResponse::new(code, res_headers, Self::decode_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        let error_reference = response.request_id().map(String::from);
        tracing::warn!(
            code,
            request_id = error_reference.as_deref().unwrap_or("-"),
            "Sendcloud request to {} failed",
            request.path
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: body_text,
            error_reference,
        }))
    }

    /// Decodes a response body, tolerating empty and non-JSON bodies.
    fn decode_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
