//! HTTP response type for the Sendcloud API client.

use std::collections::HashMap;

/// A decoded response from the Sendcloud API.
///
/// Header names are stored lowercase; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = HttpResponse::new(200, headers, serde_json::json!({"parcels": []}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Consumes the response, returning the decoded body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_only() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
        for code in [199, 301, 400, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, json!({}));

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.request_id().is_none());
    }

    #[test]
    fn test_into_body_returns_body_unchanged() {
        let body = json!({"parcel": {"id": 1, "status": {"id": 1000}}});
        let response = HttpResponse::new(200, HashMap::new(), body.clone());
        assert_eq!(response.into_body(), body);
    }
}
