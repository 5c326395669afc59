//! Endpoint definitions and path building.
//!
//! Every Sendcloud endpoint is described by an [`Endpoint`] constant holding
//! its HTTP method and a path template with `{name}` placeholders.
//! [`build_path`] interpolates the placeholders from caller-supplied values.
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::rest::{build_path, Endpoint};
//! use sendcloud_api::HttpMethod;
//!
//! const PARCEL_DOCUMENT: Endpoint =
//!     Endpoint::new(HttpMethod::Get, "parcels/{id}/documents/{type}");
//!
//! let path = build_path(PARCEL_DOCUMENT.template, &[("id", "42"), ("type", "label")]);
//! assert_eq!(path, "parcels/42/documents/label");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// An HTTP method paired with a path template.
///
/// Templates are relative to the API base URL and use `{name}` placeholders:
/// - `parcels/{id}` - single placeholder
/// - `parcels/{id}/documents/{type}` - multiple placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// The HTTP method for this endpoint.
    pub http_method: HttpMethod,
    /// The path template with `{name}` placeholders.
    pub template: &'static str,
}

impl Endpoint {
    /// Creates a new `Endpoint`.
    ///
    /// This is a `const fn` so endpoints can be declared as constants.
    #[must_use]
    pub const fn new(http_method: HttpMethod, template: &'static str) -> Self {
        Self {
            http_method,
            template,
        }
    }

    /// Builds the concrete path for this endpoint.
    #[must_use]
    pub fn path<V: Display>(&self, values: &[(&str, V)]) -> String {
        build_path(self.template, values)
    }
}

/// Builds a path from a template by interpolating placeholder values.
///
/// Replaces each `{name}` placeholder with the matching value's `Display`
/// output. Values are inserted verbatim; placeholders without a value are
/// left untouched.
#[must_use]
pub fn build_path<V: Display>(template: &str, values: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in values {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_stores_fields_correctly() {
        let endpoint = Endpoint::new(HttpMethod::Post, "parcels/{id}/cancel");

        assert_eq!(endpoint.http_method, HttpMethod::Post);
        assert_eq!(endpoint.template, "parcels/{id}/cancel");
    }

    #[test]
    fn test_path_template_interpolation_single_value() {
        let result = build_path("parcels/{id}", &[("id", "123")]);
        assert_eq!(result, "parcels/123");
    }

    #[test]
    fn test_path_template_interpolation_multiple_values() {
        let result = build_path(
            "parcels/{id}/documents/{type}",
            &[("id", "123"), ("type", "cn23-default")],
        );
        assert_eq!(result, "parcels/123/documents/cn23-default");
    }

    #[test]
    fn test_build_path_handles_numeric_ids() {
        let result = build_path("user/invoices/{id}", &[("id", 987_654u64)]);
        assert_eq!(result, "user/invoices/987654");
    }

    #[test]
    fn test_build_path_handles_missing_values() {
        let values: [(&str, &str); 0] = [];

        let result = build_path("returns/{id}", &values);
        assert_eq!(result, "returns/{id}");
    }

    #[test]
    fn test_endpoint_path_builds_from_template() {
        const SHIPMENTS: Endpoint = Endpoint::new(HttpMethod::Get, "integrations/{id}/shipments");

        assert_eq!(SHIPMENTS.path(&[("id", 7)]), "integrations/7/shipments");
    }
}
