//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Sendcloud public API key.
///
/// Sent as the username of the basic authentication pair on every request.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::ApiKey;
///
/// let key = ApiKey::new("my-public-key").unwrap();
/// assert_eq!(key.as_ref(), "my-public-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Sendcloud secret API key.
///
/// Sent as the password of the basic authentication pair. The `Debug`
/// implementation masks the value, displaying only `ApiSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated API base URL.
///
/// Request paths are appended directly to this URL, so it is always stored
/// with a trailing `/`.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/api/v2").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/api/v2/");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Sendcloud API endpoint.
    pub const SENDCLOUD: &'static str = "https://panel.sendcloud.sc/api/v2/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let scheme_end = "https".len();
        let host_start = scheme_end + 3;
        Self {
            url: Self::SENDCLOUD.to_string(),
            scheme_end,
            host_start,
            host_end: host_start + "panel.sendcloud.sc".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
