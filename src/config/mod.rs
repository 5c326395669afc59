//! Configuration types for the Sendcloud API client.
//!
//! # Overview
//!
//! - [`SendcloudConfig`]: credentials and connection settings owned by a client
//! - [`SendcloudConfigBuilder`]: a builder for constructing [`SendcloudConfig`] instances
//! - [`ApiKey`]: a validated public API key
//! - [`ApiSecret`]: a validated secret API key with masked debug output
//! - [`BaseUrl`]: a validated API base URL
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::{SendcloudConfig, ApiKey, ApiSecret};
//!
//! let config = SendcloudConfig::builder()
//!     .api_key(ApiKey::new("my-public-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, BaseUrl};

use crate::error::ConfigError;

/// Configuration for a Sendcloud client.
///
/// Holds the credential pair sent as basic authentication on every request,
/// the Sendcloud Plus flag and the API base URL. A configuration is set once
/// at client construction and only read afterwards.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::{SendcloudConfig, ApiKey, ApiSecret};
///
/// let config = SendcloudConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .sendcloud_plus(true)
///     .build()
///     .unwrap();
///
/// assert!(config.is_sendcloud_plus());
/// ```
#[derive(Clone, Debug)]
pub struct SendcloudConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    sendcloud_plus: bool,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl SendcloudConfig {
    /// Creates a new builder for constructing a `SendcloudConfig`.
    #[must_use]
    pub fn builder() -> SendcloudConfigBuilder {
        SendcloudConfigBuilder::new()
    }

    /// Returns the public API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the secret API key.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns whether the account uses Sendcloud Plus.
    #[must_use]
    pub const fn is_sendcloud_plus(&self) -> bool {
        self.sendcloud_plus
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SendcloudConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SendcloudConfig>();
};

/// Builder for constructing [`SendcloudConfig`] instances.
///
/// Required fields are `api_key` and `api_secret`.
///
/// # Defaults
///
/// - `sendcloud_plus`: `false`
/// - `base_url`: `https://panel.sendcloud.sc/api/v2/`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SendcloudConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    sendcloud_plus: Option<bool>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl SendcloudConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the secret API key (required).
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Marks the account as a Sendcloud Plus account.
    #[must_use]
    pub const fn sendcloud_plus(mut self, enabled: bool) -> Self {
        self.sendcloud_plus = Some(enabled);
        self
    }

    /// Overrides the API base URL.
    ///
    /// Mostly useful for pointing the client at a mock server in tests.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SendcloudConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` are not set.
    pub fn build(self) -> Result<SendcloudConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self
            .api_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret",
            })?;

        Ok(SendcloudConfig {
            api_key,
            api_secret,
            sendcloud_plus: self.sendcloud_plus.unwrap_or(false),
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
