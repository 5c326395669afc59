//! Error types for the Sendcloud API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Sendcloud public API key.")]
    EmptyApiKey,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid Sendcloud secret API key.")]
    EmptyApiSecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://panel.sendcloud.sc/api/v2/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// File format name is not one of `pdf`, `zpl` or `png`.
    #[error("Unknown file format '{format}'. Expected one of: pdf, zpl, png.")]
    UnknownFileFormat {
        /// The unrecognized format name.
        format: String,
    },
}
