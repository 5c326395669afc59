//! # Sendcloud API Rust Client
//!
//! An async client for the Sendcloud shipping API, providing type-safe
//! configuration, basic authentication and typed request models for parcels,
//! labels, shipping methods and integrations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SendcloudConfig`] and [`SendcloudConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - The [`Sendcloud`] client with one namespace per resource
//! - Request models and typed query filters in [`types`]
//! - Document format/DPI normalization via [`normalize_document_options`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sendcloud_api::{ApiKey, ApiSecret, Sendcloud, SendcloudConfig};
//!
//! let config = SendcloudConfig::builder()
//!     .api_key(ApiKey::new("your-public-key").unwrap())
//!     .api_secret(ApiSecret::new("your-secret-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let sendcloud = Sendcloud::new(config);
//! assert_eq!(
//!     sendcloud.http_client().base_url(),
//!     "https://panel.sendcloud.sc/api/v2/"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! Every operation sends one request and returns the decoded JSON body:
//!
//! ```rust,ignore
//! use sendcloud_api::types::{Parcel, ParcelQueryParameters};
//!
//! let parcel = Parcel {
//!     name: "John Doe".to_string(),
//!     address: "Stadhuisplein".to_string(),
//!     house_number: Some("10".to_string()),
//!     city: "Eindhoven".to_string(),
//!     postal_code: "5611 EM".to_string(),
//!     country: "NL".to_string(),
//!     ..Default::default()
//! };
//! let created = sendcloud
//!     .parcels()
//!     .create(&serde_json::json!({ "parcel": parcel }))
//!     .await?;
//!
//! let filters = ParcelQueryParameters {
//!     order_number: Some("ORD-1001".to_string()),
//!     ..Default::default()
//! };
//! let parcels = sendcloud.parcels().list(Some(&filters)).await?;
//! ```
//!
//! ## Documents
//!
//! Requested formats and resolutions are coerced into combinations the API
//! accepts before a document is fetched:
//!
//! ```rust
//! use sendcloud_api::{normalize_document_options, DocumentOptions, FileFormat};
//!
//! let options = DocumentOptions::new(FileFormat::Zpl).dpi(100);
//! let normalized = normalize_document_options(Some(&options));
//!
//! assert_eq!(normalized.format, FileFormat::Zpl);
//! assert_eq!(normalized.dpi, 203);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: Nothing is retried, cached or paginated
//! - **Async-first**: Designed for use with the Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod rest;
pub mod types;

pub use client::Sendcloud;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiSecret, BaseUrl, SendcloudConfig, SendcloudConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export request building blocks
pub use rest::{
    normalize_document_options, serialize_query, DocumentOptions, DocumentType, FileFormat,
    NormalizedDocumentOptions, QueryParams, QueryValue,
};
