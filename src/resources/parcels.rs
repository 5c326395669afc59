//! Parcel endpoints.
//!
//! Covers creating, updating and cancelling parcels, listing them with
//! [`ParcelQueryParameters`], and downloading their documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use sendcloud_api::{DocumentOptions, DocumentType, FileFormat};
//!
//! let label = sendcloud
//!     .parcels()
//!     .document(1234, DocumentType::Label, Some(&DocumentOptions::new(FileFormat::Zpl).dpi(300)))
//!     .await?;
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::{normalize_document_options, DocumentOptions, DocumentType, Endpoint};
use crate::types::ParcelQueryParameters;

const LIST: Endpoint = Endpoint::new(HttpMethod::Get, "parcels");
const GET: Endpoint = Endpoint::new(HttpMethod::Get, "parcels/{id}");
const CREATE: Endpoint = Endpoint::new(HttpMethod::Post, "parcels");
const UPDATE: Endpoint = Endpoint::new(HttpMethod::Put, "parcels");
const CANCEL: Endpoint = Endpoint::new(HttpMethod::Post, "parcels/{id}/cancel");
const RETURN_PORTAL_URL: Endpoint = Endpoint::new(HttpMethod::Get, "parcels/{id}/return_portal_url");
const DOCUMENT: Endpoint = Endpoint::new(HttpMethod::Get, "parcels/{id}/documents/{type}");
const STATUSES: Endpoint = Endpoint::new(HttpMethod::Get, "parcels/statuses");

/// Parcel endpoints, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct Parcels<'a> {
    client: &'a Sendcloud,
}

impl<'a> Parcels<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Lists parcels, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, params: Option<&ParcelQueryParameters>) -> Result<Value, HttpError> {
        let query = params.map(ParcelQueryParameters::to_query_params);
        self.client
            .send(LIST, LIST.template.to_string(), query, None)
            .await
    }

    /// Retrieves a single parcel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(GET, GET.path(&[("id", id)]), None, None)
            .await
    }

    /// Creates one or more parcels.
    ///
    /// The body is sent as given; wrap a single [`Parcel`](crate::types::Parcel)
    /// as `{"parcel": ..}` or several as `{"parcels": [..]}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `body` cannot be serialized,
    /// or another [`HttpError`] if the request fails.
    pub async fn create<B>(&self, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.client
            .send(CREATE, CREATE.template.to_string(), None, Some(body))
            .await
    }

    /// Updates a parcel.
    ///
    /// `changes` is merged into `{"parcel": {"id": id}}`. Keys in `changes`
    /// win over the `id`; anything other than a JSON object is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(&self, id: u64, changes: Value) -> Result<Value, HttpError> {
        let body = update_body(id, changes);
        self.client
            .send(UPDATE, UPDATE.template.to_string(), None, Some(body))
            .await
    }

    /// Cancels an announced parcel, or deletes an unannounced one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn cancel(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(
                CANCEL,
                CANCEL.path(&[("id", id)]),
                None,
                Some(Value::Object(Map::new())),
            )
            .await
    }

    /// Retrieves the return portal URL of a parcel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn return_portal_url(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(
                RETURN_PORTAL_URL,
                RETURN_PORTAL_URL.path(&[("id", id)]),
                None,
                None,
            )
            .await
    }

    /// Downloads a document of a parcel.
    ///
    /// `options` go through [`normalize_document_options`] first, so the
    /// request always carries a format and DPI the API accepts. Binary
    /// documents come back as `{"raw_body": ..}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn document(
        &self,
        id: u64,
        document_type: DocumentType,
        options: Option<&DocumentOptions>,
    ) -> Result<Value, HttpError> {
        let normalized = normalize_document_options(options);
        let path = DOCUMENT.path(&[("id", id.to_string()), ("type", document_type.to_string())]);
        self.client
            .send(DOCUMENT, path, Some(normalized.to_query_params()), None)
            .await
    }

    /// Lists every parcel status with its ID and message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn statuses(&self) -> Result<Value, HttpError> {
        self.client
            .send(STATUSES, STATUSES.template.to_string(), None, None)
            .await
    }
}

fn update_body(id: u64, changes: Value) -> Value {
    let mut parcel = Map::new();
    parcel.insert("id".to_string(), Value::from(id));
    if let Value::Object(changes) = changes {
        parcel.extend(changes);
    }

    let mut body = Map::new();
    body.insert("parcel".to_string(), Value::Object(parcel));
    Value::Object(body)
}
