//! Label endpoints.

use serde_json::{json, Value};

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;
use crate::types::LabelParcelId;

const GET: Endpoint = Endpoint::new(HttpMethod::Get, "labels/{id}");
const BULK: Endpoint = Endpoint::new(HttpMethod::Post, "labels");

/// Label endpoints, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    client: &'a Sendcloud,
}

impl<'a> Labels<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Retrieves the label links of a parcel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, parcel_id: u64) -> Result<Value, HttpError> {
        self.client
            .send(GET, GET.path(&[("id", parcel_id)]), None, None)
            .await
    }

    /// Requests one combined label document for several parcels.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn bulk(&self, parcel_ids: &[LabelParcelId]) -> Result<Value, HttpError> {
        let parcels = serde_json::to_value(parcel_ids)?;
        let body = json!({ "label": { "parcels": parcels } });
        self.client
            .send(BULK, BULK.template.to_string(), None, Some(body))
            .await
    }
}
