//! Integration endpoints.
//!
//! Integrations connect a shop system to Sendcloud. Shipments pushed through
//! [`Integrations::upsert_shipments`] are matched on their
//! `external_order_id` and `external_shipment_id`: a known pair updates the
//! existing shipment, an unknown pair creates a new one.
//!
//! # Batch size
//!
//! The API accepts at most 100 shipments per upsert call. The limit is not
//! checked client-side; larger batches are rejected by the server.

use serde_json::Value;

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;
use crate::types::{IntegrationShipment, IntegrationShipmentQueryParameters, ShipmentDeletion};

const LIST: Endpoint = Endpoint::new(HttpMethod::Get, "integrations");
const UPDATE: Endpoint = Endpoint::new(HttpMethod::Put, "integrations/{id}");
const SHIPMENTS: Endpoint = Endpoint::new(HttpMethod::Get, "integrations/{id}/shipments");
const UPSERT_SHIPMENTS: Endpoint = Endpoint::new(HttpMethod::Post, "integrations/{id}/shipments");
const DELETE_SHIPMENTS: Endpoint =
    Endpoint::new(HttpMethod::Post, "integrations/{id}/shipments/delete");

/// Integration endpoints, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct Integrations<'a> {
    client: &'a Sendcloud,
}

impl<'a> Integrations<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Lists the integrations of the account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self) -> Result<Value, HttpError> {
        self.client
            .send(LIST, LIST.template.to_string(), None, None)
            .await
    }

    /// Updates an integration. `changes` is sent as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(&self, id: u64, changes: Value) -> Result<Value, HttpError> {
        self.client
            .send(UPDATE, UPDATE.path(&[("id", id)]), None, Some(changes))
            .await
    }

    /// Lists the shipments of an integration, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn shipments(
        &self,
        id: u64,
        params: Option<&IntegrationShipmentQueryParameters>,
    ) -> Result<Value, HttpError> {
        let query = params.map(IntegrationShipmentQueryParameters::to_query_params);
        self.client
            .send(SHIPMENTS, SHIPMENTS.path(&[("id", id)]), query, None)
            .await
    }

    /// Creates or updates shipments of an integration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if a shipment cannot be
    /// serialized, or another [`HttpError`] if the request fails.
    pub async fn upsert_shipments(
        &self,
        id: u64,
        shipments: &[IntegrationShipment],
    ) -> Result<Value, HttpError> {
        let body = serde_json::to_value(shipments)?;
        self.client
            .send(
                UPSERT_SHIPMENTS,
                UPSERT_SHIPMENTS.path(&[("id", id)]),
                None,
                Some(body),
            )
            .await
    }

    /// Deletes a shipment of an integration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shipments(
        &self,
        id: u64,
        deletion: &ShipmentDeletion,
    ) -> Result<Value, HttpError> {
        let body = serde_json::to_value(deletion)?;
        self.client
            .send(
                DELETE_SHIPMENTS,
                DELETE_SHIPMENTS.path(&[("id", id)]),
                None,
                Some(body),
            )
            .await
    }
}
