//! User, invoice and sender address endpoints.

use serde_json::Value;

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;

const GET: Endpoint = Endpoint::new(HttpMethod::Get, "user");
const INVOICES: Endpoint = Endpoint::new(HttpMethod::Get, "user/invoices");
const INVOICE: Endpoint = Endpoint::new(HttpMethod::Get, "user/invoices/{id}");
const SENDER_ADDRESSES: Endpoint = Endpoint::new(HttpMethod::Get, "user/addresses/sender");
const SENDER_ADDRESS: Endpoint = Endpoint::new(HttpMethod::Get, "user/addresses/sender/{id}");

/// Endpoints of the authenticated user, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct User<'a> {
    client: &'a Sendcloud,
}

impl<'a> User<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Retrieves the user the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self) -> Result<Value, HttpError> {
        self.client
            .send(GET, GET.template.to_string(), None, None)
            .await
    }

    /// Lists the user's invoices.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn invoices(&self) -> Result<Value, HttpError> {
        self.client
            .send(INVOICES, INVOICES.template.to_string(), None, None)
            .await
    }

    /// Retrieves a single invoice.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn invoice(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(INVOICE, INVOICE.path(&[("id", id)]), None, None)
            .await
    }

    /// Lists the user's sender addresses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn sender_addresses(&self) -> Result<Value, HttpError> {
        self.client
            .send(
                SENDER_ADDRESSES,
                SENDER_ADDRESSES.template.to_string(),
                None,
                None,
            )
            .await
    }

    /// Retrieves a single sender address.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn sender_address(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(SENDER_ADDRESS, SENDER_ADDRESS.path(&[("id", id)]), None, None)
            .await
    }
}
