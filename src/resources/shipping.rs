//! Shipping method endpoints.

use serde_json::Value;

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;
use crate::types::ShippingMethodsQueryParameters;

const METHODS: Endpoint = Endpoint::new(HttpMethod::Get, "shipping_methods");
const METHOD: Endpoint = Endpoint::new(HttpMethod::Get, "shipping_methods/{id}");

/// Shipping method endpoints, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct Shipping<'a> {
    client: &'a Sendcloud,
}

impl<'a> Shipping<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Lists the shipping methods available to the account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn methods(
        &self,
        params: Option<&ShippingMethodsQueryParameters>,
    ) -> Result<Value, HttpError> {
        let query = params.map(ShippingMethodsQueryParameters::to_query_params);
        self.client
            .send(METHODS, METHODS.template.to_string(), query, None)
            .await
    }

    /// Retrieves a single shipping method.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn method(
        &self,
        id: u64,
        params: Option<&ShippingMethodsQueryParameters>,
    ) -> Result<Value, HttpError> {
        let query = params.map(ShippingMethodsQueryParameters::to_query_params);
        self.client
            .send(METHOD, METHOD.path(&[("id", id)]), query, None)
            .await
    }
}
