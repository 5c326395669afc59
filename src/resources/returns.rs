//! Return endpoints.

use serde_json::Value;

use crate::client::Sendcloud;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;

const LIST: Endpoint = Endpoint::new(HttpMethod::Get, "returns");
const GET: Endpoint = Endpoint::new(HttpMethod::Get, "returns/{id}");

/// Return endpoints, borrowed from a [`Sendcloud`] client.
#[derive(Clone, Debug)]
pub struct Returns<'a> {
    client: &'a Sendcloud,
}

impl<'a> Returns<'a> {
    pub(crate) const fn new(client: &'a Sendcloud) -> Self {
        Self { client }
    }

    /// Lists returns.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self) -> Result<Value, HttpError> {
        self.client
            .send(LIST, LIST.template.to_string(), None, None)
            .await
    }

    /// Retrieves a single return.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Value, HttpError> {
        self.client
            .send(GET, GET.path(&[("id", id)]), None, None)
            .await
    }
}
