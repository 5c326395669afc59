//! The top-level Sendcloud client.
//!
//! [`Sendcloud`] owns the configuration and the HTTP client. Endpoints are
//! grouped into resource namespaces borrowed from it, e.g.
//! [`Sendcloud::parcels`] or [`Sendcloud::integrations`].

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpError, HttpRequest};
use crate::config::SendcloudConfig;
use crate::resources::{Brands, Integrations, Labels, Parcels, Returns, Shipping, User};
use crate::rest::{Endpoint, QueryParams};

/// Async client for the Sendcloud API.
///
/// # Thread Safety
///
/// `Sendcloud` is `Send + Sync`. Every operation takes `&self` and performs
/// a single request, so one client can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sendcloud_api::{ApiKey, ApiSecret, Sendcloud, SendcloudConfig};
///
/// let config = SendcloudConfig::builder()
///     .api_key(ApiKey::new("public-key")?)
///     .api_secret(ApiSecret::new("secret-key")?)
///     .build()?;
///
/// let sendcloud = Sendcloud::new(config);
/// let statuses = sendcloud.parcels().statuses().await?;
/// ```
#[derive(Debug)]
pub struct Sendcloud {
    config: SendcloudConfig,
    http_client: HttpClient,
}

// Verify Sendcloud is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sendcloud>();
};

impl Sendcloud {
    /// Creates a client from the given configuration.
    #[must_use]
    pub fn new(config: SendcloudConfig) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &SendcloudConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Parcel endpoints.
    #[must_use]
    pub const fn parcels(&self) -> Parcels<'_> {
        Parcels::new(self)
    }

    /// Return endpoints.
    #[must_use]
    pub const fn returns(&self) -> Returns<'_> {
        Returns::new(self)
    }

    /// Brand endpoints.
    #[must_use]
    pub const fn brands(&self) -> Brands<'_> {
        Brands::new(self)
    }

    /// Shipping method endpoints.
    #[must_use]
    pub const fn shipping(&self) -> Shipping<'_> {
        Shipping::new(self)
    }

    /// Label endpoints.
    #[must_use]
    pub const fn labels(&self) -> Labels<'_> {
        Labels::new(self)
    }

    /// User, invoice and sender address endpoints.
    #[must_use]
    pub const fn user(&self) -> User<'_> {
        User::new(self)
    }

    /// Integration and integration shipment endpoints.
    #[must_use]
    pub const fn integrations(&self) -> Integrations<'_> {
        Integrations::new(self)
    }

    /// Sends one request to `endpoint` and returns the decoded body.
    ///
    /// Empty query parameter sets are dropped so the path carries no `?`.
    pub(crate) async fn send(
        &self,
        endpoint: Endpoint,
        path: String,
        query: Option<QueryParams>,
        body: Option<Value>,
    ) -> Result<Value, HttpError> {
        let mut builder = HttpRequest::builder(endpoint.http_method, path);

        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            builder = builder.query(query);
        }

        let request = builder.build()?;
        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }
}
