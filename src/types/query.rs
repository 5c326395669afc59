//! Typed query parameter sets for list endpoints.
//!
//! Each set converts into [`QueryParams`] in field declaration order. Absent
//! fields and empty lists are skipped, so a default set serializes to `""`.
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::rest::serialize_query;
//! use sendcloud_api::types::{SenderAddressFilter, ShippingMethodsQueryParameters};
//!
//! let params = ShippingMethodsQueryParameters {
//!     sender_address: Some(SenderAddressFilter::All),
//!     is_return: Some(true),
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     serialize_query(Some(&params.to_query_params())),
//!     "?sender_address=all&is_return=true"
//! );
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::QueryParams;

/// Joins a list into the comma-separated form the API expects.
fn join_list<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Filters for listing parcels.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParcelQueryParameters {
    /// Only parcels with this status ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_status: Option<i64>,

    /// Only parcels containing this tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Only the parcel with exactly this order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// Only parcels updated after this ISO 8601 date or date-time,
    /// e.g. `2018-02-26` or `2018-02-26T11:01:47`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<String>,

    /// Only parcels with these IDs. The API accepts at most 100.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,

    /// Pagination cursor taken from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ParcelQueryParameters {
    /// Converts the filters to ordered query parameters.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("parcel_status", self.parcel_status);
        params.insert_opt("tracking_number", self.tracking_number.as_ref());
        params.insert_opt("order_number", self.order_number.as_ref());
        params.insert_opt("updated_after", self.updated_after.as_ref());
        params.insert_opt("ids", join_list(&self.ids));
        params.insert_opt("cursor", self.cursor.as_ref());
        params
    }
}

impl From<&ParcelQueryParameters> for QueryParams {
    fn from(value: &ParcelQueryParameters) -> Self {
        value.to_query_params()
    }
}

/// The sender address a shipping method lookup applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderAddressFilter {
    /// A specific sender address ID.
    Id(u64),
    /// Every sender address, rendered as `all`.
    All,
}

impl fmt::Display for SenderAddressFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::All => f.write_str("all"),
        }
    }
}

impl From<u64> for SenderAddressFilter {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl Serialize for SenderAddressFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_u64(*id),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for SenderAddressFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Ok(Self::Id(id)),
            Raw::Text(text) if text == "all" => Ok(Self::All),
            Raw::Text(text) => Err(de::Error::custom(format!(
                "expected a sender address ID or \"all\", got \"{text}\""
            ))),
        }
    }
}

/// Filters for listing shipping methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingMethodsQueryParameters {
    /// Sender address to ship from, or [`SenderAddressFilter::All`] for
    /// every available method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<SenderAddressFilter>,

    /// Only methods available for this service point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_point_id: Option<u64>,

    /// Only methods usable for returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,
}

impl ShippingMethodsQueryParameters {
    /// Converts the filters to ordered query parameters.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(
            "sender_address",
            self.sender_address.map(|filter| filter.to_string()),
        );
        params.insert_opt(
            "service_point_id",
            self.service_point_id.map(|id| id.to_string()),
        );
        params.insert_opt("is_return", self.is_return);
        params
    }
}

impl From<&ShippingMethodsQueryParameters> for QueryParams {
    fn from(value: &ShippingMethodsQueryParameters) -> Self {
        value.to_query_params()
    }
}

/// Filters for listing the shipments of an integration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IntegrationShipmentQueryParameters {
    /// Only shipments with one of these external order IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_order_ids: Vec<String>,

    /// Only shipments with one of these external shipment IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_shipment_ids: Vec<String>,

    /// Only shipments with this order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// First day to include. The API defaults to two years ago.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Last day to include. The API defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Sender address used to compute the allowed shipping methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<u64>,
}

impl IntegrationShipmentQueryParameters {
    /// Converts the filters to ordered query parameters.
    ///
    /// Dates are rendered as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("external_order_ids", join_list(&self.external_order_ids));
        params.insert_opt(
            "external_shipment_ids",
            join_list(&self.external_shipment_ids),
        );
        params.insert_opt("order_number", self.order_number.as_ref());
        params.insert_opt(
            "start_date",
            self.start_date.map(|date| date.format("%Y-%m-%d").to_string()),
        );
        params.insert_opt(
            "end_date",
            self.end_date.map(|date| date.format("%Y-%m-%d").to_string()),
        );
        params.insert_opt("sender_address", self.sender_address.map(|id| id.to_string()));
        params
    }
}

impl From<&IntegrationShipmentQueryParameters> for QueryParams {
    fn from(value: &IntegrationShipmentQueryParameters) -> Self {
        value.to_query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_query;

    #[test]
    fn test_default_parcel_filters_serialize_to_empty_string() {
        let params = ParcelQueryParameters::default().to_query_params();
        assert!(params.is_empty());
        assert_eq!(serialize_query(Some(&params)), "");
    }

    #[test]
    fn test_parcel_filters_keep_field_order() {
        let filters = ParcelQueryParameters {
            cursor: Some("cD0yMDIx".to_string()),
            order_number: Some("ORD-1001".to_string()),
            parcel_status: Some(1000),
            ids: vec![12, 34],
            ..Default::default()
        };

        assert_eq!(
            serialize_query(Some(&QueryParams::from(&filters))),
            "?parcel_status=1000&order_number=ORD-1001&ids=12,34&cursor=cD0yMDIx"
        );
    }

    #[test]
    fn test_shipping_method_filters_render_sender_address() {
        let by_id = ShippingMethodsQueryParameters {
            sender_address: Some(SenderAddressFilter::Id(42)),
            service_point_id: Some(9_876),
            ..Default::default()
        };
        assert_eq!(
            serialize_query(Some(&by_id.to_query_params())),
            "?sender_address=42&service_point_id=9876"
        );

        let all = ShippingMethodsQueryParameters {
            sender_address: Some(SenderAddressFilter::All),
            ..Default::default()
        };
        assert_eq!(serialize_query(Some(&all.to_query_params())), "?sender_address=all");
    }

    #[test]
    fn test_sender_address_filter_serde() {
        assert_eq!(serde_json::to_string(&SenderAddressFilter::All).unwrap(), r#""all""#);
        assert_eq!(serde_json::to_string(&SenderAddressFilter::Id(7)).unwrap(), "7");

        let parsed: SenderAddressFilter = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, SenderAddressFilter::All);
        assert!(serde_json::from_str::<SenderAddressFilter>(r#""some""#).is_err());
    }

    #[test]
    fn test_integration_shipment_filters_render_dates() {
        let filters = IntegrationShipmentQueryParameters {
            external_order_ids: vec!["555".to_string(), "556".to_string()],
            start_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            sender_address: Some(3),
            ..Default::default()
        };

        assert_eq!(
            serialize_query(Some(&filters.to_query_params())),
            "?external_order_ids=555,556&start_date=2024-01-05&end_date=2024-02-29&sender_address=3"
        );
    }
}
