//! Integration shipment types.
//!
//! Shipments are upserted by their `external_order_id` and
//! `external_shipment_id` pair, and deleted either by Sendcloud's
//! `shipment_uuid` or by that same pair. See [`ShipmentDeletion`].

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::types::{ParcelItem, ShippingMethod};

/// An order shipment pushed into a Sendcloud integration.
///
/// Fields typed `Option` without a skip attribute are sent as `null` when
/// absent, which the API treats as "no value".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntegrationShipment {
    /// ID of the order in the shop system.
    pub external_order_id: String,

    /// ID of the shipment in the shop system, when the shop splits orders.
    pub external_shipment_id: Option<String>,

    /// Human readable order number.
    pub order_number: String,

    /// When the order was placed.
    pub created_at: DateTime<FixedOffset>,

    /// When the order was last changed.
    pub updated_at: DateTime<FixedOffset>,

    pub name: String,
    pub company_name: String,
    pub address: String,
    pub address_2: String,
    pub house_number: String,
    pub city: String,
    pub postal_code: String,
    pub to_post_number: String,
    pub to_state: Option<String>,
    pub country: String,
    pub email: String,
    pub telephone: String,

    /// ISO 4217 currency of the order values.
    pub currency: Option<String>,

    pub customs_invoice_nr: String,
    pub customs_shipment_type: Option<String>,

    /// Order status as `{"id": .., "message": ..}`.
    pub order_status: Option<HashMap<String, String>>,

    /// Payment status as `{"id": .., "message": ..}`.
    pub payment_status: Option<HashMap<String, String>>,

    pub parcel_items: Option<Vec<ParcelItem>>,

    /// Shipping method ID chosen for the order.
    pub shipping_method: Option<u64>,

    /// Shipping method name as shown at checkout.
    pub shipping_method_checkout_name: String,

    /// Service point chosen at checkout.
    pub to_service_point: Option<String>,

    /// Total weight in kilograms, as a decimal string.
    pub weight: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<ShippingMethod>>,
}

/// Identifies the integration shipment to delete.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::types::ShipmentDeletion;
///
/// let by_uuid = ShipmentDeletion::ByShipmentUuid {
///     shipment_uuid: "6f1a3c5e".to_string(),
/// };
/// assert_eq!(
///     serde_json::to_string(&by_uuid).unwrap(),
///     r#"{"shipment_uuid":"6f1a3c5e"}"#
/// );
///
/// let by_external = ShipmentDeletion::ByExternalIds {
///     external_order_id: "555".to_string(),
///     external_shipment_id: None,
/// };
/// assert_eq!(
///     serde_json::to_string(&by_external).unwrap(),
///     r#"{"external_order_id":"555","external_shipment_id":null}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ShipmentDeletion {
    /// Sendcloud's own shipment identifier.
    ByShipmentUuid { shipment_uuid: String },
    /// The shop's order and shipment identifiers.
    ByExternalIds {
        external_order_id: String,
        external_shipment_id: Option<String>,
    },
}
