//! Parcel, parcel item and label request types.

use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::DocumentType;

/// Customs shipment type, sent to the API as its numeric ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomsShipmentType {
    /// `0`
    Gift,
    /// `1`
    Documents,
    /// `2`
    CommercialGoods,
    /// `3`
    CommercialSample,
    /// `4`
    ReturnedGoods,
}

impl CustomsShipmentType {
    /// Returns the numeric ID the API uses for this type.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Gift => 0,
            Self::Documents => 1,
            Self::CommercialGoods => 2,
            Self::CommercialSample => 3,
            Self::ReturnedGoods => 4,
        }
    }

    /// Looks up a type by its numeric ID.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Gift),
            1 => Some(Self::Documents),
            2 => Some(Self::CommercialGoods),
            3 => Some(Self::CommercialSample),
            4 => Some(Self::ReturnedGoods),
            _ => None,
        }
    }
}

impl Serialize for CustomsShipmentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for CustomsShipmentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u8::deserialize(deserializer)?;
        Self::from_id(id).ok_or_else(|| {
            de::Error::custom(format!("invalid customs shipment type {id}, expected 0-4"))
        })
    }
}

/// A parcel to create.
///
/// The optional groups of fields (service, properties, announcement and
/// sender details) are flattened into the same JSON object.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::types::Parcel;
///
/// let parcel = Parcel {
///     name: "John Doe".to_string(),
///     address: "Stadhuisplein".to_string(),
///     house_number: Some("10".to_string()),
///     city: "Eindhoven".to_string(),
///     postal_code: "5611 EM".to_string(),
///     country: "NL".to_string(),
///     ..Default::default()
/// };
///
/// let body = serde_json::json!({ "parcel": parcel });
/// assert_eq!(body["parcel"]["city"], "Eindhoven");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Parcel {
    /// Name of the recipient.
    pub name: String,

    /// Company name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Street of the recipient.
    pub address: String,

    /// Additional address information, e.g. floor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// House number of the recipient. Required for some countries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    /// City of the recipient.
    pub city: String,

    /// Postal code of the recipient.
    pub postal_code: String,

    /// Code required for PO box or post locker delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_post_number: Option<String>,

    /// ISO 3166-1 alpha-2 country code of the recipient.
    pub country: String,

    /// ISO 3166-2 state code. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_state: Option<String>,

    /// Phone number of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// E-mail address of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// ID of the sender address to ship from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<u64>,

    /// Customs invoice number. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_invoice_nr: Option<String>,

    /// Customs shipment type. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_shipment_type: Option<CustomsShipmentType>,

    /// Caller-side reference, used by the API for idempotence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,

    /// Service point and insurance options.
    #[serde(flatten)]
    pub shipping_service: ShippingService,

    /// Order, item and weight details.
    #[serde(flatten)]
    pub properties: ParcelProperties,

    /// Label request options.
    #[serde(flatten)]
    pub announcement: Announcement,

    /// Sender details overriding the sender address.
    #[serde(flatten)]
    pub sender: SenderAddressDetails,
}

/// Service point and insurance options of a parcel.
///
/// `insured_value` and `total_insured_value` are mutually exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingService {
    /// ID of the selected service point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_service_point: Option<u64>,

    /// Sendcloud insurance to add on top of the carrier's, a multiple of 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured_value: Option<u32>,

    /// Total insurance coverage wanted, carrier insurance included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_insured_value: Option<u32>,
}

/// Order, item and weight details of a parcel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParcelProperties {
    /// Order number of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// Sendcloud's identifier of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_uuid: Option<String>,

    /// Items in the parcel. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_items: Option<Vec<ParcelItem>>,

    /// Weight in kilograms as a decimal string. The account default is
    /// used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Whether the parcel is a return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,
}

/// Label request options of a parcel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Announcement {
    /// Whether a label should be requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_label: Option<bool>,

    /// Request the label asynchronously; poll the parcel for status changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_label_async: Option<bool>,

    /// Shipping method. Required when `request_label` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<AnnouncementShipment>,

    /// Apply shipping rules before creating the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_shipping_rules: Option<bool>,
}

/// Shipping method selected for a label request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnouncementShipment {
    /// ID of the shipping method.
    pub id: u64,

    /// Name of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Sender details of a parcel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SenderAddressDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
}

/// A single line of a parcel's contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParcelItem {
    /// Description of the item.
    pub description: String,

    /// Quantity shipped.
    pub quantity: u32,

    /// Weight of a single item in kilograms, as a decimal string.
    pub weight: String,

    /// Value of a single item, as a decimal string.
    pub value: String,

    /// Harmonized System code. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,

    /// ISO-2 code of the country of origin. Required when shipping outside the EU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,

    /// SKU of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Internal ID of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Free-form product properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, String>>,
}

/// A document attached to an announced parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// The type of the document.
    #[serde(rename = "type")]
    pub document_type: DocumentType,

    /// Paper size, `a4` or `a6`.
    pub size: String,

    /// Download link for the document.
    pub link: String,
}

/// A parcel reference accepted by bulk label printing.
///
/// # Example
///
/// ```rust
/// use sendcloud_api::types::LabelParcelId;
///
/// let ids = [LabelParcelId::from(1234), LabelParcelId::from("5678")];
/// assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1234,"5678"]"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LabelParcelId {
    /// A numeric parcel ID.
    Id(u64),
    /// A parcel ID given as text.
    Text(String),
}

impl From<u64> for LabelParcelId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for LabelParcelId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for LabelParcelId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
