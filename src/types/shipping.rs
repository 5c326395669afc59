//! Shipping method types.

use serde::{Deserialize, Serialize};

/// A destination country of a shipping method, with its price.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Country {
    pub id: u64,
    pub iso_2: String,
    pub iso_3: String,
    pub name: String,
    pub price: f64,
}

/// A carrier shipping method.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingMethod {
    /// ID of the shipping method.
    pub id: u64,

    /// Display name of the method.
    pub name: String,

    /// Carrier code, e.g. `postnl`.
    pub carrier: String,

    /// Whether a service point is `required` or `none`.
    pub service_point_input: String,

    /// Minimum parcel weight in kilograms, as a decimal string.
    pub min_weight: String,

    /// Maximum parcel weight in kilograms, as a decimal string.
    pub max_weight: String,

    /// Base price of the method.
    pub price: f64,

    /// Countries the method ships to.
    #[serde(default)]
    pub countries: Vec<Country>,
}
