//! Request bodies, query filters and supporting models.
//!
//! Resource operations return raw [`serde_json::Value`] bodies. The types
//! here describe what goes *into* a request: parcel payloads, label
//! selections, integration shipments and typed query filters.

mod integration;
mod parcel;
mod query;
mod shipping;

pub use integration::{IntegrationShipment, ShipmentDeletion};
pub use parcel::{
    Announcement, AnnouncementShipment, CustomsShipmentType, Document, LabelParcelId, Parcel,
    ParcelItem, ParcelProperties, SenderAddressDetails, ShippingService,
};
pub use query::{
    IntegrationShipmentQueryParameters, ParcelQueryParameters, SenderAddressFilter,
    ShippingMethodsQueryParameters,
};
pub use shipping::{Country, ShippingMethod};
