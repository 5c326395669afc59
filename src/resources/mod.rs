//! Resource namespaces of the Sendcloud API.
//!
//! Each namespace is a lightweight view borrowed from a
//! [`Sendcloud`](crate::Sendcloud) client and declares its endpoints as
//! [`Endpoint`](crate::rest::Endpoint) constants. Every operation sends
//! exactly one request and returns the decoded JSON body unchanged.
//!
//! | Namespace | Accessor |
//! |-----------|----------|
//! | [`Parcels`] | [`Sendcloud::parcels`](crate::Sendcloud::parcels) |
//! | [`Returns`] | [`Sendcloud::returns`](crate::Sendcloud::returns) |
//! | [`Brands`] | [`Sendcloud::brands`](crate::Sendcloud::brands) |
//! | [`Shipping`] | [`Sendcloud::shipping`](crate::Sendcloud::shipping) |
//! | [`Labels`] | [`Sendcloud::labels`](crate::Sendcloud::labels) |
//! | [`User`] | [`Sendcloud::user`](crate::Sendcloud::user) |
//! | [`Integrations`] | [`Sendcloud::integrations`](crate::Sendcloud::integrations) |

mod brands;
mod integrations;
mod labels;
mod parcels;
mod returns;
mod shipping;
mod user;

pub use brands::Brands;
pub use integrations::Integrations;
pub use labels::Labels;
pub use parcels::Parcels;
pub use returns::Returns;
pub use shipping::Shipping;
pub use user::User;
