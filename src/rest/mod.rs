//! Request building blocks shared by all resources.
//!
//! - [`Endpoint`] and [`build_path`]: endpoint table entries and path interpolation
//! - [`QueryParams`] and [`serialize_query`]: ordered query parameters and
//!   their query-string form
//! - [`DocumentOptions`] and [`normalize_document_options`]: coercion of
//!   document format/DPI requests into combinations the API accepts
//!
//! Everything in this module is pure and synchronous.

mod documents;
mod path;
mod query;

pub use documents::{
    normalize_document_options, DocumentOptions, DocumentType, FileFormat,
    NormalizedDocumentOptions,
};
pub use path::{build_path, Endpoint};
pub use query::{serialize_query, QueryParams, QueryValue};
