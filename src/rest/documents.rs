//! Parcel document options and their normalization.
//!
//! Sendcloud only renders documents in a handful of format/DPI combinations.
//! [`normalize_document_options`] coerces whatever the caller asked for into
//! one of them instead of failing:
//!
//! | format | accepted DPI     | fallback |
//! |--------|------------------|----------|
//! | `pdf`  | 72               | 72       |
//! | `zpl`  | 203, 300, 600    | 203      |
//! | `png`  | 150, 300         | 300      |
//!
//! A missing or unrecognized format resets the whole option set to
//! `pdf` at 72 DPI, discarding any DPI the caller supplied.
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::rest::{normalize_document_options, DocumentOptions};
//! use sendcloud_api::FileFormat;
//!
//! let options = DocumentOptions::new(FileFormat::Zpl).dpi(999);
//! let normalized = normalize_document_options(Some(&options));
//!
//! assert_eq!(normalized.format, FileFormat::Zpl);
//! assert_eq!(normalized.dpi, 203);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rest::query::QueryParams;

/// Output format of a parcel document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Portable Document Format.
    Pdf,
    /// Zebra Programming Language, for thermal label printers.
    Zpl,
    /// Portable Network Graphics.
    Png,
}

impl FileFormat {
    /// Returns the wire name of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Zpl => "zpl",
            Self::Png => "png",
        }
    }

    /// Returns the DPI values the API accepts for this format.
    #[must_use]
    pub const fn allowed_dpi(&self) -> &'static [u32] {
        match self {
            Self::Pdf => &[72],
            Self::Zpl => &[203, 300, 600],
            Self::Png => &[150, 300],
        }
    }

    /// Returns the DPI substituted when the requested one is not accepted.
    #[must_use]
    pub const fn default_dpi(&self) -> u32 {
        match self {
            Self::Pdf => 72,
            Self::Zpl => 203,
            Self::Png => 300,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "zpl" => Ok(Self::Zpl),
            "png" => Ok(Self::Png),
            other => Err(ConfigError::UnknownFileFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Type of document attached to an announced parcel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// To be placed on the actual parcel.
    #[serde(rename = "label")]
    Label,
    /// CP71 dispatch note for international shipments.
    #[serde(rename = "cp71")]
    Cp71,
    /// CN23 customs document for international shipments.
    #[serde(rename = "cn23")]
    Cn23,
    /// Sendcloud or carrier generated commercial invoice for international shipments.
    #[serde(rename = "commercial-invoice")]
    CommercialInvoice,
    /// The Sendcloud generated CN23 document, kept for reference when a
    /// carrier CN23 is also returned.
    #[serde(rename = "cn23-default")]
    Cn23Default,
}

impl DocumentType {
    /// Returns the path segment used for this document type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Cp71 => "cp71",
            Self::Cn23 => "cn23",
            Self::CommercialInvoice => "commercial-invoice",
            Self::Cn23Default => "cn23-default",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document options as supplied by the caller.
///
/// The format is kept as a raw name so that unrecognized formats can be
/// represented; they are handled by [`normalize_document_options`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Requested format name (`pdf`, `zpl` or `png`).
    pub format: Option<String>,
    /// Requested resolution in dots per inch.
    pub dpi: Option<i64>,
}

impl DocumentOptions {
    /// Creates options for a known format with no DPI preference.
    #[must_use]
    pub fn new(format: FileFormat) -> Self {
        Self {
            format: Some(format.as_str().to_string()),
            dpi: None,
        }
    }

    /// Creates options from a raw format name.
    #[must_use]
    pub fn with_format_name(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            dpi: None,
        }
    }

    /// Sets the requested DPI.
    #[must_use]
    pub const fn dpi(mut self, dpi: i64) -> Self {
        self.dpi = Some(dpi);
        self
    }
}

/// A format/DPI pair the API is guaranteed to accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedDocumentOptions {
    /// Output format.
    pub format: FileFormat,
    /// Resolution, always one of `format.allowed_dpi()`.
    pub dpi: u32,
}

impl NormalizedDocumentOptions {
    /// Returns the `format` and `dpi` query parameters, in that order.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("format", self.format.as_str());
        params.insert("dpi", self.dpi);
        params
    }
}

impl Default for NormalizedDocumentOptions {
    fn default() -> Self {
        Self {
            format: FileFormat::Pdf,
            dpi: FileFormat::Pdf.default_dpi(),
        }
    }
}

impl From<NormalizedDocumentOptions> for DocumentOptions {
    fn from(options: NormalizedDocumentOptions) -> Self {
        Self::new(options.format).dpi(i64::from(options.dpi))
    }
}

/// Coerces caller options into a format/DPI pair the API accepts.
///
/// - `None` is treated as a request for `pdf`.
/// - A missing DPI is treated as `0`, which no format accepts, so the
///   format's fallback DPI is used.
/// - For `pdf`, `zpl` and `png` only the DPI is replaced when it is not
///   accepted.
/// - A missing or unrecognized format yields `pdf` at 72 DPI regardless of
///   the DPI supplied.
///
/// Never fails. Normalizing an already normalized value returns it unchanged.
#[must_use]
pub fn normalize_document_options(options: Option<&DocumentOptions>) -> NormalizedDocumentOptions {
    let (format, dpi) = options.map_or((Some("pdf"), None), |o| (o.format.as_deref(), o.dpi));
    let dpi = dpi.unwrap_or(0);

    let Some(format) = format.and_then(|name| name.parse::<FileFormat>().ok()) else {
        tracing::debug!(
            "Unrecognized document format {:?}, falling back to pdf at 72 dpi",
            options.and_then(|o| o.format.as_deref())
        );
        return NormalizedDocumentOptions::default();
    };

    let dpi = match u32::try_from(dpi) {
        Ok(dpi) if format.allowed_dpi().contains(&dpi) => dpi,
        _ => {
            let fallback = format.default_dpi();
            if dpi != 0 {
                tracing::debug!("Replacing unsupported {format} dpi {dpi} with {fallback}");
            }
            fallback
        }
    };

    NormalizedDocumentOptions { format, dpi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::query::serialize_query;

    fn normalize(format: &str, dpi: Option<i64>) -> NormalizedDocumentOptions {
        let options = DocumentOptions {
            format: Some(format.to_string()),
            dpi,
        };
        normalize_document_options(Some(&options))
    }

    #[test]
    fn test_absent_options_default_to_pdf_72() {
        let normalized = normalize_document_options(None);
        assert_eq!(normalized.format, FileFormat::Pdf);
        assert_eq!(normalized.dpi, 72);
    }

    #[test]
    fn test_pdf_only_accepts_72() {
        assert_eq!(normalize("pdf", Some(72)).dpi, 72);
        assert_eq!(normalize("pdf", Some(300)).dpi, 72);
        assert_eq!(normalize("pdf", None).dpi, 72);
    }

    #[test]
    fn test_zpl_keeps_accepted_dpi() {
        for dpi in [203, 300, 600] {
            let normalized = normalize("zpl", Some(dpi));
            assert_eq!(normalized.format, FileFormat::Zpl);
            assert_eq!(i64::from(normalized.dpi), dpi);
        }
    }

    #[test]
    fn test_zpl_falls_back_to_203() {
        assert_eq!(normalize("zpl", Some(72)).dpi, 203);
        assert_eq!(normalize("zpl", Some(150)).dpi, 203);
        assert_eq!(normalize("zpl", None).dpi, 203);
    }

    #[test]
    fn test_png_keeps_accepted_dpi() {
        assert_eq!(normalize("png", Some(150)).dpi, 150);
        assert_eq!(normalize("png", Some(300)).dpi, 300);
    }

    #[test]
    fn test_png_falls_back_to_300() {
        assert_eq!(normalize("png", Some(600)).dpi, 300);
        assert_eq!(normalize("png", Some(-150)).dpi, 300);
        assert_eq!(normalize("png", None).dpi, 300);
    }

    #[test]
    fn test_unknown_format_resets_everything() {
        let normalized = normalize("unknown", Some(300));
        assert_eq!(normalized, NormalizedDocumentOptions::default());

        // Names are case sensitive, like the API.
        let normalized = normalize("ZPL", Some(300));
        assert_eq!(normalized.format, FileFormat::Pdf);
        assert_eq!(normalized.dpi, 72);
    }

    #[test]
    fn test_missing_format_resets_everything() {
        let options = DocumentOptions {
            format: None,
            dpi: Some(600),
        };
        let normalized = normalize_document_options(Some(&options));
        assert_eq!(normalized.format, FileFormat::Pdf);
        assert_eq!(normalized.dpi, 72);
    }

    #[test]
    fn test_dpi_always_in_allowed_set() {
        let samples = [
            i64::MIN,
            -1,
            0,
            1,
            72,
            150,
            203,
            300,
            600,
            601,
            i64::from(u32::MAX) + 300,
            i64::MAX,
        ];
        for format in [FileFormat::Pdf, FileFormat::Zpl, FileFormat::Png] {
            for dpi in samples {
                let options = DocumentOptions::new(format).dpi(dpi);
                let normalized = normalize_document_options(Some(&options));
                assert_eq!(normalized.format, format);
                assert!(
                    format.allowed_dpi().contains(&normalized.dpi),
                    "{format} dpi {dpi} normalized to {}",
                    normalized.dpi
                );
            }
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for (format, dpi) in [("pdf", 72), ("zpl", 600), ("png", 150), ("bmp", 1)] {
            let once = normalize(format, Some(dpi));
            let twice = normalize_document_options(Some(&DocumentOptions::from(once)));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_query_params_are_format_then_dpi() {
        let normalized = normalize("zpl", Some(300));
        let query = serialize_query(Some(&normalized.to_query_params()));
        assert_eq!(query, "?format=zpl&dpi=300");

        let query = serialize_query(Some(&normalize_document_options(None).to_query_params()));
        assert_eq!(query, "?format=pdf&dpi=72");
    }

    #[test]
    fn test_file_format_parse_and_display() {
        assert_eq!("png".parse::<FileFormat>().unwrap(), FileFormat::Png);
        assert_eq!(FileFormat::Zpl.to_string(), "zpl");
        assert!(matches!(
            "tiff".parse::<FileFormat>(),
            Err(ConfigError::UnknownFileFormat { format }) if format == "tiff"
        ));
    }

    #[test]
    fn test_document_type_path_segments() {
        assert_eq!(DocumentType::Label.to_string(), "label");
        assert_eq!(DocumentType::Cp71.to_string(), "cp71");
        assert_eq!(DocumentType::Cn23.to_string(), "cn23");
        assert_eq!(
            DocumentType::CommercialInvoice.to_string(),
            "commercial-invoice"
        );
        assert_eq!(DocumentType::Cn23Default.to_string(), "cn23-default");
    }

    #[test]
    fn test_document_type_serializes_like_path_segment() {
        let json = serde_json::to_string(&DocumentType::CommercialInvoice).unwrap();
        assert_eq!(json, r#""commercial-invoice""#);
    }
}
