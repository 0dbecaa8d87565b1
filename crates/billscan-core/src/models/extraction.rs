//! Extraction result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the raw text of a document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Embedded text layer of the document.
    Structured,
    /// Rasterized pages run through optical character recognition.
    ImageRecognition,
    /// Neither tier produced usable text.
    None,
}

/// An extracted date: the literal matched substring and its timestamp.
///
/// Both parts come from the same match, so they are either both present
/// or both absent on [`ExtractionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateField {
    /// Date text as it appeared in the document.
    pub text: String,
    /// Epoch seconds at midnight UTC of the parsed calendar date.
    pub timestamp: i64,
}

/// An extracted monetary amount: the literal matched digits and the
/// exact decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountField {
    /// Amount digits as they appeared in the document, separators included.
    pub text: String,
    /// Parsed value with exact decimal semantics.
    pub value: Decimal,
}

/// Structured record produced from one document.
///
/// Created once by the scanner and never mutated afterwards. Absent
/// fields mean the corresponding heuristic found nothing; they are never
/// an error by themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Path of the source document.
    pub source_path: String,

    /// How the raw text was obtained.
    pub method: TextSource,

    /// Extracted invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Extracted invoice date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateField>,

    /// Extracted total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountField>,

    /// Extracted vendor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Bounded prefix of the acquired text, for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,

    /// Errors encountered while processing this document, in order.
    pub errors: Vec<String>,
}

impl ExtractionResult {
    /// Create an empty result for a document, with no fields extracted.
    pub fn empty(source_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            method: TextSource::None,
            invoice_number: None,
            date: None,
            amount: None,
            vendor: None,
            text_preview: None,
            errors: Vec::new(),
        }
    }
}
