//! Core library for invoice verification.
//!
//! This crate provides:
//! - Text acquisition from PDFs (embedded text layer with OCR fallback)
//! - Heuristic field extraction (invoice number, date, amount, vendor)
//! - Reconciliation of extracted fields against an external bill record

pub mod acquire;
pub mod error;
pub mod fields;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;
pub mod reconcile;

pub use error::{BillscanError, Result};
pub use models::bill::BillRecord;
pub use models::extraction::{AmountField, DateField, ExtractionResult, TextSource};
pub use acquire::{AcquiredText, TextAcquirer};
pub use ocr::{NoRecognizer, TextRecognizer};
#[cfg(feature = "native")]
pub use ocr::PureOcrRecognizer;
pub use pdf::{DocumentSource, PdfDocument};
pub use pipeline::InvoiceScanner;
pub use reconcile::{reconcile, Discrepancy, DiscrepancyField, Severity};
