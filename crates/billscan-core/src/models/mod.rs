//! Data models for extraction results and bill records.

pub mod bill;
pub mod extraction;

pub use bill::BillRecord;
pub use extraction::{AmountField, DateField, ExtractionResult, TextSource};
