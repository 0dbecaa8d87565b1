//! Heuristic field extractors.
//!
//! Each extractor is a pure function of the acquired text: it either
//! finds its field or returns `None`, never fails, and shares no state
//! with the others, so all four are safe to run independently.

pub mod amounts;
pub mod dates;
pub mod invoice_number;
pub mod patterns;
pub mod vendor;

pub use amounts::extract_amount;
pub use dates::extract_date;
pub use invoice_number::extract_invoice_number;
pub use vendor::extract_vendor;
