//! PDF processing module.

mod document;

pub use document::PdfDocument;

use crate::error::PdfError;
use image::DynamicImage;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A document that text acquisition can read from.
///
/// This is the structured-extraction and rasterization capability: a
/// per-page text pull plus a per-page image render for the OCR fallback.
/// Implementations report failures as errors; the acquisition layer
/// downgrades them to "no text from this tier".
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn page_text(&self, page: u32) -> Result<String>;

    /// Produce a raster image of a page at the given DPI.
    fn page_image(&self, page: u32, dpi: u32) -> Result<DynamicImage>;
}
