//! Image recognition capability.
//!
//! Recognition engines are pluggable: the acquisition layer only needs
//! "given a page image, produce text or fail". The default build ships a
//! pure-Rust engine behind the `native` feature; callers can substitute
//! their own.

#[cfg(feature = "native")]
mod pure;

#[cfg(feature = "native")]
pub use pure::PureOcrRecognizer;

use image::DynamicImage;

use crate::error::OcrError;

/// Result type for recognition operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Trait for text recognition over a rasterized page.
pub trait TextRecognizer {
    /// Recognize text in an image.
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

/// Recognizer used when no OCR engine is available.
///
/// Always fails with [`OcrError::Unavailable`], which the acquisition
/// layer downgrades to "no text from this tier".
pub struct NoRecognizer;

impl TextRecognizer for NoRecognizer {
    fn recognize(&self, _image: &DynamicImage) -> Result<String> {
        Err(OcrError::Unavailable)
    }
}
