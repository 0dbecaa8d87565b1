//! Text acquisition with OCR fallback.
//!
//! Two tiers, each attempted exactly once: the document's embedded text
//! layer first (fast, exact), then per-page rasterization plus text
//! recognition (slow, lossy, needed for scanned documents). Failures in
//! either tier are logged and treated as "produced no text".

use tracing::{debug, warn};

use crate::models::extraction::TextSource;
use crate::ocr::TextRecognizer;
use crate::pdf::DocumentSource;

/// Structured extraction can "succeed" on scanned PDFs, returning only
/// whitespace or stray glyphs. Anything shorter than this is unusable.
pub const MIN_STRUCTURED_LEN: usize = 50;

/// Resolution for rasterizing pages before recognition.
pub const RENDER_DPI: u32 = 200;

/// Raw text pulled from a document, tagged with how it was obtained.
///
/// Invariant: `source == TextSource::None` if and only if `content` is
/// empty.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    /// The acquired text.
    pub content: String,
    /// Which tier produced it.
    pub source: TextSource,
}

impl AcquiredText {
    fn none() -> Self {
        Self {
            content: String::new(),
            source: TextSource::None,
        }
    }
}

/// Runs the two-tier acquisition cascade.
pub struct TextAcquirer {
    min_structured_len: usize,
    dpi: u32,
}

impl TextAcquirer {
    /// Create an acquirer with the default threshold and DPI.
    pub fn new() -> Self {
        Self {
            min_structured_len: MIN_STRUCTURED_LEN,
            dpi: RENDER_DPI,
        }
    }

    /// Acquire text from a document.
    pub fn acquire(
        &self,
        document: &dyn DocumentSource,
        recognizer: &dyn TextRecognizer,
    ) -> AcquiredText {
        let text = self.structured_text(document);
        if text.trim().chars().count() >= self.min_structured_len {
            debug!("Structured extraction produced {} chars", text.len());
            return AcquiredText {
                content: text,
                source: TextSource::Structured,
            };
        }

        let text = self.recognized_text(document, recognizer);
        if !text.trim().is_empty() {
            debug!("Image recognition produced {} chars", text.len());
            return AcquiredText {
                content: text,
                source: TextSource::ImageRecognition,
            };
        }

        AcquiredText::none()
    }

    /// Tier 1: page-by-page text pull from the embedded text layer.
    fn structured_text(&self, document: &dyn DocumentSource) -> String {
        let mut parts = Vec::new();

        for page in 1..=document.page_count() {
            match document.page_text(page) {
                Ok(text) if !text.is_empty() => parts.push(text),
                Ok(_) => {}
                Err(e) => {
                    warn!("Text extraction failed on page {}: {}", page, e);
                    return String::new();
                }
            }
        }

        parts.join("\n")
    }

    /// Tier 2: rasterize each page and recognize text per page.
    fn recognized_text(
        &self,
        document: &dyn DocumentSource,
        recognizer: &dyn TextRecognizer,
    ) -> String {
        let mut parts = Vec::new();

        for page in 1..=document.page_count() {
            let image = match document.page_image(page, self.dpi) {
                Ok(image) => image,
                Err(e) => {
                    warn!("Failed to rasterize page {}: {}", page, e);
                    return String::new();
                }
            };

            match recognizer.recognize(&image) {
                Ok(text) if !text.is_empty() => parts.push(text),
                Ok(_) => debug!("No text recognized on page {}", page),
                Err(e) => {
                    warn!("Recognition failed on page {}: {}", page, e);
                    return String::new();
                }
            }
        }

        parts.join("\n")
    }
}

impl Default for TextAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OcrError, PdfError};
    use crate::ocr::{NoRecognizer, Result as OcrResult};
    use image::DynamicImage;
    use pretty_assertions::assert_eq;

    struct StubDocument {
        pages: Vec<&'static str>,
        images: bool,
    }

    impl DocumentSource for StubDocument {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_text(&self, page: u32) -> crate::pdf::Result<String> {
            Ok(self.pages[(page - 1) as usize].to_string())
        }

        fn page_image(&self, page: u32, _dpi: u32) -> crate::pdf::Result<DynamicImage> {
            if self.images {
                Ok(DynamicImage::new_rgb8(8, 8))
            } else {
                Err(PdfError::InvalidPage(page))
            }
        }
    }

    struct StubRecognizer(&'static str);

    impl TextRecognizer for StubRecognizer {
        fn recognize(&self, _image: &DynamicImage) -> OcrResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn recognize(&self, _image: &DynamicImage) -> OcrResult<String> {
            Err(OcrError::Recognition("model exploded".to_string()))
        }
    }

    struct UntouchableRecognizer;

    impl TextRecognizer for UntouchableRecognizer {
        fn recognize(&self, _image: &DynamicImage) -> OcrResult<String> {
            panic!("recognition must not run when structured text suffices");
        }
    }

    #[test]
    fn test_structured_tier_wins_with_enough_text() {
        let doc = StubDocument {
            pages: vec![
                "Acme Supplies Inc.\nInvoice #INV-1234\nThis line pads the page past fifty characters.",
            ],
            images: true,
        };

        // The recognizer panics if consulted
        let acquired = TextAcquirer::new().acquire(&doc, &UntouchableRecognizer);

        assert_eq!(acquired.source, TextSource::Structured);
        assert!(acquired.content.contains("INV-1234"));
    }

    #[test]
    fn test_short_structured_text_falls_back_to_recognition() {
        let doc = StubDocument {
            pages: vec!["x", ""],
            images: true,
        };

        let acquired = TextAcquirer::new().acquire(&doc, &StubRecognizer("Recognized page text"));

        assert_eq!(acquired.source, TextSource::ImageRecognition);
        assert_eq!(acquired.content, "Recognized page text\nRecognized page text");
    }

    #[test]
    fn test_no_text_from_either_tier() {
        let doc = StubDocument {
            pages: vec![" "],
            images: true,
        };

        let acquired = TextAcquirer::new().acquire(&doc, &StubRecognizer("   "));

        assert_eq!(acquired.source, TextSource::None);
        assert_eq!(acquired.content, "");
    }

    /// Pages: page 1 fails to rasterize, page 2 would recognize fine.
    struct TornDocument;

    impl DocumentSource for TornDocument {
        fn page_count(&self) -> u32 {
            2
        }

        fn page_text(&self, _page: u32) -> crate::pdf::Result<String> {
            Ok(String::new())
        }

        fn page_image(&self, page: u32, _dpi: u32) -> crate::pdf::Result<DynamicImage> {
            if page == 1 {
                Err(PdfError::ImageExtraction("damaged page stream".to_string()))
            } else {
                Ok(DynamicImage::new_rgb8(8, 8))
            }
        }
    }

    #[test]
    fn test_page_failure_discards_recognition_tier() {
        // A failure on any page means the whole tier produced no text,
        // even when a later page would have recognized cleanly.
        let acquired = TextAcquirer::new().acquire(&TornDocument, &StubRecognizer("Total: $100.00"));

        assert_eq!(acquired.source, TextSource::None);
        assert_eq!(acquired.content, "");
    }

    #[test]
    fn test_recognizer_failure_is_downgraded() {
        let doc = StubDocument {
            pages: vec!["tiny"],
            images: true,
        };

        let acquired = TextAcquirer::new().acquire(&doc, &FailingRecognizer);

        assert_eq!(acquired.source, TextSource::None);
    }

    #[test]
    fn test_unavailable_recognizer_yields_none() {
        let doc = StubDocument {
            pages: vec![""],
            images: true,
        };

        let acquired = TextAcquirer::new().acquire(&doc, &NoRecognizer);

        assert_eq!(acquired.source, TextSource::None);
        assert_eq!(acquired.content, "");
    }
}
