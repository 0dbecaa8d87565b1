//! Extraction coordinator.

use std::path::Path;

use tracing::{debug, info};

use crate::acquire::TextAcquirer;
use crate::fields::{extract_amount, extract_date, extract_invoice_number, extract_vendor};
use crate::models::extraction::ExtractionResult;
use crate::ocr::TextRecognizer;
use crate::pdf::{DocumentSource, PdfDocument};

/// Bound on the diagnostic preview of acquired text.
pub const PREVIEW_LEN: usize = 500;

/// Orchestrates acquisition and the four field extractors into one
/// [`ExtractionResult`] per document.
pub struct InvoiceScanner {
    acquirer: TextAcquirer,
}

impl InvoiceScanner {
    /// Create a scanner with default acquisition settings.
    pub fn new() -> Self {
        Self {
            acquirer: TextAcquirer::new(),
        }
    }

    /// Scan a document file.
    ///
    /// Never fails: every problem is recorded on the returned result.
    pub fn scan(&self, path: &Path, recognizer: &dyn TextRecognizer) -> ExtractionResult {
        let mut result = ExtractionResult::empty(path.display().to_string());

        if !path.exists() {
            result
                .errors
                .push(format!("File not found: {}", path.display()));
            return result;
        }

        let document = match PdfDocument::open(path) {
            Ok(document) => document,
            Err(e) => {
                debug!("Failed to open {}: {}", path.display(), e);
                result
                    .errors
                    .push("Could not extract text from document".to_string());
                return result;
            }
        };

        self.scan_document(result, &document, recognizer)
    }

    /// Scan an already-opened document source.
    pub fn scan_source(
        &self,
        source_path: impl Into<String>,
        document: &dyn DocumentSource,
        recognizer: &dyn TextRecognizer,
    ) -> ExtractionResult {
        let result = ExtractionResult::empty(source_path);
        self.scan_document(result, document, recognizer)
    }

    fn scan_document(
        &self,
        mut result: ExtractionResult,
        document: &dyn DocumentSource,
        recognizer: &dyn TextRecognizer,
    ) -> ExtractionResult {
        let acquired = self.acquirer.acquire(document, recognizer);
        result.method = acquired.source;

        if acquired.content.is_empty() {
            result
                .errors
                .push("Could not extract text from document".to_string());
            return result;
        }

        result.text_preview = Some(acquired.content.chars().take(PREVIEW_LEN).collect());

        info!(
            "Acquired {} chars via {:?} from {}",
            acquired.content.len(),
            acquired.source,
            result.source_path
        );

        // The extractors are independent; each reports absence rather
        // than failing the pipeline.
        result.invoice_number = extract_invoice_number(&acquired.content);
        result.date = extract_date(&acquired.content);
        result.amount = extract_amount(&acquired.content);
        result.vendor = extract_vendor(&acquired.content);

        result
    }
}

impl Default for InvoiceScanner {
    fn default() -> Self {
        Self::new()
    }
}
