//! Pure Rust OCR recognizer using `pure-onnx-ocr`.

use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use super::{Result, TextRecognizer};
use crate::error::OcrError;

/// Recognizer backed by `pure-onnx-ocr` (no external ONNX Runtime).
pub struct PureOcrRecognizer {
    engine: pure_onnx_ocr::engine::OcrEngine,
}

impl PureOcrRecognizer {
    /// Create a recognizer from model files in a directory.
    ///
    /// Expects `det.onnx`, `latin_rec.onnx`, and `latin_dict.txt`.
    pub fn from_dir(model_dir: &Path) -> Result<Self> {
        let det_path = model_dir.join("det.onnx");
        let rec_path = model_dir.join("latin_rec.onnx");
        let dict_path = model_dir.join("latin_dict.txt");

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", model_dir.display());
        Ok(Self { engine })
    }
}

impl TextRecognizer for PureOcrRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        debug!("pure-onnx-ocr returned {} text regions", results.len());

        let text = results
            .iter()
            .map(|r| r.text.replace("[UNK]", " "))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(text)
    }
}
