//! Output formatting for verification results.

use console::style;
use serde::Serialize;

use billscan_core::{Discrepancy, ExtractionResult, Severity, TextSource};

/// Bound on the raw-text preview shown in the text report.
const TEXT_PREVIEW_LEN: usize = 300;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Everything one run produced: the extraction plus, when a bill record
/// was supplied, the reconciliation outcome.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub extraction: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrepancies: Option<Vec<Discrepancy>>,
}

impl VerificationReport {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let result = &self.extraction;

        out.push_str(&format!("File: {}\n", result.source_path));
        out.push_str(&format!(
            "Extraction method: {}\n",
            method_name(result.method)
        ));
        out.push_str(&format!(
            "Invoice #: {}\n",
            field_or_not_found(result.invoice_number.as_deref())
        ));
        out.push_str(&format!(
            "Date: {}\n",
            field_or_not_found(result.date.as_ref().map(|d| d.text.as_str()))
        ));
        match &result.amount {
            Some(amount) => out.push_str(&format!("Amount: ${}\n", amount.value)),
            None => out.push_str(&format!("Amount: {}\n", style("NOT FOUND").dim())),
        }
        out.push_str(&format!(
            "Vendor: {}\n",
            field_or_not_found(result.vendor.as_deref())
        ));

        if !result.errors.is_empty() {
            out.push_str(&format!("\n{}\n", style("Errors:").red()));
            for err in &result.errors {
                out.push_str(&format!("  - {}\n", err));
            }
        }

        if let Some(discrepancies) = &self.discrepancies {
            out.push('\n');
            if discrepancies.is_empty() {
                out.push_str(&format!(
                    "{} Extraction matches the bill record\n",
                    style("✓").green()
                ));
            } else {
                out.push_str(&format!(
                    "{} {} discrepancies found:\n",
                    style("✗").red(),
                    discrepancies.len()
                ));
                for issue in discrepancies {
                    out.push_str(&format!(
                        "  [{}] {}\n",
                        severity_label(issue.severity),
                        issue.message
                    ));
                }
            }
        }

        if let Some(preview) = &result.text_preview {
            out.push_str(&format!("\nText preview:\n{}\n", "-".repeat(40)));
            let bounded: String = preview.chars().take(TEXT_PREVIEW_LEN).collect();
            out.push_str(&bounded);
            out.push('\n');
        }

        out
    }
}

fn method_name(method: TextSource) -> &'static str {
    match method {
        TextSource::Structured => "structured",
        TextSource::ImageRecognition => "image_recognition",
        TextSource::None => "none",
    }
}

fn field_or_not_found(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => style("NOT FOUND").dim().to_string(),
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Warning => style("WARNING").yellow().to_string(),
        Severity::Error => style("ERROR").red().to_string(),
    }
}
