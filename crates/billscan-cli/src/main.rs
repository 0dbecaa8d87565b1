//! CLI application for extracting and verifying invoice data from PDFs.

mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use billscan_core::{
    reconcile, BillRecord, InvoiceScanner, NoRecognizer, PureOcrRecognizer, TextRecognizer,
};

use report::VerificationReport;

/// Extract invoice fields from a PDF and verify them against a bill record
#[derive(Parser)]
#[command(name = "billscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Bill record (JSON file) to reconcile the extraction against
    #[arg(short, long)]
    bill: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: report::OutputFormat,

    /// Directory with OCR models for scanned documents
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let recognizer = build_recognizer(cli.model_dir.as_deref());

    let scanner = InvoiceScanner::new();
    let extraction = scanner.scan(&cli.input, recognizer.as_ref());

    let discrepancies = match &cli.bill {
        Some(bill_path) => {
            let data = fs::read_to_string(bill_path)
                .with_context(|| format!("failed to read bill record: {}", bill_path.display()))?;
            let bill: BillRecord = serde_json::from_str(&data)
                .with_context(|| format!("invalid bill record: {}", bill_path.display()))?;
            Some(reconcile(&extraction, &bill))
        }
        None => None,
    };

    let report = VerificationReport {
        extraction,
        discrepancies,
    };

    println!("{}", report.render(cli.format)?);
    Ok(())
}

/// Load the OCR recognizer if models are available; otherwise scanning
/// falls back to the structured text layer only.
fn build_recognizer(model_dir: Option<&std::path::Path>) -> Box<dyn TextRecognizer> {
    let Some(dir) = model_dir else {
        warn!("No model directory given; image recognition unavailable for scanned documents");
        return Box::new(NoRecognizer);
    };

    match PureOcrRecognizer::from_dir(dir) {
        Ok(recognizer) => Box::new(recognizer),
        Err(e) => {
            warn!("Failed to load OCR models from {}: {}", dir.display(), e);
            Box::new(NoRecognizer)
        }
    }
}
