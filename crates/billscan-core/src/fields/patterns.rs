//! Compiled regex patterns for field extraction, in priority order.
//!
//! The extractors walk these as explicit ordered lists; the first pattern
//! that matches wins. Keep the ordering auditable here rather than
//! burying it in the extractor code.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number candidates, highest priority first.
    pub static ref INVOICE_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)(?:Invoice\s*Number|Invoice\s*No\.?|Invoice\s*#|Invoice|Inv)[:\s]*([A-Z0-9][-A-Z0-9]{3,})"
    ).unwrap();

    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"(?i)(?:Order\s*Number|Order\s*#|Order)[:\s]*([A-Z0-9][-A-Z0-9]{3,})"
    ).unwrap();

    pub static ref REFERENCE_NUMBER: Regex = Regex::new(
        r"(?i)(?:Reference|Ref\s*#|Ref)[:\s]*([A-Z0-9][-A-Z0-9]{3,})"
    ).unwrap();

    // Generic # followed by a longer token; collides with page numbers and
    // other hash-prefixed tokens, which is why it runs last.
    pub static ref HASH_NUMBER: Regex = Regex::new(
        r"(?i)#\s*([A-Z0-9][-A-Z0-9]{5,})"
    ).unwrap();

    // Labeled dates: label followed by one of three date shapes.
    pub static ref DATE_LABELED_NUMERIC: Regex = Regex::new(
        r"(?i)(?:Invoice\s*Date|Date|Issued)[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"
    ).unwrap();

    pub static ref DATE_LABELED_MONTH: Regex = Regex::new(
        r"(?i)(?:Invoice\s*Date|Date|Issued)[:\s]*([A-Za-z]+\s+\d{1,2},?\s+\d{4})"
    ).unwrap();

    pub static ref DATE_LABELED_ISO: Regex = Regex::new(
        r"(?i)(?:Invoice\s*Date|Date|Issued)[:\s]*(\d{4}[/-]\d{1,2}[/-]\d{1,2})"
    ).unwrap();

    // Unlabeled date shapes for the fallback scan.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"(\d{1,2}[/-]\d{1,2}[/-]\d{4})"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"(\d{4}[/-]\d{1,2}[/-]\d{1,2})"
    ).unwrap();

    pub static ref DATE_MONTH: Regex = Regex::new(
        r"([A-Za-z]+\s+\d{1,2},?\s+\d{4})"
    ).unwrap();

    // Labeled totals. The leading \b keeps "Subtotal" from matching the
    // "Total" alternative.
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Grand\s*Total|Amount\s*Due|Balance\s*Due|Total\s*Due|Total)\b[:\s]*\$?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref TOTAL_LABELED_USD: Regex = Regex::new(
        r"(?i)\b(?:Grand\s*Total|Amount\s*Due|Balance\s*Due|Total\s*Due|Total)\b[:\s]*USD\s*([\d,]+\.?\d*)"
    ).unwrap();

    // Bare currency amounts with exactly two decimal digits.
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    // Letterhead lines that are structure, not a vendor name.
    pub static ref VENDOR_SKIP: Regex = Regex::new(
        r"(?i)^(?:invoice|date|bill\s*to|ship\s*to|\d|page|total)"
    ).unwrap();
}
