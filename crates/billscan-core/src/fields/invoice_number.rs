//! Invoice number extraction.

use regex::Regex;

use super::patterns::{HASH_NUMBER, INVOICE_NUMBER_LABELED, ORDER_NUMBER, REFERENCE_NUMBER};

/// Extract the invoice number from text.
///
/// Candidate patterns are tried in a fixed priority order: invoice
/// labels, then order labels, then reference labels, then a bare `#`
/// token. The first match of the first matching pattern wins.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    let candidates: [&Regex; 4] = [
        &INVOICE_NUMBER_LABELED,
        &ORDER_NUMBER,
        &REFERENCE_NUMBER,
        &HASH_NUMBER,
    ];

    for pattern in candidates {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_invoice_number() {
        assert_eq!(
            extract_invoice_number("Invoice Number: INV-2024-001"),
            Some("INV-2024-001".to_string())
        );
        assert_eq!(
            extract_invoice_number("Invoice #INV-1234"),
            Some("INV-1234".to_string())
        );
        assert_eq!(
            extract_invoice_number("invoice no. 78421"),
            Some("78421".to_string())
        );
    }

    #[test]
    fn test_order_and_reference_labels() {
        assert_eq!(
            extract_invoice_number("Order #: ORD-5521"),
            Some("ORD-5521".to_string())
        );
        assert_eq!(
            extract_invoice_number("Ref# ABC-9988"),
            Some("ABC-9988".to_string())
        );
    }

    #[test]
    fn test_labeled_pattern_beats_generic_hash() {
        let text = "Some header\n#XYZZY99\nInvoice #INV-1234\n";
        assert_eq!(extract_invoice_number(text), Some("INV-1234".to_string()));
    }

    #[test]
    fn test_generic_hash_requires_six_chars() {
        assert_eq!(
            extract_invoice_number("see #XYZZY99 for details"),
            Some("XYZZY99".to_string())
        );
        // Five characters is below the generic threshold
        assert_eq!(extract_invoice_number("page #A1234 footer"), None);
    }

    #[test]
    fn test_no_number_found() {
        assert_eq!(extract_invoice_number("plain prose with nothing useful"), None);
    }
}
