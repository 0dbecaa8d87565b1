//! Vendor name extraction.

use super::patterns::VENDOR_SKIP;

/// How many lines of letterhead to examine.
const HEADER_LINES: usize = 10;

/// Extract the vendor name from text.
///
/// Positional heuristic: vendor names appear in letterhead position, so
/// only the first few lines are examined. Structural labels, page
/// numbers, and out-of-bounds lines are skipped; the first remaining
/// line that starts with an uppercase letter is taken as the vendor.
pub fn extract_vendor(text: &str) -> Option<String> {
    for line in text.lines().take(HEADER_LINES) {
        let line = line.trim();

        let len = line.chars().count();
        if len < 3 || len > 100 {
            continue;
        }

        if VENDOR_SKIP.is_match(line) {
            continue;
        }

        if line.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            return Some(line.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vendor_in_letterhead() {
        let text = "Acme Supplies Inc.\n123 Main Street\nINVOICE\n";
        assert_eq!(extract_vendor(text), Some("Acme Supplies Inc.".to_string()));
    }

    #[test]
    fn test_structural_labels_skipped() {
        let text = "INVOICE\nDate: 01/15/2024\nBill To:\nAcme Supplies Inc.\n";
        assert_eq!(extract_vendor(text), Some("Acme Supplies Inc.".to_string()));
    }

    #[test]
    fn test_lowercase_line_not_a_vendor() {
        let text = "invoice\nacme supplies\nGlobex Corporation\n";
        assert_eq!(extract_vendor(text), Some("Globex Corporation".to_string()));
    }

    #[test]
    fn test_leading_digit_skipped() {
        let text = "123 Industrial Way\nWidgets & Co\n";
        assert_eq!(extract_vendor(text), Some("Widgets & Co".to_string()));
    }

    #[test]
    fn test_only_first_ten_lines_examined() {
        let mut text = "-\n".repeat(10);
        text.push_str("Acme Supplies Inc.\n");
        assert_eq!(extract_vendor(&text), None);
    }

    #[test]
    fn test_length_bounds() {
        let long_line = "A".repeat(101);
        let text = format!("{}\nOk Vendor Ltd\n", long_line);
        assert_eq!(extract_vendor(&text), Some("Ok Vendor Ltd".to_string()));
    }
}
