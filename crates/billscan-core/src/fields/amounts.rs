//! Total amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{CURRENCY_AMOUNT, TOTAL_LABELED, TOTAL_LABELED_USD};
use crate::models::extraction::AmountField;

/// Extract the total amount from text.
///
/// Labeled totals take priority: invoices list several dollar figures
/// (line items, subtotal, tax) and only the labeled one is authoritative.
/// Without a labeled total, the maximum bare `$` amount is taken, the
/// grand total usually being the largest figure on the page.
pub fn extract_amount(text: &str) -> Option<AmountField> {
    for pattern in [&*TOTAL_LABELED, &*TOTAL_LABELED_USD] {
        if let Some(caps) = pattern.captures(text) {
            if let Some(value) = parse_amount(&caps[1]) {
                return Some(AmountField {
                    text: caps[1].to_string(),
                    value,
                });
            }
            // Unparseable token counts as not found for this pattern
        }
    }

    let mut best: Option<AmountField> = None;
    for caps in CURRENCY_AMOUNT.captures_iter(text) {
        let Some(value) = parse_amount(&caps[1]) else {
            continue;
        };
        // Strictly greater, so the first occurrence wins a tie
        if best.as_ref().is_none_or(|b| value > b.value) {
            best = Some(AmountField {
                text: caps[1].to_string(),
                value,
            });
        }
    }

    best
}

/// Parse a numeric token to an exact decimal, stripping thousands
/// separators first.
fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    let cleaned = cleaned.trim_end_matches('.');
    Decimal::from_str(cleaned).ok()
}
