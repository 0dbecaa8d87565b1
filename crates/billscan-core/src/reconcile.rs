//! Reconciliation of extracted fields against a bill record.

use chrono::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::bill::BillRecord;
use crate::models::extraction::ExtractionResult;

/// Absolute amount difference above which a discrepancy is raised.
const AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Date difference above which a discrepancy is raised, in seconds.
const DATE_TOLERANCE_SECS: i64 = 86_400;

/// How severe a detected mismatch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Worth a look, but plausibly benign formatting or parsing drift.
    Warning,
    /// A consequential mismatch.
    Error,
}

/// Which compared field a discrepancy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyField {
    InvoiceNumber,
    Amount,
    Date,
}

/// A tolerance-exceeding mismatch between an extracted field and the
/// bill record's corresponding field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// The compared field.
    pub field: DiscrepancyField,
    /// Severity of the mismatch.
    pub severity: Severity,
    /// Value extracted from the document.
    pub extracted_value: String,
    /// Value from the bill record.
    pub record_value: String,
    /// Human-readable description.
    pub message: String,
}

/// Compare an extraction result against a bill record.
///
/// A field is compared only when both sides have a value; absence on
/// either side skips that field silently. Emitted discrepancies follow a
/// fixed order (invoice number, amount, date) regardless of which fields
/// are present. Pure function: reconciling the same pair twice yields
/// the same sequence.
pub fn reconcile(extracted: &ExtractionResult, bill: &BillRecord) -> Vec<Discrepancy> {
    let mut issues = Vec::new();

    if let Some(number) = &extracted.invoice_number {
        // Numbers are legitimately formatted differently between
        // systems (leading zeros, prefixes), so a mismatch only warns.
        if !number.eq_ignore_ascii_case(&bill.bill_number) {
            issues.push(Discrepancy {
                field: DiscrepancyField::InvoiceNumber,
                severity: Severity::Warning,
                extracted_value: number.clone(),
                record_value: bill.bill_number.clone(),
                message: format!(
                    "Invoice number mismatch: document has '{}', bill has '{}'",
                    number, bill.bill_number
                ),
            });
        }
    }

    if let Some(amount) = &extracted.amount {
        let diff = (amount.value - bill.amount).abs();
        if diff > AMOUNT_TOLERANCE {
            issues.push(Discrepancy {
                field: DiscrepancyField::Amount,
                severity: Severity::Error,
                extracted_value: amount.value.to_string(),
                record_value: bill.amount.to_string(),
                message: format!(
                    "Amount mismatch: document has ${}, bill has ${}",
                    amount.value, bill.amount
                ),
            });
        }
    }

    if let Some(date) = &extracted.date {
        let diff_secs = (date.timestamp - bill.bill_date).abs();
        if diff_secs > DATE_TOLERANCE_SECS {
            let bill_date = format_bill_date(bill.bill_date);
            issues.push(Discrepancy {
                field: DiscrepancyField::Date,
                severity: Severity::Warning,
                extracted_value: date.text.clone(),
                record_value: bill_date.clone(),
                message: format!(
                    "Date mismatch: document has '{}', bill has {}",
                    date.text, bill_date
                ),
            });
        }
    }

    issues
}

fn format_bill_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::extraction::{AmountField, DateField};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn extraction() -> ExtractionResult {
        let mut result = ExtractionResult::empty("invoice.pdf");
        result.invoice_number = Some("INV-1234".to_string());
        result.amount = Some(AmountField {
            text: "100.00".to_string(),
            value: Decimal::from_str("100.00").unwrap(),
        });
        result.date = Some(DateField {
            text: "01/15/2024".to_string(),
            timestamp: 1_705_276_800, // 2024-01-15 00:00:00 UTC
        });
        result
    }

    fn bill() -> BillRecord {
        BillRecord {
            bill_number: "INV-1234".to_string(),
            amount: Decimal::from_str("100.00").unwrap(),
            bill_date: 1_705_276_800,
        }
    }

    #[test]
    fn test_matching_record_has_no_discrepancies() {
        assert_eq!(reconcile(&extraction(), &bill()), vec![]);
    }

    #[test]
    fn test_invoice_number_comparison_ignores_case() {
        let mut bill = bill();
        bill.bill_number = "inv-1234".to_string();
        assert_eq!(reconcile(&extraction(), &bill), vec![]);
    }

    #[test]
    fn test_invoice_number_mismatch_is_warning() {
        let mut bill = bill();
        bill.bill_number = "INV-9999".to_string();

        let issues = reconcile(&extraction(), &bill);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, DiscrepancyField::InvoiceNumber);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_amount_tolerance_boundary() {
        // One cent off: inside tolerance
        let mut one_cent = bill();
        one_cent.amount = Decimal::from_str("100.01").unwrap();
        assert_eq!(reconcile(&extraction(), &one_cent), vec![]);

        // Two cents off: an error
        let mut two_cents = bill();
        two_cents.amount = Decimal::from_str("100.02").unwrap();
        let issues = reconcile(&extraction(), &two_cents);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, DiscrepancyField::Amount);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_date_tolerance_boundary() {
        // Exactly one day: inside tolerance
        let mut one_day = bill();
        one_day.bill_date += 86_400;
        assert_eq!(reconcile(&extraction(), &one_day), vec![]);

        // One day and one second: a warning
        let mut over = bill();
        over.bill_date += 86_401;
        let issues = reconcile(&extraction(), &over);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, DiscrepancyField::Date);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let mut extracted = extraction();
        extracted.invoice_number = None;

        let mut bill = bill();
        bill.bill_number = "SOMETHING-ELSE".to_string();

        // No invoice-number discrepancy regardless of the record's value
        assert_eq!(reconcile(&extracted, &bill), vec![]);
    }

    #[test]
    fn test_all_mismatched_emits_fixed_field_order() {
        let mismatched = BillRecord {
            bill_number: "OTHER-1".to_string(),
            amount: Decimal::from_str("250.00").unwrap(),
            bill_date: 1_705_276_800 + 10 * 86_400,
        };

        let issues = reconcile(&extraction(), &mismatched);
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                DiscrepancyField::InvoiceNumber,
                DiscrepancyField::Amount,
                DiscrepancyField::Date,
            ]
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let extracted = extraction();
        let mut bill = bill();
        bill.amount = Decimal::from_str("123.45").unwrap();

        assert_eq!(reconcile(&extracted, &bill), reconcile(&extracted, &bill));
    }
}
