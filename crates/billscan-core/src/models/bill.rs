//! External bill record supplied by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bill record from an external billing system.
///
/// Field names follow the billing system's JSON convention
/// (`BillNumber`, `Amount`, `BillDate`). The core only reads these three
/// fields; anything else in the record is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillRecord {
    /// Bill/invoice number as recorded by the billing system.
    pub bill_number: String,

    /// Billed amount.
    pub amount: Decimal,

    /// Bill date as epoch seconds.
    pub bill_date: i64,
}
