//! Voucher domain types for creation and validation.
//!
//! This module defines the types used to build double-entry vouchers and the
//! payload handed to the voucher-creation endpoint.

use chrono::NaiveDate;
use kassa_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Voucher type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    /// Manually entered journal voucher.
    Manual,
    /// Generated from a customer invoice.
    Invoice,
    /// Incoming or outgoing payment.
    Payment,
    /// Payroll run.
    Salary,
    /// Anything else.
    Other,
}

impl VoucherType {
    /// Stable string form used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Invoice => "invoice",
            Self::Payment => "payment",
            Self::Salary => "salary",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One debit/credit line of a voucher.
///
/// A row normally carries only one side, but both sides are summed
/// independently if set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRow {
    /// Chart of accounts entry to post to.
    pub account_id: AccountId,
    /// Debit amount (non-negative).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (non-negative).
    #[serde(default)]
    pub credit: Decimal,
}

impl VoucherRow {
    /// Creates a debit-only row.
    #[must_use]
    pub const fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit-only row.
    #[must_use]
    pub const fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            debit: Decimal::ZERO,
            credit: amount,
        }
    }

    /// Returns true if either side is negative.
    #[must_use]
    pub fn has_negative_amount(&self) -> bool {
        (self.debit.is_sign_negative() && !self.debit.is_zero())
            || (self.credit.is_sign_negative() && !self.credit.is_zero())
    }
}

/// A double-entry voucher as built by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Accounting date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Classification.
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
    /// Debit/credit rows (at least 2 to be postable).
    pub rows: Vec<VoucherRow>,
}

/// Payload accepted by the voucher-creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoucherRequest {
    /// Accounting date.
    pub voucher_date: NaiveDate,
    /// Trimmed description.
    pub description: String,
    /// Classification.
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
    /// Rows in entry order.
    pub rows: Vec<VoucherRow>,
}

/// Voucher totals for validation and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoucherTotals {
    /// Sum of all debits.
    pub debit: Decimal,
    /// Sum of all credits.
    pub credit: Decimal,
    /// Whether the voucher is balanced (debits == credits).
    pub is_balanced: bool,
}

impl VoucherTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_voucher_totals_balanced() {
        let totals = VoucherTotals::new(dec!(100.00), dec!(100.00));
        assert!(totals.is_balanced);
        assert_eq!(totals.difference(), Decimal::ZERO);
    }

    #[test]
    fn test_voucher_totals_unbalanced() {
        let totals = VoucherTotals::new(dec!(100.00), dec!(50.00));
        assert!(!totals.is_balanced);
        assert_eq!(totals.difference(), dec!(50.00));
    }

    #[test]
    fn test_row_constructors() {
        let debit = VoucherRow::debit(AccountId::new(1930), dec!(10));
        assert_eq!(debit.credit, Decimal::ZERO);
        let credit = VoucherRow::credit(AccountId::new(3001), dec!(10));
        assert_eq!(credit.debit, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_detection() {
        let account = AccountId::new(1);
        assert!(!VoucherRow::debit(account, dec!(5)).has_negative_amount());
        assert!(!VoucherRow::debit(account, dec!(-0)).has_negative_amount());
        assert!(VoucherRow::debit(account, dec!(-5)).has_negative_amount());
        assert!(VoucherRow::credit(account, dec!(-0.01)).has_negative_amount());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = CreateVoucherRequest {
            voucher_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            description: "Office rent".to_string(),
            voucher_type: VoucherType::Manual,
            rows: vec![VoucherRow::debit(AccountId::new(5010), dec!(1000))],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["voucherDate"], "2024-03-31");
        assert_eq!(json["type"], "manual");
        assert_eq!(json["rows"][0]["accountId"], 5010);
        assert!(json["rows"][0].get("debit").is_some());
    }

    #[test]
    fn test_voucher_deserializes_with_missing_side() {
        let json = r#"{
            "date": "2024-01-15",
            "description": "Sale",
            "type": "invoice",
            "rows": [
                {"accountId": 1510, "debit": "1250"},
                {"accountId": 3001, "credit": "1000"},
                {"accountId": 2611, "credit": "250"}
            ]
        }"#;

        let voucher: Voucher = serde_json::from_str(json).unwrap();
        assert_eq!(voucher.voucher_type, VoucherType::Invoice);
        assert_eq!(voucher.rows.len(), 3);
        assert_eq!(voucher.rows[0].credit, Decimal::ZERO);
        assert_eq!(voucher.rows[2].credit, dec!(250));
    }
}
