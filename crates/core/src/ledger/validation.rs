//! Balance rules for double-entry vouchers.
//!
//! All sums are exact `Decimal` arithmetic, so equality checks are safe.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{VoucherRow, VoucherTotals};

/// Sum of all debits. Zero for no rows.
///
/// Saturates at `Decimal::MAX`; use [`calculate_totals`] to detect overflow.
#[must_use]
pub fn total_debit(rows: &[VoucherRow]) -> Decimal {
    rows.iter().fold(Decimal::ZERO, |sum, row| sum.saturating_add(row.debit))
}

/// Sum of all credits. Zero for no rows.
///
/// Saturates at `Decimal::MAX`; use [`calculate_totals`] to detect overflow.
#[must_use]
pub fn total_credit(rows: &[VoucherRow]) -> Decimal {
    rows.iter().fold(Decimal::ZERO, |sum, row| sum.saturating_add(row.credit))
}

/// Returns true if total debit equals total credit.
///
/// An empty voucher is trivially balanced. Totals that overflow are never
/// balanced.
#[must_use]
pub fn is_balanced(rows: &[VoucherRow]) -> bool {
    calculate_totals(rows).is_ok_and(|totals| totals.is_balanced)
}

/// Sums both sides in a single pass.
///
/// # Errors
///
/// Returns `LedgerError::AmountOverflow` if either sum exceeds the decimal range.
pub fn calculate_totals(rows: &[VoucherRow]) -> Result<VoucherTotals, LedgerError> {
    let (debit, credit) = rows
        .iter()
        .try_fold((Decimal::ZERO, Decimal::ZERO), |(d, c), row| {
            Some((d.checked_add(row.debit)?, c.checked_add(row.credit)?))
        })
        .ok_or(LedgerError::AmountOverflow)?;
    Ok(VoucherTotals::new(debit, credit))
}

/// Checks that a voucher may be sent to the backend.
///
/// Rules, in order:
/// 1. No negative amounts
/// 2. At least 2 rows
/// 3. Totals fit the decimal range
/// 4. Debits equal credits
/// 5. The balanced total is greater than zero
///
/// # Errors
///
/// Returns the first rule violated.
pub fn validate_for_submission(rows: &[VoucherRow]) -> Result<VoucherTotals, LedgerError> {
    if rows.iter().any(VoucherRow::has_negative_amount) {
        return Err(LedgerError::NegativeAmount);
    }

    if rows.len() < 2 {
        return Err(LedgerError::InsufficientRows);
    }

    let totals = calculate_totals(rows)?;
    if !totals.is_balanced {
        return Err(LedgerError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    if totals.debit <= Decimal::ZERO {
        return Err(LedgerError::NoAmount);
    }

    Ok(totals)
}
