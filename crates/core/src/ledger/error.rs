//! Ledger error types for voucher validation.

use kassa_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating a voucher for submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A row carries a negative debit or credit.
    #[error("Voucher amounts cannot be negative")]
    NegativeAmount,

    /// Voucher must have at least 2 rows.
    #[error("Voucher must have at least 2 rows")]
    InsufficientRows,

    /// Voucher is not balanced (debits != credits).
    #[error("Debit must equal credit. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// A total does not fit the decimal range.
    #[error("Voucher total is too large")]
    AmountOverflow,

    /// Balanced, but every amount is zero.
    #[error("Voucher must have at least one amount")]
    NoAmount,

    /// Description is empty or whitespace.
    #[error("Voucher description is required")]
    MissingDescription,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::InsufficientRows => "INSUFFICIENT_ROWS",
            Self::Unbalanced { .. } => "UNBALANCED_VOUCHER",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::NoAmount => "NO_AMOUNT",
            Self::MissingDescription => "MISSING_DESCRIPTION",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InsufficientRows.error_code(), "INSUFFICIENT_ROWS");
        assert_eq!(
            LedgerError::Unbalanced {
                debit: dec!(1.00),
                credit: dec!(0.50),
            }
            .error_code(),
            "UNBALANCED_VOUCHER"
        );
        assert_eq!(LedgerError::NoAmount.error_code(), "NO_AMOUNT");
        assert_eq!(LedgerError::NegativeAmount.error_code(), "NEGATIVE_AMOUNT");
        assert_eq!(LedgerError::AmountOverflow.error_code(), "AMOUNT_OVERFLOW");
        assert_eq!(LedgerError::NoAmount.http_status_code(), 400);
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Unbalanced {
            debit: dec!(1000),
            credit: dec!(999),
        };
        assert_eq!(err.to_string(), "Debit must equal credit. Debit: 1000, Credit: 999");
        assert_eq!(
            LedgerError::NoAmount.to_string(),
            "Voucher must have at least one amount"
        );
    }

    #[test]
    fn test_converts_to_validation_app_error() {
        let app: AppError = LedgerError::NoAmount.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            app.to_string(),
            "Validation error: Voucher must have at least one amount"
        );
    }
}
