//! Double-entry voucher logic.
//!
//! This module implements the voucher side of the books:
//! - Voucher and row types, and the creation payload
//! - Balance rules (debits equal credits, non-zero total)
//! - Error types for rejected vouchers
//! - Voucher service gating the voucher-creation endpoint

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use service::{VoucherGateway, VoucherService};
pub use types::{CreateVoucherRequest, Voucher, VoucherRow, VoucherTotals, VoucherType};
pub use validation::{
    calculate_totals, is_balanced, total_credit, total_debit, validate_for_submission,
};
