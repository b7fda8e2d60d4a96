//! Voucher service: validation before the voucher-creation call.
//!
//! The backend is reached only through [`VoucherGateway`]. A voucher that
//! fails validation never reaches it.

use kassa_shared::types::VoucherId;
use kassa_shared::{AppResult, SessionContext};
use tracing::{info, warn};

use super::error::LedgerError;
use super::types::{CreateVoucherRequest, Voucher};
use super::validation::validate_for_submission;

/// The voucher-creation endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait VoucherGateway {
    /// Sends a validated voucher and returns the ID the backend assigned.
    fn create_voucher(&self, token: &str, request: &CreateVoucherRequest) -> AppResult<VoucherId>;
}

/// Voucher service for validation and submission.
///
/// Contains no transport code of its own.
pub struct VoucherService;

impl VoucherService {
    /// Validates a voucher and builds the request payload.
    ///
    /// Balance rules run first so the user sees the amount problem before
    /// a missing description.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the voucher is not postable.
    pub fn prepare(voucher: &Voucher) -> Result<CreateVoucherRequest, LedgerError> {
        validate_for_submission(&voucher.rows)?;

        let description = voucher.description.trim();
        if description.is_empty() {
            return Err(LedgerError::MissingDescription);
        }

        Ok(CreateVoucherRequest {
            voucher_date: voucher.date,
            description: description.to_string(),
            voucher_type: voucher.voucher_type,
            rows: voucher.rows.clone(),
        })
    }

    /// Validates and submits a voucher through the gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` without a session,
    /// `AppError::Validation` for rule violations, or whatever the gateway returns.
    pub fn submit<G>(
        gateway: &G,
        session: &SessionContext,
        voucher: &Voucher,
    ) -> AppResult<VoucherId>
    where
        G: VoucherGateway + ?Sized,
    {
        let token = session.require_token()?;

        let request = match Self::prepare(voucher) {
            Ok(request) => request,
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    voucher_type = %voucher.voucher_type,
                    rows = voucher.rows.len(),
                    "Voucher rejected: {err}"
                );
                return Err(err.into());
            }
        };

        let id = gateway.create_voucher(token, &request)?;
        info!(
            voucher_id = %id,
            voucher_type = %request.voucher_type,
            date = %request.voucher_date,
            "Voucher created"
        );
        Ok(id)
    }
}
