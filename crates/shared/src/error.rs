//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// No authenticated session.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend or another remote collaborator failed.
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Validation(_) => 400,
            Self::ExternalService(_) => 502,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }

    /// Returns true if the failure happened outside this process and a retry
    /// may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unauthorized(AppError::Unauthorized("no session".into()), 401, "UNAUTHORIZED")]
    #[case::validation(AppError::Validation("bad".into()), 400, "VALIDATION_ERROR")]
    #[case::external(
        AppError::ExternalService("timeout".into()),
        502,
        "EXTERNAL_SERVICE_ERROR"
    )]
    fn test_status_and_error_codes(
        #[case] err: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[rstest]
    #[case(AppError::Unauthorized("msg".into()), "Authentication failed: msg")]
    #[case(AppError::Validation("msg".into()), "Validation error: msg")]
    #[case(AppError::ExternalService("msg".into()), "External service error: msg")]
    fn test_error_display(#[case] err: AppError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    #[case(AppError::ExternalService("timeout".into()), true)]
    #[case(AppError::Validation("bad".into()), false)]
    #[case(AppError::Unauthorized("no session".into()), false)]
    fn test_only_external_failures_are_retryable(#[case] err: AppError, #[case] retryable: bool) {
        assert_eq!(err.is_retryable(), retryable);
    }
}
