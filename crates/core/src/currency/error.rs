//! Rate operation errors.

use fxrates_shared::AppError;
use thiserror::Error;

/// Errors returned by rate listing and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// Base currency is not in the listing table. Carries the code as given.
    #[error("Currency {0} not supported")]
    InvalidCurrency(String),

    /// Source or target currency is not in the conversion table.
    #[error("Currency not supported")]
    CurrencyNotSupported,

    /// Amount is zero or negative.
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// Decimal arithmetic failed (zero rate, overflow).
    #[error("Rate arithmetic failed: {0}")]
    Arithmetic(String),
}

impl RateError {
    /// Returns true if the error was caused by the caller's input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Arithmetic(_))
    }
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        if err.is_invalid_input() {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}
