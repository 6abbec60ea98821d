//! Currency conversion arithmetic.
//!
//! CRITICAL: Rounding strategy:
//! - Converted amounts are rounded to 2 decimal places
//! - Effective rates are rounded to 4 decimal places
//! - Use banker's rounding (round half to even)
//!
//! Both rates are expressed as units per one USD, so converting goes through
//! USD: `amount / from_rate * to_rate`.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::RateError;

/// Decimal places of a converted amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Decimal places of an effective exchange rate.
pub const RATE_DECIMAL_PLACES: u32 = 4;

/// Rounds using banker's rounding (round half to even).
#[must_use]
pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Converts `amount` from a currency worth `from_rate` per USD into one worth
/// `to_rate` per USD, rounded to 2 decimal places.
///
/// # Errors
///
/// Returns [`RateError::Arithmetic`] if `from_rate` is zero or the result
/// overflows.
pub fn convert_amount(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> Result<Decimal, RateError> {
    let in_reference = amount
        .checked_div(from_rate)
        .ok_or_else(|| RateError::Arithmetic(format!("cannot divide {amount} by {from_rate}")))?;
    let converted = in_reference
        .checked_mul(to_rate)
        .ok_or_else(|| RateError::Arithmetic(format!("cannot multiply {in_reference} by {to_rate}")))?;

    let mut rounded = round(converted, AMOUNT_DECIMAL_PLACES);
    rounded.rescale(AMOUNT_DECIMAL_PLACES);
    Ok(rounded)
}

/// Returns the effective rate `to_rate / from_rate`, rounded to 4 decimal places.
///
/// # Errors
///
/// Returns [`RateError::Arithmetic`] if `from_rate` is zero.
pub fn effective_rate(from_rate: Decimal, to_rate: Decimal) -> Result<Decimal, RateError> {
    to_rate
        .checked_div(from_rate)
        .map(|rate| round(rate, RATE_DECIMAL_PLACES))
        .ok_or_else(|| RateError::Arithmetic(format!("cannot divide {to_rate} by {from_rate}")))
}
