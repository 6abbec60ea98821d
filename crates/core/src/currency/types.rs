//! Rate listing and conversion value types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fxrates_shared::CurrencyCode;
use rust_decimal::Decimal;

/// Input to a conversion.
///
/// Codes are kept exactly as the caller sent them; conversion lookups do not
/// fold case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Amount in the source currency. Must be positive.
    pub amount: Decimal,
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
}

impl ConversionRequest {
    /// Creates a new conversion request.
    #[must_use]
    pub fn new(amount: Decimal, from_currency: impl Into<String>, to_currency: impl Into<String>) -> Self {
        Self {
            amount,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
        }
    }
}

/// Rates of every other known currency for a base currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateListing {
    /// Requested base, uppercase.
    pub base_currency: CurrencyCode,
    /// Every other currency's rate. Never contains the base.
    pub rates: BTreeMap<CurrencyCode, Decimal>,
    /// When the listing was computed.
    pub last_updated: DateTime<Utc>,
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Amount as requested.
    pub original_amount: Decimal,
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Converted amount, 2 decimal places.
    pub converted_amount: Decimal,
    /// Target rate over source rate, 4 decimal places.
    pub exchange_rate: Decimal,
    /// When the conversion was computed.
    pub conversion_date: DateTime<Utc>,
}
