//! Immutable rate tables.

use std::collections::BTreeMap;

use fxrates_shared::{AppError, AppResult, CurrencyCode};
use rust_decimal::Decimal;

/// Mapping from currency code to units of that currency per one USD.
///
/// Built once at startup and never mutated. Every rate is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Builds a table from raw configured entries.
    ///
    /// Codes are normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the table is empty, a code is malformed,
    /// two codes collide after normalization, or a rate is not positive.
    pub fn from_entries<'a, I>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a Decimal)>,
    {
        let mut rates = BTreeMap::new();

        for (raw_code, rate) in entries {
            let code: CurrencyCode = raw_code.parse().map_err(AppError::Config)?;
            if *rate <= Decimal::ZERO {
                return Err(AppError::Config(format!(
                    "Rate for {code} must be positive, got {rate}"
                )));
            }
            if rates.insert(code.clone(), *rate).is_some() {
                return Err(AppError::Config(format!("Duplicate rate for {code}")));
            }
        }

        if rates.is_empty() {
            return Err(AppError::Config("Rate table cannot be empty".to_string()));
        }

        Ok(Self { rates })
    }

    /// Looks up a rate by exact code. No case folding.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns the stored key and rate for an exact code.
    #[must_use]
    pub fn get_entry(&self, code: &str) -> Option<(&CurrencyCode, Decimal)> {
        self.rates.get_key_value(code).map(|(k, v)| (k, *v))
    }

    /// Iterates over entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.rates.iter().map(|(k, v)| (k, *v))
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false for a constructed table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
