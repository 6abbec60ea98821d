//! Exchange rate service for listing and conversion operations.
//!
//! The service holds two independent rate providers: one backs the listing
//! operation, the other backs conversion. With the default configuration they
//! carry different tables (five listed currencies, three convertible ones).

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fxrates_shared::{AppResult, ListingBasis, RatesConfig};
use rust_decimal::Decimal;

use super::conversion::{convert_amount, effective_rate, round};
use super::error::RateError;
use super::provider::{RateProvider, StaticRateProvider};
use super::table::RateTable;
use super::types::{Conversion, ConversionRequest, RateListing};

/// Decimal places of a rate re-derived for a requested base.
pub const REBASED_RATE_DECIMAL_PLACES: u32 = 6;

/// Exchange rate service.
///
/// Stateless apart from its providers; safe to share across requests.
#[derive(Clone)]
pub struct ExchangeRateService {
    listing: Arc<dyn RateProvider>,
    conversion: Arc<dyn RateProvider>,
    basis: ListingBasis,
}

impl std::fmt::Debug for ExchangeRateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateService")
            .field("listing", &self.listing.name())
            .field("conversion", &self.conversion.name())
            .field("basis", &self.basis)
            .finish()
    }
}

impl ExchangeRateService {
    /// Creates a service from explicit providers.
    #[must_use]
    pub fn new(
        listing: Arc<dyn RateProvider>,
        conversion: Arc<dyn RateProvider>,
        basis: ListingBasis,
    ) -> Self {
        Self {
            listing,
            conversion,
            basis,
        }
    }

    /// Builds static providers from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either table is invalid.
    pub fn from_config(config: &RatesConfig) -> AppResult<Self> {
        let listing = RateTable::from_entries(&config.listing)?;
        let conversion = RateTable::from_entries(&config.conversion)?;

        Ok(Self::new(
            Arc::new(StaticRateProvider::new("listing", listing)),
            Arc::new(StaticRateProvider::new("conversion", conversion)),
            config.listing_basis,
        ))
    }

    /// Basis used by [`Self::list_rates`].
    #[must_use]
    pub const fn basis(&self) -> ListingBasis {
        self.basis
    }

    /// Table backing the listing operation.
    #[must_use]
    pub fn listing_table(&self) -> &RateTable {
        self.listing.table()
    }

    /// Table backing the conversion operation.
    #[must_use]
    pub fn conversion_table(&self) -> &RateTable {
        self.conversion.table()
    }

    /// Lists every other currency's rate for `base`.
    ///
    /// `base` is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidCurrency`] with `base` as given if it is not
    /// in the listing table.
    pub fn list_rates(&self, base: &str) -> Result<RateListing, RateError> {
        self.list_rates_at(base, Utc::now())
    }

    /// Same as [`Self::list_rates`] with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// See [`Self::list_rates`].
    pub fn list_rates_at(&self, base: &str, now: DateTime<Utc>) -> Result<RateListing, RateError> {
        let table = self.listing.table();
        let normalized = base.to_uppercase();

        let (base_code, base_rate) = table
            .get_entry(&normalized)
            .ok_or_else(|| RateError::InvalidCurrency(base.to_string()))?;

        let rates: BTreeMap<_, _> = table
            .iter()
            .filter(|(code, _)| *code != base_code)
            .map(|(code, rate)| {
                self.listed_rate(rate, base_rate)
                    .map(|listed| (code.clone(), listed))
            })
            .collect::<Result<_, RateError>>()?;

        Ok(RateListing {
            base_currency: base_code.clone(),
            rates,
            last_updated: now,
        })
    }

    fn listed_rate(&self, rate: Decimal, base_rate: Decimal) -> Result<Decimal, RateError> {
        match self.basis {
            ListingBasis::Reference => Ok(rate),
            ListingBasis::Requested => rate
                .checked_div(base_rate)
                .map(|rebased| round(rebased, REBASED_RATE_DECIMAL_PLACES))
                .ok_or_else(|| RateError::Arithmetic(format!("cannot divide {rate} by {base_rate}"))),
        }
    }

    /// Converts an amount between two currencies of the conversion table.
    ///
    /// Codes are matched exactly as given.
    ///
    /// # Errors
    ///
    /// - [`RateError::InvalidAmount`] if the amount is not positive
    /// - [`RateError::CurrencyNotSupported`] if either code is unknown
    /// - [`RateError::Arithmetic`] if the computation fails
    pub fn convert(&self, request: &ConversionRequest) -> Result<Conversion, RateError> {
        self.convert_at(request, Utc::now())
    }

    /// Same as [`Self::convert`] with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// See [`Self::convert`].
    pub fn convert_at(&self, request: &ConversionRequest, now: DateTime<Utc>) -> Result<Conversion, RateError> {
        if request.amount <= Decimal::ZERO {
            return Err(RateError::InvalidAmount);
        }

        let table = self.conversion.table();
        let (Some(from_rate), Some(to_rate)) = (
            table.get(&request.from_currency),
            table.get(&request.to_currency),
        ) else {
            return Err(RateError::CurrencyNotSupported);
        };

        Ok(Conversion {
            original_amount: request.amount,
            from_currency: request.from_currency.clone(),
            to_currency: request.to_currency.clone(),
            converted_amount: convert_amount(request.amount, from_rate, to_rate)?,
            exchange_rate: effective_rate(from_rate, to_rate)?,
            conversion_date: now,
        })
    }
}
