//! Property-based tests for rate listing and conversion.
//!
//! - Rounding scale of converted amounts and effective rates
//! - Determinism of conversion
//! - Listing shape for every listed base

use proptest::prelude::*;
use rust_decimal::Decimal;

use fxrates_shared::{ListingBasis, RatesConfig};

use super::conversion::{convert_amount, effective_rate, round};
use super::error::RateError;
use super::service::ExchangeRateService;
use super::types::ConversionRequest;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-positive amounts (-1,000,000.00 to 0.00).
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive per-USD rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a convertible currency code.
fn convertible_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP"])
}

/// Strategy to pick a listed currency code in random case.
fn listed_code_any_case() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CAD"]),
        any::<bool>(),
    )
        .prop_map(|(code, lower)| if lower { code.to_lowercase() } else { code.to_string() })
}

fn service(basis: ListingBasis) -> ExchangeRateService {
    let config = RatesConfig {
        listing_basis: basis,
        ..RatesConfig::default()
    };
    ExchangeRateService::from_config(&config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converted amounts always carry exactly 2 decimal places.
    #[test]
    fn prop_converted_amount_has_2_decimals(
        amount in positive_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        let result = convert_amount(amount, from_rate, to_rate).unwrap();
        prop_assert_eq!(result.scale(), 2, "Result {} should have 2 decimal places", result);
    }

    /// Effective rates carry at most 4 decimal places.
    #[test]
    fn prop_effective_rate_rounds_to_4_decimals(
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        let rate = effective_rate(from_rate, to_rate).unwrap();
        prop_assert!(rate.scale() <= 4, "Rate {} should have at most 4 decimal places", rate);
    }

    /// Equal rates preserve the amount.
    #[test]
    fn prop_same_rate_preserves_amount(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, rate).unwrap();
        prop_assert_eq!(result, round(amount, 2));
    }

    /// Positive inputs never produce a negative amount.
    #[test]
    fn prop_positive_inputs_non_negative_output(
        amount in positive_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        let result = convert_amount(amount, from_rate, to_rate).unwrap();
        prop_assert!(result >= Decimal::ZERO);
    }

    /// Identical requests yield identical amounts and rates.
    #[test]
    fn prop_conversion_is_deterministic(
        amount in positive_amount(),
        from in convertible_code(),
        to in convertible_code(),
    ) {
        let service = service(ListingBasis::Reference);
        let request = ConversionRequest::new(amount, from, to);

        let first = service.convert(&request).unwrap();
        let second = service.convert(&request).unwrap();

        prop_assert_eq!(first.converted_amount, second.converted_amount);
        prop_assert_eq!(first.exchange_rate, second.exchange_rate);
    }

    /// Non-positive amounts are rejected before any currency check.
    #[test]
    fn prop_non_positive_amount_rejected(
        amount in non_positive_amount(),
        from in "[A-Za-z]{0,4}",
        to in "[A-Za-z]{0,4}",
    ) {
        let service = service(ListingBasis::Reference);
        let err = service.convert(&ConversionRequest::new(amount, from, to)).unwrap_err();
        prop_assert_eq!(err, RateError::InvalidAmount);
    }

    /// Every listed base yields the four other currencies, in either basis.
    #[test]
    fn prop_listing_excludes_base(
        base in listed_code_any_case(),
        rebase in any::<bool>(),
    ) {
        let basis = if rebase { ListingBasis::Requested } else { ListingBasis::Reference };
        let listing = service(basis).list_rates(&base).unwrap();

        prop_assert_eq!(listing.base_currency.as_str(), base.to_uppercase());
        prop_assert_eq!(listing.rates.len(), 4);
        prop_assert!(!listing.rates.contains_key(listing.base_currency.as_str()));
        prop_assert!(listing.rates.values().all(|rate| *rate > Decimal::ZERO));
    }
}
