//! Exchange rate listing and conversion routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use fxrates_core::currency::{Conversion, ConversionRequest, RateListing};
use fxrates_shared::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{AppState, error::ApiError};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rates/{base_currency}", get(get_exchange_rates))
        .route("/convert", post(convert_currency))
}

/// A decimal written to JSON as a number, digits and scale preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JsonDecimal(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// Response for a rate listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateListingResponse {
    /// Base currency code, uppercase.
    pub base_currency: String,
    /// Rates of every other currency.
    pub rates: BTreeMap<String, JsonDecimal>,
    /// When the listing was computed.
    pub last_updated: DateTime<Utc>,
}

impl From<RateListing> for RateListingResponse {
    fn from(listing: RateListing) -> Self {
        Self {
            base_currency: listing.base_currency.into(),
            rates: listing
                .rates
                .into_iter()
                .map(|(code, rate)| (code.into(), JsonDecimal(rate)))
                .collect(),
            last_updated: listing.last_updated,
        }
    }
}

/// Request body for a conversion.
///
/// Accepts PascalCase and camelCase field names. Missing fields default to
/// zero or empty and then fail validation. The amount is read from the
/// literal JSON digits, never through a binary float.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Amount in the source currency.
    #[serde(
        default,
        alias = "Amount",
        deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize"
    )]
    pub amount: Decimal,
    /// Source currency code.
    #[serde(default, alias = "FromCurrency")]
    pub from_currency: String,
    /// Target currency code.
    #[serde(default, alias = "ToCurrency")]
    pub to_currency: String,
}

impl From<ConvertRequest> for ConversionRequest {
    fn from(request: ConvertRequest) -> Self {
        Self::new(request.amount, request.from_currency, request.to_currency)
    }
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Amount as requested.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub original_amount: Decimal,
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Converted amount, 2 decimal places.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub converted_amount: Decimal,
    /// Effective exchange rate, 4 decimal places.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exchange_rate: Decimal,
    /// When the conversion was computed.
    pub conversion_date: DateTime<Utc>,
}

impl From<Conversion> for ConversionResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            original_amount: conversion.original_amount,
            from_currency: conversion.from_currency,
            to_currency: conversion.to_currency,
            converted_amount: conversion.converted_amount,
            exchange_rate: conversion.exchange_rate,
            conversion_date: conversion.conversion_date,
        }
    }
}

/// GET `/rates/{base_currency}` - List rates for a base currency.
async fn get_exchange_rates(
    State(state): State<AppState>,
    Path(base_currency): Path<String>,
) -> Result<Json<RateListingResponse>, ApiError> {
    let listing = state.rates.list_rates(&base_currency)?;

    info!(base = %base_currency, "Exchange rates retrieved for {base_currency}");

    Ok(Json(listing.into()))
}

/// POST `/convert` - Convert an amount between two currencies.
async fn convert_currency(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = ConversionRequest::from(payload);

    let conversion = state.rates.convert(&request)?;

    debug!(
        from = %conversion.from_currency,
        to = %conversion.to_currency,
        amount = %conversion.original_amount,
        converted = %conversion.converted_amount,
        "Currency converted"
    );

    Ok(Json(conversion.into()))
}
