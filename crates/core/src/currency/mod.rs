//! Rate tables, listing and currency conversion.

pub mod conversion;
pub mod error;
pub mod provider;
pub mod service;
pub mod table;
pub mod types;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, effective_rate};
pub use error::RateError;
pub use provider::{RateProvider, StaticRateProvider};
pub use service::ExchangeRateService;
pub use table::RateTable;
pub use types::{Conversion, ConversionRequest, RateListing};
