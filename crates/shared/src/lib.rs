//! Shared types, errors, and configuration for FxRates.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ListingBasis, RatesConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::CurrencyCode;
