//! Application configuration management.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate table configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// How the listing endpoint expresses rates for a non-USD base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingBasis {
    /// Rates are returned as stored, relative to USD, whatever base was asked for.
    #[default]
    Reference,
    /// Rates are re-derived relative to the requested base.
    Requested,
}

/// Rate table configuration.
///
/// Values are units of the currency per one USD. Keys are normalized to
/// uppercase when the tables are built.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Table served by the listing endpoint.
    #[serde(default = "default_listing_rates")]
    pub listing: BTreeMap<String, Decimal>,
    /// Table used by the conversion endpoint.
    #[serde(default = "default_conversion_rates")]
    pub conversion: BTreeMap<String, Decimal>,
    /// Basis for listed rates.
    #[serde(default)]
    pub listing_basis: ListingBasis,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            listing: default_listing_rates(),
            conversion: default_conversion_rates(),
            listing_basis: ListingBasis::default(),
        }
    }
}

fn default_listing_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("USD".to_string(), Decimal::new(10, 1)),
        ("EUR".to_string(), Decimal::new(85, 2)),
        ("GBP".to_string(), Decimal::new(75, 2)),
        ("JPY".to_string(), Decimal::new(1100, 1)),
        ("CAD".to_string(), Decimal::new(125, 2)),
    ])
}

// JPY and CAD are listed but not convertible.
fn default_conversion_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("USD".to_string(), Decimal::new(10, 1)),
        ("EUR".to_string(), Decimal::new(85, 2)),
        ("GBP".to_string(), Decimal::new(75, 2)),
    ])
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXRATES").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
