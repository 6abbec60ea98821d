//! Rate sources injected into the exchange rate service.

use super::table::RateTable;

/// A source of exchange rates relative to USD.
///
/// Implementations must be cheap to read from concurrently; the service calls
/// `table` on every request.
pub trait RateProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// The current rate table.
    fn table(&self) -> &RateTable;
}

/// Provider backed by a table fixed at startup.
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    name: String,
    table: RateTable,
}

impl StaticRateProvider {
    /// Creates a provider serving `table`.
    #[must_use]
    pub fn new(name: impl Into<String>, table: RateTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

impl RateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn table(&self) -> &RateTable {
        &self.table
    }
}
