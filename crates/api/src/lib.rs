//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for rate listing and conversion
//! - The error boundary mapping failures to plain-text responses
//! - Response types

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use fxrates_core::currency::ExchangeRateService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Path under which the rate routes are also served, matching the
/// controller route of earlier deployments.
pub const LEGACY_PREFIX: &str = "/api/ExchangeRate";

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Rate listing and conversion service.
    pub rates: Arc<ExchangeRateService>,
}

impl AppState {
    /// Creates state around a rate service.
    #[must_use]
    pub fn new(rates: ExchangeRateService) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .nest(LEGACY_PREFIX, routes::exchange_rates::routes())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
