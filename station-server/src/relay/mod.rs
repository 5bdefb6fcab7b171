//! Outbound HTTP relays.
//!
//! Two thin server-side fetchers for the dashboard: an allow-listed URL
//! relay for aviation weather text feeds, and a forecast relay that
//! forwards coordinates to a forecast API. Neither retries or caches.

mod client;
mod error;
mod forecast;

pub use client::{
    DEFAULT_ALLOWED_PREFIXES, DEFAULT_CONTENT_TYPE, RelayClient, RelayConfig, RelayResponse,
    cache_busted,
};
pub use error::{ForecastError, RelayError};
pub use forecast::{DEFAULT_FORECAST_URL, ForecastClient, ForecastConfig, ForecastResponse};
