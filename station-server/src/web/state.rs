//! Application state for the web layer.

use std::sync::Arc;

use crate::relay::{ForecastClient, RelayClient};
use crate::resolve::StationResolver;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station resolver over the reference datasets
    pub resolver: Arc<StationResolver>,

    /// Allow-listed URL relay
    pub relay: Arc<RelayClient>,

    /// Forecast relay
    pub forecast: Arc<ForecastClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(resolver: StationResolver, relay: RelayClient, forecast: ForecastClient) -> Self {
        Self {
            resolver: Arc::new(resolver),
            relay: Arc::new(relay),
            forecast: Arc::new(forecast),
        }
    }
}
