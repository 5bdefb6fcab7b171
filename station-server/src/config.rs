//! Server configuration.
//!
//! Everything has a working default; environment variables override
//! individual settings.

use std::net::SocketAddr;
use std::str::FromStr;

use crate::dataset::DatasetConfig;
use crate::relay::{ForecastConfig, RelayConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unparsable
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Reference dataset locations
    pub datasets: DatasetConfig,

    /// Allow-listed relay settings
    pub relay: RelayConfig,

    /// Forecast relay settings
    pub forecast: ForecastConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Recognised variables:
    ///
    /// * `STATION_BIND_ADDR` - listen address (default `127.0.0.1:3000`)
    /// * `STATION_DATA_DIR` - directory holding the CSV files (default `.`)
    /// * `STATION_AIRPORTS_FILE`, `STATION_RUNWAYS_FILE`, `STATION_FREQUENCIES_FILE`
    /// * `RELAY_ALLOWED_PREFIXES` - comma-separated URL prefixes
    /// * `RELAY_TIMEOUT_SECS`
    /// * `FORECAST_BASE_URL`, `FORECAST_TIMEOUT_SECS`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(addr) = get("STATION_BIND_ADDR") {
            config.bind_addr = parse("STATION_BIND_ADDR", &addr)?;
        }

        if let Some(dir) = get("STATION_DATA_DIR") {
            config.datasets.data_dir = dir.into();
        }
        if let Some(name) = get("STATION_AIRPORTS_FILE") {
            config.datasets = config.datasets.with_airports_file(name);
        }
        if let Some(name) = get("STATION_RUNWAYS_FILE") {
            config.datasets = config.datasets.with_runways_file(name);
        }
        if let Some(name) = get("STATION_FREQUENCIES_FILE") {
            config.datasets = config.datasets.with_frequencies_file(name);
        }

        if let Some(prefixes) = get("RELAY_ALLOWED_PREFIXES") {
            let prefixes: Vec<_> = prefixes
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            config.relay = RelayConfig::new(prefixes).with_timeout(config.relay.timeout_secs);
        }
        if let Some(secs) = get("RELAY_TIMEOUT_SECS") {
            config.relay.timeout_secs = parse("RELAY_TIMEOUT_SECS", &secs)?;
        }

        if let Some(url) = get("FORECAST_BASE_URL") {
            config.forecast = config.forecast.with_base_url(url);
        }
        if let Some(secs) = get("FORECAST_TIMEOUT_SECS") {
            config.forecast = config
                .forecast
                .with_timeout(parse("FORECAST_TIMEOUT_SECS", &secs)?);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            datasets: DatasetConfig::default(),
            relay: RelayConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn from_vars(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.datasets.airports_path(), PathBuf::from("./airports.csv"));
        assert_eq!(config.relay.allowed_prefixes.len(), 3);
        assert_eq!(config.relay.timeout_secs, 12);
        assert_eq!(config.forecast.timeout_secs, 30);
    }

    #[test]
    fn overrides() {
        let config = from_vars(&[
            ("STATION_BIND_ADDR", "0.0.0.0:8080"),
            ("STATION_DATA_DIR", "/srv/ourairports"),
            ("STATION_RUNWAYS_FILE", "rwy.csv"),
            ("RELAY_ALLOWED_PREFIXES", "https://a.example/, ,https://b.example/x"),
            ("RELAY_TIMEOUT_SECS", "5"),
            ("FORECAST_BASE_URL", "http://localhost:9000/v1/forecast"),
            ("FORECAST_TIMEOUT_SECS", "10"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.datasets.runways_path(),
            PathBuf::from("/srv/ourairports/rwy.csv")
        );
        assert_eq!(
            config.datasets.airports_path(),
            PathBuf::from("/srv/ourairports/airports.csv")
        );
        assert_eq!(
            config.relay.allowed_prefixes,
            vec!["https://a.example/".to_string(), "https://b.example/x".to_string()]
        );
        assert_eq!(config.relay.timeout_secs, 5);
        assert_eq!(config.forecast.base_url, "http://localhost:9000/v1/forecast");
        assert_eq!(config.forecast.timeout_secs, 10);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = from_vars(&[("STATION_BIND_ADDR", "  "), ("STATION_DATA_DIR", "")]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.datasets.data_dir, PathBuf::from("."));
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = from_vars(&[("STATION_BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "STATION_BIND_ADDR",
                ..
            }
        ));

        let err = from_vars(&[("RELAY_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("RELAY_TIMEOUT_SECS"));
    }
}
