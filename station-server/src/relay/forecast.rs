//! Forecast relay for Open-Meteo style APIs.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, error};

use super::error::ForecastError;

/// Default forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const USER_AGENT: &str = "StationForecastRelay/1.0";

/// Configuration for the forecast client.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Forecast endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ForecastConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Upstream status and body, untouched.
#[derive(Debug, Clone)]
pub struct ForecastResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Client that forwards hourly forecast requests.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ForecastClient {
    /// Create a new forecast client.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ForecastError::BaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(ForecastError::Client)?;

        Ok(Self { http, base_url })
    }

    /// Upstream URL for an hourly forecast of `vars` at `lat`/`lon`.
    ///
    /// Wind speeds are requested in knots, one day ahead.
    pub fn forecast_url(&self, lat: &str, lon: &str, vars: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", lat)
            .append_pair("longitude", lon)
            .append_pair("hourly", vars)
            .append_pair("wind_speed_unit", "kn")
            .append_pair("forecast_days", "1");
        url
    }

    /// Fetch a forecast, passing upstream status and body through.
    pub async fn fetch(
        &self,
        lat: &str,
        lon: &str,
        vars: &str,
    ) -> Result<ForecastResponse, ForecastError> {
        let (lat, lon, vars) = (lat.trim(), lon.trim(), vars.trim());
        if lat.is_empty() || lon.is_empty() || vars.is_empty() {
            return Err(ForecastError::MissingParams);
        }

        let url = self.forecast_url(lat, lon, vars);
        debug!(url = %url, "Fetching forecast");

        let transport = |source: reqwest::Error| {
            error!(url = %url, error = %source, "Forecast request failed");
            ForecastError::Transport {
                url: url.to_string(),
                source,
            }
        };

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;

        Ok(ForecastResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.base_url, DEFAULT_FORECAST_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn builds_forecast_url() {
        let client = ForecastClient::new(ForecastConfig::default()).unwrap();
        let url = client.forecast_url("40.6398", "-73.7789", "wind_speed_10m,wind_direction_10m");

        assert_eq!(
            url.as_str(),
            "https://api.open-meteo.com/v1/forecast?latitude=40.6398&longitude=-73.7789\
             &hourly=wind_speed_10m%2Cwind_direction_10m&wind_speed_unit=kn&forecast_days=1"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        let client = ForecastClient::new(ForecastConfig::default()).unwrap();
        let url = client.forecast_url("1&forecast_days=16", "2", "x");

        let days: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "forecast_days")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(days, vec!["1".to_string()]);
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = ForecastConfig::default().with_base_url("not a url");
        assert!(matches!(
            ForecastClient::new(config),
            Err(ForecastError::BaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn missing_params() {
        let client = ForecastClient::new(ForecastConfig::default()).unwrap();
        assert!(matches!(
            client.fetch("", "-73.7", "temperature_2m").await,
            Err(ForecastError::MissingParams)
        ));
        assert!(matches!(
            client.fetch("40.6", " ", "temperature_2m").await,
            Err(ForecastError::MissingParams)
        ));
        assert!(matches!(
            client.fetch("40.6", "-73.7", "").await,
            Err(ForecastError::MissingParams)
        ));
    }
}
