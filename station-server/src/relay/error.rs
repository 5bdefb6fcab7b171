//! Relay error types.

/// Errors from the allow-listed URL relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// No url was supplied
    #[error("Missing url parameter")]
    MissingUrl,

    /// The url does not start with any allowed prefix
    #[error("URL not in allowlist")]
    NotAllowed { url: String },

    /// The upstream request failed (DNS, connect, timeout, body read)
    #[error("Failed to fetch remote URL")]
    Transport(#[source] reqwest::Error),

    /// The HTTP client could not be built
    #[error("failed to build relay client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors from the forecast relay.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// One of lat, lon or vars was missing or blank
    #[error("Missing required parameters: lat, lon, or vars")]
    MissingParams,

    /// The upstream request failed before a response arrived
    #[error("Proxy Connection Failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL is not a valid URL
    #[error("invalid forecast base URL {url:?}: {message}")]
    BaseUrl { url: String, message: String },

    /// The HTTP client could not be built
    #[error("failed to build forecast client: {0}")]
    Client(#[source] reqwest::Error),
}
