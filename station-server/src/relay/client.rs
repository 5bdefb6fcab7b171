//! Allow-listed outbound HTTP relay.
//!
//! Lets the browser dashboard read aviation weather feeds that don't send
//! CORS headers. Only URLs under a fixed set of prefixes are fetched, and
//! every fetch bypasses upstream caches.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::redirect::Policy;
use tracing::{debug, error, warn};

use super::error::RelayError;

/// Prefixes allowed by default.
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] = &[
    "https://aviationweather.gov/api/data/metar",
    "https://aviationweather.gov/api/data/taf",
    "https://tgftp.nws.noaa.gov/data/observations/metar/",
];

/// Content type reported when upstream sends none.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; StationRelay/1.0)";

const MAX_REDIRECTS: usize = 10;

/// Configuration for the relay client.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// URL prefixes that may be fetched
    pub allowed_prefixes: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Create a config allowing exactly `prefixes`.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_prefixes: prefixes.into_iter().map(Into::into).collect(),
            timeout_secs: 12,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_PREFIXES.iter().copied())
    }
}

/// An upstream response, passed back verbatim.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Client for the allow-listed relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    allowed_prefixes: Vec<String>,
}

impl RelayClient {
    /// Create a new relay client.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        // Redirects are only followed while they stay inside the allowlist;
        // any other hop is handed back to the caller as-is
        let prefixes = config.allowed_prefixes.clone();
        let redirects = Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error("too many redirects")
            } else if is_listed(&prefixes, attempt.url().as_str()) {
                attempt.follow()
            } else {
                warn!(url = %attempt.url(), "Not following redirect outside allowlist");
                attempt.stop()
            }
        });

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirects)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            http,
            allowed_prefixes: config.allowed_prefixes,
        })
    }

    /// Whether `url` starts with one of the allowed prefixes.
    pub fn is_allowed(&self, url: &str) -> bool {
        is_listed(&self.allowed_prefixes, url)
    }

    /// Fetch `url` if it is allowed.
    ///
    /// Disallowed URLs are rejected without touching the network. Upstream
    /// status codes, including errors, are returned as a normal response.
    pub async fn fetch(&self, url: &str) -> Result<RelayResponse, RelayError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RelayError::MissingUrl);
        }

        if !self.is_allowed(url) {
            warn!(url, "Rejected relay request outside allowlist");
            return Err(RelayError::NotAllowed {
                url: url.to_string(),
            });
        }

        let target = cache_busted(url, Utc::now().timestamp());
        debug!(url = %target, "Relaying request");

        let response = self
            .http
            .get(&target)
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                error!(url = %target, error = %e, "Relay request failed");
                RelayError::Transport(e)
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let body = response.bytes().await.map_err(|e| {
            error!(url = %target, error = %e, "Relay body read failed");
            RelayError::Transport(e)
        })?;

        Ok(RelayResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

fn is_listed(prefixes: &[String], url: &str) -> bool {
    prefixes.iter().any(|prefix| url.starts_with(prefix.as_str()))
}

/// Append a `_nocache` query parameter so upstream CDNs can't serve a stale copy.
pub fn cache_busted(url: &str, unix_secs: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}_nocache={unix_secs}")
}
