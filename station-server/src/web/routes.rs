//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error};

use crate::relay::{ForecastError, RelayError};
use crate::resolve::ResolveError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/station_lookup", get(station_lookup))
        .route("/proxy", get(relay_url))
        .route("/weather_proxy", get(relay_forecast))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve an airport identifier into a station record.
async fn station_lookup(
    State(state): State<AppState>,
    Query(req): Query<StationLookupRequest>,
) -> Result<Json<StationResponse>, AppError> {
    let icao = req.icao.unwrap_or_default();

    let airport = state.resolver.resolve(&icao).await.inspect_err(|e| {
        if let ResolveError::DatasetUnavailable(source) = e {
            error!(error = %source, "Reference dataset unavailable");
        }
    })?;

    Ok(Json(StationResponse::from_airport(&airport)))
}

/// Fetch an allow-listed URL on behalf of the browser.
async fn relay_url(State(state): State<AppState>, Query(req): Query<ProxyRequest>) -> Response {
    let url = req.url.unwrap_or_default();

    let response = match state.relay.fetch(&url).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, upstream.content_type)],
                upstream.body,
            )
                .into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    };

    no_store(response)
}

/// Forward a forecast request, passing the upstream answer through.
async fn relay_forecast(
    State(state): State<AppState>,
    Query(req): Query<WeatherProxyRequest>,
) -> Response {
    let lat = req.lat.unwrap_or_default();
    let lon = req.lon.unwrap_or_default();
    let vars = req.vars.unwrap_or_default();

    match state.forecast.fetch(&lat, &lon, &vars).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                upstream.body,
            )
                .into_response()
        }
        Err(ForecastError::Transport { url, source }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ForecastFailureResponse {
                error: "Proxy Connection Failed".to_string(),
                details: source.to_string(),
                url_attempted: url,
            }),
        )
            .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Mark a response as uncacheable at every layer.
fn no_store(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    response
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Forbidden { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        let message = e.to_string();
        match e {
            ResolveError::ParamMissing => AppError::BadRequest { message },
            ResolveError::NotFound => AppError::NotFound { message },
            ResolveError::DatasetUnavailable(_) => AppError::Internal { message },
        }
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        let message = e.to_string();
        match e {
            RelayError::MissingUrl => AppError::BadRequest { message },
            RelayError::NotAllowed { .. } => AppError::Forbidden { message },
            RelayError::Transport(_) => AppError::BadGateway { message },
            RelayError::Client(_) => AppError::Internal { message },
        }
    }
}

impl From<ForecastError> for AppError {
    fn from(e: ForecastError) -> Self {
        let message = e.to_string();
        match e {
            ForecastError::MissingParams => AppError::BadRequest { message },
            _ => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Not-found and bad input are expected outcomes, not failures
        if status.is_server_error() {
            error!(%status, message, "Request failed");
        } else {
            debug!(%status, message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
