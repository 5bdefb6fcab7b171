use station_server::config::ServerConfig;
use station_server::relay::{ForecastClient, RelayClient};
use station_server::resolve::StationResolver;
use station_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_server=info")),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(2);
    });

    // Datasets load lazily; a failed preload is retried on first request
    let resolver = StationResolver::new(&config.datasets);
    info!(dir = %config.datasets.data_dir.display(), "Loading reference datasets");
    if let Err(e) = resolver.preload().await {
        warn!(error = %e, "Reference datasets not loaded");
    }

    let relay = RelayClient::new(config.relay).expect("Failed to create relay client");
    let forecast = ForecastClient::new(config.forecast).expect("Failed to create forecast client");

    let state = AppState::new(resolver, relay, forecast);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Station server listening on http://{addr}");
    info!("  GET /health                         - Health check");
    info!("  GET /station_lookup?icao=           - Resolve an airport");
    info!("  GET /proxy?url=                     - Relay an allow-listed feed");
    info!("  GET /weather_proxy?lat=&lon=&vars=  - Relay an hourly forecast");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
