// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::aqi_service::AqiService;
use crate::application::dashboard_service::DashboardService;
use crate::application::heatmap_service::HeatmapService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::opencage_geocoder::OpenCageGeocoder;
use crate::infrastructure::openweather_source::OpenWeatherSource;
use crate::infrastructure::upstream_client::build_http_client;
use crate::infrastructure::waqi_source::WaqiSource;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = Arc::new(config.city_catalog()?);
    let roster = config.heatmap_roster(&catalog)?;

    // Create provider adapters (infrastructure layer)
    let client = build_http_client(Duration::from_secs(config.http.timeout_secs))?;
    let geocoder = Arc::new(OpenCageGeocoder::new(client.clone(), config.providers.geocoder.clone()));
    let primary = Arc::new(OpenWeatherSource::new(client.clone(), config.providers.primary.clone()));
    let fallback = Arc::new(WaqiSource::new(client, config.providers.fallback.clone()));

    // Create services (application layer)
    let aqi_service = AqiService::new(catalog.clone(), geocoder, primary, fallback);
    let heatmap_service = HeatmapService::new(aqi_service.clone(), roster);
    let dashboard_service = DashboardService::new(aqi_service.clone());

    let state = Arc::new(AppState {
        aqi_service,
        heatmap_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(
        "Starting air-quality aggregator on {} ({} supported cities)",
        addr,
        catalog.names().len()
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
