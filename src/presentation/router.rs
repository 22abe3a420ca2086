// Route table and middleware stack
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_aqi, get_heatmap, get_report, get_trend, health_check, list_cities,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/aqi", get(get_aqi))
        .route("/api/cities", get(list_cities))
        .route("/api/heatmap", get(get_heatmap))
        .route("/api/trend", get(get_trend))
        .route("/api/report", get(get_report))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
