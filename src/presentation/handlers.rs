// HTTP request handlers
use crate::domain::air_quality::{AqiRecord, HeatmapEntry};
use crate::domain::dashboard::{Report, Trend};
use crate::domain::error::ErrorKind;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

impl CityQuery {
    fn required_city(self) -> Result<String, ErrorKind> {
        self.city
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ErrorKind::InvalidRequest("City query parameter is required".into()))
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_aqi(
    Query(query): Query<CityQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AqiRecord>, ErrorKind> {
    let city = query.required_city()?;
    let record = state.aqi_service.get_aqi(&city).await?;
    Ok(Json(record))
}

pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.aqi_service.supported_cities())
}

pub async fn get_heatmap(State(state): State<Arc<AppState>>) -> Json<Vec<HeatmapEntry>> {
    Json(state.heatmap_service.snapshot().await)
}

pub async fn get_trend(
    Query(query): Query<CityQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Trend>, ErrorKind> {
    let city = query.required_city()?;
    Ok(Json(state.dashboard_service.get_trend(&city).await?))
}

pub async fn get_report(
    Query(query): Query<CityQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Report>, ErrorKind> {
    let city = query.required_city()?;
    Ok(Json(state.dashboard_service.get_report(&city).await?))
}
