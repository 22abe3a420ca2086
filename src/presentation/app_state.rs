// Application state for HTTP handlers
use crate::application::aqi_service::AqiService;
use crate::application::dashboard_service::DashboardService;
use crate::application::heatmap_service::HeatmapService;

#[derive(Clone)]
pub struct AppState {
    pub aqi_service: AqiService,
    pub heatmap_service: HeatmapService,
    pub dashboard_service: DashboardService,
}
