// Heatmap service - Independent AQI lookups for a fixed roster of cities
use crate::application::aqi_service::AqiService;
use crate::domain::air_quality::HeatmapEntry;
use futures::future::join_all;

#[derive(Clone)]
pub struct HeatmapService {
    aqi_service: AqiService,
    roster: Vec<String>,
}

impl HeatmapService {
    pub fn new(aqi_service: AqiService, roster: Vec<String>) -> Self {
        Self {
            aqi_service,
            roster,
        }
    }

    /// Run every roster city through the full pipeline concurrently. A city
    /// that fails keeps its slot with null measurements; entries come back in
    /// roster order.
    pub async fn snapshot(&self) -> Vec<HeatmapEntry> {
        let lookups = self.roster.iter().map(|city| async move {
            match self.aqi_service.get_aqi(city).await {
                Ok(record) => HeatmapEntry::from(record),
                Err(e) => {
                    tracing::warn!("Heatmap lookup for {} failed: {}", city, e);
                    HeatmapEntry::unavailable(city.clone())
                }
            }
        });

        join_all(lookups).await
    }
}
