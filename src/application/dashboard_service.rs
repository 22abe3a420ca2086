// Dashboard service - Trend and report views derived from a single AQI snapshot
use crate::application::aqi_service::AqiService;
use crate::domain::dashboard::{Report, Trend, synthesize_trend};
use crate::domain::error::ErrorKind;

#[derive(Clone)]
pub struct DashboardService {
    aqi_service: AqiService,
}

impl DashboardService {
    pub fn new(aqi_service: AqiService) -> Self {
        Self { aqi_service }
    }

    pub async fn get_trend(&self, city: &str) -> Result<Trend, ErrorKind> {
        let record = self.aqi_service.get_aqi(city).await?;
        let today = chrono::Local::now().date_naive();

        Ok(Trend {
            points: synthesize_trend(record.aqi, today),
            city: record.city,
        })
    }

    pub async fn get_report(&self, city: &str) -> Result<Report, ErrorKind> {
        let record = self.aqi_service.get_aqi(city).await?;
        Ok(Report::new(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fakes;
    use crate::domain::dashboard::Severity;

    #[tokio::test]
    async fn test_trend_ends_at_current_aqi() {
        let fakes = Fakes::default().with_primary_pm25(55.4);
        let trend = DashboardService::new(fakes.service())
            .get_trend("kolkata")
            .await
            .unwrap();

        assert_eq!(trend.city, "Kolkata");
        assert_eq!(trend.points.len(), 7);
        assert_eq!(trend.points.last().unwrap().aqi, 150);
    }

    #[tokio::test]
    async fn test_report_uses_fallback_reading() {
        let fakes = Fakes::default().failing_primary().with_fallback_aqi(320);
        let report = DashboardService::new(fakes.service())
            .get_report("New Delhi")
            .await
            .unwrap();

        assert_eq!(report.record.aqi, 320);
        assert_eq!(report.summary.severity, Severity::Severe);
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let fakes = Fakes::default();
        let result = DashboardService::new(fakes.service()).get_trend("Atlantis").await;
        assert!(matches!(result, Err(ErrorKind::UnsupportedLocation { .. })));
    }
}
