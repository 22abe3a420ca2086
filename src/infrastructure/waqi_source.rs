// World Air Quality Index feed adapter (fallback source)
use crate::application::air_quality_sources::{FallbackAirQualitySource, FallbackSample};
use crate::domain::air_quality::PollutantReading;
use crate::domain::aqi::AQI_MAX;
use crate::infrastructure::config::{ProviderSettings, fill_template};
use crate::infrastructure::upstream_client::get_json;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct WaqiSource {
    client: reqwest::Client,
    settings: ProviderSettings,
}

/// `data` is an object on success and an error string otherwise.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct FeedData {
    /// Numeric, or `"-"` when the station has no current reading.
    aqi: serde_json::Value,
    #[serde(default)]
    iaqi: IndividualIndices,
}

#[derive(Debug, Deserialize, Default)]
struct IndividualIndices {
    pm25: Option<Measurement>,
    pm10: Option<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    v: f64,
}

impl WaqiSource {
    pub fn new(client: reqwest::Client, settings: ProviderSettings) -> Self {
        Self { client, settings }
    }

    fn build_url(&self, city: &str) -> String {
        let vars = HashMap::from([
            ("city", urlencoding::encode(city).into_owned()),
            ("key", urlencoding::encode(&self.settings.api_key).into_owned()),
        ]);
        fill_template(&self.settings.url_template, &vars)
    }
}

#[async_trait]
impl FallbackAirQualitySource for WaqiSource {
    async fn city_feed(&self, city: &str) -> Result<FallbackSample> {
        let response: FeedResponse =
            get_json(&self.client, "fallback air-quality source", &self.build_url(city)).await?;

        if response.status != "ok" {
            anyhow::bail!("fallback air-quality source reported status '{}'", response.status);
        }

        let data: FeedData = serde_json::from_value(response.data)
            .context("fallback air-quality source returned malformed data")?;

        let aqi = data
            .aqi
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .with_context(|| format!("fallback air-quality source has no AQI for {}", city))?;

        Ok(FallbackSample {
            aqi: (aqi.round() as u32).min(AQI_MAX),
            reading: PollutantReading::new(
                data.iaqi.pm25.map(|m| m.v),
                data.iaqi.pm10.map(|m| m.v),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_upstream::serve;
    use axum::{Router, extract::Path, routing::get};

    async fn source(body: &'static str) -> WaqiSource {
        let router = Router::new().route(
            "/feed/:city/",
            get(move |Path(city): Path<String>| async move {
                assert_eq!(city, "New Delhi");
                body
            }),
        );
        let base = serve(router).await;
        WaqiSource::new(
            reqwest::Client::new(),
            ProviderSettings {
                url_template: format!("{}/feed/${{city}}/?token=${{key}}", base),
                api_key: "secret".into(),
            },
        )
    }

    #[tokio::test]
    async fn test_trusts_native_aqi() {
        let body = r#"{"status":"ok","data":{"aqi":187,"iaqi":{"pm25":{"v":187},"pm10":{"v":96}}}}"#;
        let sample = source(body).await.city_feed("New Delhi").await.unwrap();

        assert_eq!(sample.aqi, 187);
        assert_eq!(sample.reading, PollutantReading { pm2_5: 187.0, pm10: 96.0 });
    }

    #[tokio::test]
    async fn test_missing_breakdown_defaults_to_zero() {
        let body = r#"{"status":"ok","data":{"aqi":64}}"#;
        let sample = source(body).await.city_feed("New Delhi").await.unwrap();

        assert_eq!(sample.aqi, 64);
        assert_eq!(sample.reading, PollutantReading::default());
    }

    #[tokio::test]
    async fn test_error_status_is_error() {
        let body = r#"{"status":"error","data":"Unknown station"}"#;
        assert!(source(body).await.city_feed("New Delhi").await.is_err());
    }

    #[tokio::test]
    async fn test_dash_aqi_is_error() {
        let body = r#"{"status":"ok","data":{"aqi":"-","iaqi":{}}}"#;
        assert!(source(body).await.city_feed("New Delhi").await.is_err());
    }

    #[tokio::test]
    async fn test_aqi_above_scale_is_clamped() {
        let body = r#"{"status":"ok","data":{"aqi":742.6}}"#;
        let sample = source(body).await.city_feed("New Delhi").await.unwrap();

        assert_eq!(sample.aqi, AQI_MAX);
    }
}
