// OpenWeather air-pollution adapter (primary source)
use crate::application::air_quality_sources::{PrimaryAirQualitySource, PrimarySample};
use crate::domain::air_quality::{Coordinates, PollutantReading};
use crate::infrastructure::config::{ProviderSettings, fill_template};
use crate::infrastructure::upstream_client::get_json;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    client: reqwest::Client,
    settings: ProviderSettings,
}

#[derive(Debug, Deserialize)]
struct PollutionResponse {
    #[serde(default)]
    list: Vec<PollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct PollutionEntry {
    main: PollutionIndex,
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Deserialize)]
struct PollutionIndex {
    aqi: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct Components {
    pm2_5: Option<f64>,
    pm10: Option<f64>,
}

impl OpenWeatherSource {
    pub fn new(client: reqwest::Client, settings: ProviderSettings) -> Self {
        Self { client, settings }
    }

    fn build_url(&self, coordinates: Coordinates) -> String {
        let vars = HashMap::from([
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("key", urlencoding::encode(&self.settings.api_key).into_owned()),
        ]);
        fill_template(&self.settings.url_template, &vars)
    }
}

#[async_trait]
impl PrimaryAirQualitySource for OpenWeatherSource {
    async fn current_pollution(&self, coordinates: Coordinates) -> Result<PrimarySample> {
        let response: PollutionResponse =
            get_json(&self.client, "primary air-quality source", &self.build_url(coordinates)).await?;

        let entry = response
            .list
            .into_iter()
            .next()
            .context("primary air-quality source returned no data")?;

        Ok(PrimarySample {
            reading: PollutantReading::new(entry.components.pm2_5, entry.components.pm10),
            native_index: entry.main.aqi,
        })
    }
}
