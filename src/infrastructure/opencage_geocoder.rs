// OpenCage geocoding adapter
use crate::application::air_quality_sources::Geocoder;
use crate::domain::air_quality::Coordinates;
use crate::infrastructure::config::{ProviderSettings, fill_template};
use crate::infrastructure::upstream_client::get_json;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct OpenCageGeocoder {
    client: reqwest::Client,
    settings: ProviderSettings,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

impl OpenCageGeocoder {
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
impl Geocoder for OpenCageGeocoder {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>> {
        let response: GeocodeResponse = get_json(&self.client, "geocoder", &self.build_url(city)).await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|r| Coordinates::new(r.geometry.lat, r.geometry.lng)))
    }
}
