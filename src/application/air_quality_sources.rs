// Provider traits for the external geocoding and air-quality services
use crate::domain::air_quality::{Coordinates, PollutantReading};
use async_trait::async_trait;

/// What the primary provider reports for a location. Its native index is on
/// a 1-5 scale and only kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimarySample {
    pub reading: PollutantReading,
    pub native_index: Option<u32>,
}

/// What the fallback provider reports for a city. Its AQI is trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackSample {
    pub aqi: u32,
    pub reading: PollutantReading,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a place name; `Ok(None)` when the provider has no match.
    async fn geocode(&self, city: &str) -> anyhow::Result<Option<Coordinates>>;
}

#[async_trait]
pub trait PrimaryAirQualitySource: Send + Sync {
    async fn current_pollution(&self, coordinates: Coordinates) -> anyhow::Result<PrimarySample>;
}

#[async_trait]
pub trait FallbackAirQualitySource: Send + Sync {
    async fn city_feed(&self, city: &str) -> anyhow::Result<FallbackSample>;
}
