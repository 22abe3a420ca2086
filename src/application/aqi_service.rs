// AQI service - Resolve a city, fetch with fallback, classify and assemble
use crate::application::air_quality_sources::{
    FallbackAirQualitySource, Geocoder, PrimaryAirQualitySource,
};
use crate::domain::air_quality::{AqiRecord, Coordinates, ReadingSource, SourcedReading};
use crate::domain::aqi::pm25_to_aqi;
use crate::domain::city::CityCatalog;
use crate::domain::error::ErrorKind;
use crate::domain::risk::classify_risk;
use std::sync::Arc;

/// A city that passed the allow-list, with its canonical spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCity {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Clone)]
pub struct AqiService {
    catalog: Arc<CityCatalog>,
    geocoder: Arc<dyn Geocoder>,
    primary: Arc<dyn PrimaryAirQualitySource>,
    fallback: Arc<dyn FallbackAirQualitySource>,
}

impl AqiService {
    pub fn new(
        catalog: Arc<CityCatalog>,
        geocoder: Arc<dyn Geocoder>,
        primary: Arc<dyn PrimaryAirQualitySource>,
        fallback: Arc<dyn FallbackAirQualitySource>,
    ) -> Self {
        Self {
            catalog,
            geocoder,
            primary,
            fallback,
        }
    }

    pub fn supported_cities(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Validate `city` against the allow-list and find its coordinates, using
    /// the static table before falling back to the geocoder.
    pub async fn resolve(&self, city: &str) -> Result<ResolvedCity, ErrorKind> {
        let entry = self
            .catalog
            .find(city)
            .ok_or_else(|| ErrorKind::unsupported(city.trim()))?;

        if let Some(coordinates) = entry.coordinates {
            tracing::debug!("Using static coordinates for {}", entry.name);
            return Ok(ResolvedCity {
                name: entry.name.clone(),
                coordinates,
            });
        }

        match self.geocoder.geocode(&entry.name).await {
            Ok(Some(coordinates)) => {
                tracing::debug!(
                    "Geocoded {} to ({:.4}, {:.4})",
                    entry.name,
                    coordinates.latitude,
                    coordinates.longitude
                );
                Ok(ResolvedCity {
                    name: entry.name.clone(),
                    coordinates,
                })
            }
            Ok(None) => {
                tracing::warn!("Geocoder returned no results for {}", entry.name);
                Err(ErrorKind::not_found(&entry.name))
            }
            Err(e) => {
                tracing::warn!("Geocoding {} failed: {:#}", entry.name, e);
                Err(ErrorKind::not_found(&entry.name))
            }
        }
    }

    /// Query the primary source and score its PM2.5 on the EPA scale.
    pub async fn fetch_primary(&self, coordinates: Coordinates) -> Result<SourcedReading, ErrorKind> {
        let sample = self
            .primary
            .current_pollution(coordinates)
            .await
            .map_err(|e| {
                tracing::warn!("Primary air-quality source failed: {:#}", e);
                ErrorKind::SourceUnavailable
            })?;

        let aqi = pm25_to_aqi(sample.reading.pm2_5);
        tracing::debug!(
            "Primary reading pm2_5={} pm10={} native_index={:?} -> aqi {}",
            sample.reading.pm2_5,
            sample.reading.pm10,
            sample.native_index,
            aqi
        );

        Ok(SourcedReading {
            reading: sample.reading,
            aqi,
            source: ReadingSource::Primary,
        })
    }

    pub async fn fetch_fallback(&self, city: &str) -> Result<SourcedReading, ErrorKind> {
        let sample = self.fallback.city_feed(city).await.map_err(|e| {
            tracing::warn!("Fallback air-quality source failed for {}: {:#}", city, e);
            ErrorKind::AllSourcesUnavailable
        })?;

        Ok(SourcedReading {
            reading: sample.reading,
            aqi: sample.aqi,
            source: ReadingSource::Fallback,
        })
    }

    pub async fn get_aqi(&self, city: &str) -> Result<AqiRecord, ErrorKind> {
        let resolved = self.resolve(city).await?;

        let sourced = match self.fetch_primary(resolved.coordinates).await {
            Ok(sourced) => sourced,
            Err(ErrorKind::SourceUnavailable) => {
                tracing::info!("Falling back to secondary source for {}", resolved.name);
                self.fetch_fallback(&resolved.name).await?
            }
            Err(other) => return Err(other),
        };

        let risk = classify_risk(sourced.aqi);
        Ok(AqiRecord::build(
            &resolved.name,
            resolved.coordinates,
            sourced,
            risk,
            chrono::Local::now(),
        ))
    }
}
