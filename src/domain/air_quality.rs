// Air-quality domain models
use super::risk::{RiskClassification, RiskLevel};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Particulate concentrations in µg/m³. Fields missing upstream are 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PollutantReading {
    pub pm2_5: f64,
    pub pm10: f64,
}

impl PollutantReading {
    pub fn new(pm2_5: Option<f64>, pm10: Option<f64>) -> Self {
        Self {
            pm2_5: pm2_5.unwrap_or(0.0),
            pm10: pm10.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSource {
    Primary,
    Fallback,
}

/// A reading paired with the AQI it was scored at and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcedReading {
    pub reading: PollutantReading,
    pub aqi: u32,
    pub source: ReadingSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiRecord {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: u32,
    pub pm2_5: f64,
    pub pm10: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "riskMessage")]
    pub risk_message: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub source: ReadingSource,
}

impl AqiRecord {
    /// Assemble a record, stamping it with `at` in `DD/MM/YYYY HH:MM`.
    pub fn build<Tz>(
        city: &str,
        coordinates: Coordinates,
        sourced: SourcedReading,
        risk: RiskClassification,
        at: DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            city: city.to_string(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            aqi: sourced.aqi,
            pm2_5: sourced.reading.pm2_5,
            pm10: sourced.reading.pm10,
            risk_level: risk.level,
            risk_message: risk.message.to_string(),
            last_updated: at.format(TIMESTAMP_FORMAT).to_string(),
            source: sourced.source,
        }
    }
}

/// One city on the heatmap. Cities whose lookup failed keep their slot with
/// every measurement set to `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapEntry {
    pub city: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub aqi: Option<u32>,
}

impl HeatmapEntry {
    pub fn unavailable(city: String) -> Self {
        Self {
            city,
            lat: None,
            lon: None,
            aqi: None,
        }
    }
}

impl From<AqiRecord> for HeatmapEntry {
    fn from(record: AqiRecord) -> Self {
        Self {
            city: record.city,
            lat: Some(record.latitude),
            lon: Some(record.longitude),
            aqi: Some(record.aqi),
        }
    }
}
