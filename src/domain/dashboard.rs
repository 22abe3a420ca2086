// Dashboard domain models: synthesized trend and report summary
use super::air_quality::AqiRecord;
use super::aqi::AQI_MAX;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Relative shape of the seven-day trend, oldest day first. The last factor
/// is 1.0 so the series always ends at the current reading.
const TREND_PROFILE: [f64; 7] = [0.78, 0.87, 0.96, 1.07, 1.12, 1.05, 1.00];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub day: String,
    pub aqi: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub city: String,
    pub points: Vec<TrendPoint>,
}

/// Seven points for the days ending on `today`, scaled from a single AQI.
pub fn synthesize_trend(aqi: u32, today: NaiveDate) -> Vec<TrendPoint> {
    let last = TREND_PROFILE.len() as u64 - 1;
    TREND_PROFILE
        .iter()
        .enumerate()
        .map(|(i, factor)| {
            let date = today
                .checked_sub_days(Days::new(last - i as u64))
                .unwrap_or(today);
            let value = (aqi as f64 * factor).round() as u32;
            TrendPoint {
                day: date.weekday().to_string(),
                aqi: value.min(AQI_MAX),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub severity: Severity,
    pub category: &'static str,
    #[serde(rename = "pollutionStatus")]
    pub pollution_status: &'static str,
    #[serde(rename = "precautionLevel")]
    pub precaution_level: &'static str,
    #[serde(rename = "healthImpact")]
    pub health_impact: &'static str,
}

impl ReportSummary {
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            301.. => Self {
                severity: Severity::Severe,
                category: "Hazardous",
                pollution_status: "High",
                precaution_level: "Severe",
                health_impact: "Health warning of emergency conditions. The entire population is more likely to be affected.",
            },
            201..=300 => Self {
                severity: Severity::High,
                category: "Very Unhealthy",
                pollution_status: "High",
                precaution_level: "High",
                health_impact: "High risk of respiratory diseases. Increased aggravation of heart or lung disease and premature mortality in persons with cardiopulmonary disease and the elderly.",
            },
            101..=200 => Self {
                severity: Severity::Moderate,
                category: "Unhealthy for Sensitive Groups",
                pollution_status: "Moderate",
                precaution_level: "Moderate",
                health_impact: "Members of sensitive groups may experience health effects. The general public is not likely to be affected.",
            },
            _ => Self {
                severity: Severity::Low,
                category: "Good",
                pollution_status: "Low",
                precaution_level: "Low",
                health_impact: "Air quality is satisfactory.",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub record: AqiRecord,
    pub summary: ReportSummary,
}

impl Report {
    pub fn new(record: AqiRecord) -> Self {
        let summary = ReportSummary::from_aqi(record.aqi);
        Self { record, summary }
    }
}
