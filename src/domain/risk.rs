// Respiratory risk classification
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub message: &'static str,
}

/// Bucket an AQI into a risk level.
///
/// Low is `< 100` while Medium is `<= 200`; the asymmetric edges are intended.
pub fn classify_risk(aqi: u32) -> RiskClassification {
    if aqi < 100 {
        RiskClassification {
            level: RiskLevel::Low,
            message: "Air quality is satisfactory; little to no risk.",
        }
    } else if aqi <= 200 {
        RiskClassification {
            level: RiskLevel::Medium,
            message: "Sensitive individuals may experience minor issues.",
        }
    } else {
        RiskClassification {
            level: RiskLevel::High,
            message: "Everyone may begin to experience health effects.",
        }
    }
}
