// Error taxonomy for the aggregation pipeline
use thiserror::Error;

/// Every failure the aggregator reports. Provider-specific errors are logged
/// where they happen and collapsed into one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("'{city}' is not a supported city; pick one from /api/cities")]
    UnsupportedLocation { city: String },

    #[error("location '{city}' not found")]
    LocationNotFound { city: String },

    /// Primary provider failed. Triggers the fallback source and never
    /// reaches the client.
    #[error("primary air-quality source unavailable")]
    SourceUnavailable,

    #[error("unable to fetch AQI data")]
    AllSourcesUnavailable,
}

impl ErrorKind {
    pub fn unsupported(city: impl Into<String>) -> Self {
        Self::UnsupportedLocation { city: city.into() }
    }

    pub fn not_found(city: impl Into<String>) -> Self {
        Self::LocationNotFound { city: city.into() }
    }
}
