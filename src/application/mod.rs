// Application layer - Use cases over the provider traits
pub mod air_quality_sources;
pub mod aqi_service;
pub mod dashboard_service;
pub mod heatmap_service;

#[cfg(test)]
pub mod test_support;
