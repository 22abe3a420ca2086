// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod opencage_geocoder;
pub mod openweather_source;
pub mod upstream_client;
pub mod waqi_source;

#[cfg(test)]
pub mod test_upstream;
