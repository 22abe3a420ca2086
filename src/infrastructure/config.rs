use crate::domain::air_quality::Coordinates;
use crate::domain::city::{City, CityCatalog};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
    pub providers: ProvidersSettings,
    pub cities: Vec<CitySettings>,
    #[serde(default)]
    pub heatmap: HeatmapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProvidersSettings {
    pub geocoder: ProviderSettings,
    pub primary: ProviderSettings,
    pub fallback: ProviderSettings,
}

/// `url_template` uses `${name}` placeholders, see [`fill_template`].
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    pub url_template: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CitySettings {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HeatmapSettings {
    #[serde(default)]
    pub roster: Vec<String>,
}

impl AppConfig {
    pub fn city_catalog(&self) -> anyhow::Result<CityCatalog> {
        let cities = self
            .cities
            .iter()
            .map(|c| -> anyhow::Result<City> {
                let coordinates = match (c.latitude, c.longitude) {
                    (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
                    (None, None) => None,
                    _ => anyhow::bail!(
                        "city '{}' must set both latitude and longitude or neither",
                        c.name
                    ),
                };
                Ok(City::new(c.name.trim(), coordinates))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        CityCatalog::new(cities)
    }

    /// Canonical names of the heatmap cities. An empty roster means every
    /// supported city.
    pub fn heatmap_roster(&self, catalog: &CityCatalog) -> anyhow::Result<Vec<String>> {
        if self.heatmap.roster.is_empty() {
            return Ok(catalog.names());
        }

        self.heatmap
            .roster
            .iter()
            .map(|name| {
                catalog
                    .find(name)
                    .map(|c| c.name.clone())
                    .ok_or_else(|| anyhow::anyhow!("heatmap city '{}' is not in the city list", name))
            })
            .collect()
    }
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("http.timeout_secs", 5_i64)?
        .set_default("logging.level", "info")?)
}

/// Load `config/aggregator.toml`, overridden by `AQ_`-prefixed environment
/// variables (`AQ_PROVIDERS__PRIMARY__API_KEY`, `AQ_SERVER__PORT`, ...).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/aggregator"))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Values stay strings so credentials keep their exact spelling; numeric
/// fields are converted when deserialized.
fn environment() -> config::Environment {
    config::Environment::with_prefix("AQ")
        .prefix_separator("_")
        .separator("__")
}

/// Replace `${key}` placeholders in a URL template
pub fn fill_template(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
