// Supported-city catalog: allow-list and static coordinate table in one place
use super::air_quality::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    /// Precomputed coordinates. Cities without them go through the geocoder.
    pub coordinates: Option<Coordinates>,
}

impl City {
    pub fn new(name: impl Into<String>, coordinates: Option<Coordinates>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    /// Build a catalog, rejecting blank names, case-insensitive duplicates and
    /// out-of-range coordinates.
    pub fn new(cities: Vec<City>) -> anyhow::Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for city in &cities {
            let key = Self::normalize(&city.name);
            if key.is_empty() {
                anyhow::bail!("city names must not be blank");
            }
            if !seen.insert(key) {
                anyhow::bail!("city '{}' is listed more than once", city.name);
            }
            if let Some(c) = city.coordinates {
                if !(-90.0..=90.0).contains(&c.latitude) || !(-180.0..=180.0).contains(&c.longitude) {
                    anyhow::bail!(
                        "coordinates for '{}' are out of range: ({}, {})",
                        city.name,
                        c.latitude,
                        c.longitude
                    );
                }
            }
        }

        Ok(Self { cities })
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn find(&self, query: &str) -> Option<&City> {
        let key = Self::normalize(query);
        if key.is_empty() {
            return None;
        }
        self.cities.iter().find(|c| Self::normalize(&c.name) == key)
    }

    /// Names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.cities.iter().map(|c| c.name.clone()).collect()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
