// In-memory provider fakes shared by application and presentation tests
use crate::application::air_quality_sources::{
    FallbackAirQualitySource, FallbackSample, Geocoder, PrimaryAirQualitySource, PrimarySample,
};
use crate::application::aqi_service::AqiService;
use crate::domain::air_quality::{Coordinates, PollutantReading};
use crate::domain::city::{City, CityCatalog};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mumbai, New Delhi and Kolkata carry static coordinates. Pune is known to
/// the fake geocoder, Nowhere is not.
pub fn fixture_catalog() -> CityCatalog {
    CityCatalog::new(vec![
        City::new("Mumbai", Some(Coordinates::new(19.076, 72.8777))),
        City::new("New Delhi", Some(Coordinates::new(28.6139, 77.209))),
        City::new("Kolkata", Some(Coordinates::new(22.5726, 88.3639))),
        City::new("Pune", None),
        City::new("Nowhere", None),
    ])
    .expect("fixture catalog is valid")
}

pub enum GeocoderMode {
    Known(HashMap<String, Coordinates>),
    Failing,
}

pub struct FakeGeocoder {
    mode: GeocoderMode,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    fn new(mode: GeocoderMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, city: &str) -> anyhow::Result<Option<Coordinates>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            GeocoderMode::Known(places) => Ok(places.get(city).copied()),
            GeocoderMode::Failing => anyhow::bail!("geocoder timed out"),
        }
    }
}

pub struct FakePrimary {
    pm2_5: Option<f64>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakePrimary {
    fn new(pm2_5: Option<f64>) -> Self {
        Self {
            pm2_5,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrimaryAirQualitySource for FakePrimary {
    async fn current_pollution(&self, _coordinates: Coordinates) -> anyhow::Result<PrimarySample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let pm2_5 = self
            .pm2_5
            .ok_or_else(|| anyhow::anyhow!("primary returned 503"))?;
        Ok(PrimarySample {
            reading: PollutantReading::new(Some(pm2_5), Some(pm2_5 * 2.0)),
            native_index: Some(2),
        })
    }
}

pub struct FakeFallback {
    aqi: Option<u32>,
    calls: AtomicUsize,
    last_city: Mutex<Option<String>>,
}

impl FakeFallback {
    fn new(aqi: Option<u32>) -> Self {
        Self {
            aqi,
            calls: AtomicUsize::new(0),
            last_city: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_city(&self) -> Option<String> {
        self.last_city.lock().unwrap().clone()
    }
}

#[async_trait]
impl FallbackAirQualitySource for FakeFallback {
    async fn city_feed(&self, city: &str) -> anyhow::Result<FallbackSample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_city.lock().unwrap() = Some(city.to_string());
        let aqi = self
            .aqi
            .ok_or_else(|| anyhow::anyhow!("fallback status: error"))?;
        Ok(FallbackSample {
            aqi,
            reading: PollutantReading::new(Some(41.0), None),
        })
    }
}

pub struct Fakes {
    pub geocoder: Arc<FakeGeocoder>,
    pub primary: Arc<FakePrimary>,
    pub fallback: Arc<FakeFallback>,
    catalog: Arc<CityCatalog>,
}

impl Default for Fakes {
    fn default() -> Self {
        let places = HashMap::from([("Pune".to_string(), Coordinates::new(18.5204, 73.8567))]);
        Self {
            geocoder: Arc::new(FakeGeocoder::new(GeocoderMode::Known(places))),
            primary: Arc::new(FakePrimary::new(Some(20.0))),
            fallback: Arc::new(FakeFallback::new(Some(150))),
            catalog: Arc::new(fixture_catalog()),
        }
    }
}

impl Fakes {
    pub fn with_primary_pm25(mut self, pm2_5: f64) -> Self {
        self.primary = Arc::new(FakePrimary::new(Some(pm2_5)));
        self
    }

    pub fn slow_primary(mut self, delay: Duration) -> Self {
        self.primary = Arc::new(FakePrimary {
            delay,
            ..FakePrimary::new(Some(20.0))
        });
        self
    }

    pub fn failing_primary(mut self) -> Self {
        self.primary = Arc::new(FakePrimary::new(None));
        self
    }

    pub fn with_fallback_aqi(mut self, aqi: u32) -> Self {
        self.fallback = Arc::new(FakeFallback::new(Some(aqi)));
        self
    }

    pub fn failing_fallback(mut self) -> Self {
        self.fallback = Arc::new(FakeFallback::new(None));
        self
    }

    pub fn geocoder_without_results(mut self) -> Self {
        self.geocoder = Arc::new(FakeGeocoder::new(GeocoderMode::Known(HashMap::new())));
        self
    }

    pub fn failing_geocoder(mut self) -> Self {
        self.geocoder = Arc::new(FakeGeocoder::new(GeocoderMode::Failing));
        self
    }

    pub fn service(&self) -> AqiService {
        AqiService::new(
            self.catalog.clone(),
            self.geocoder.clone(),
            self.primary.clone(),
            self.fallback.clone(),
        )
    }
}
