//! In-memory service doubles for pipeline tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use image::{Rgba, RgbaImage};

use crate::error::UpstreamError;
use crate::model::{Alert, Conditions, Location};
use crate::services::{CompositeManifest, Geocoder, ManifestFrame, RadarImagery, WeatherService};
use crate::tiles::{BoundingBox, TileCoord};

fn not_found(what: &str) -> UpstreamError {
    UpstreamError::Status {
        url: format!("fake://{what}"),
        status: 404,
    }
}

/// Solid image whose every pixel classifies as heavy rain.
pub(crate) fn rain_image() -> RgbaImage {
    RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]))
}

#[derive(Default)]
pub(crate) struct FakeGeocoder {
    pub(crate) known: HashMap<String, Location>,
}

impl FakeGeocoder {
    pub(crate) fn with(zip: &str, lat: f64, lon: f64, city: &str, region: &str) -> Self {
        let mut known = HashMap::new();
        known.insert(
            zip.to_string(),
            Location {
                latitude: lat,
                longitude: lon,
                city: city.to_string(),
                region: region.to_string(),
            },
        );
        Self { known }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, postal_code: &str) -> Result<Location, UpstreamError> {
        self.known
            .get(postal_code)
            .cloned()
            .ok_or_else(|| UpstreamError::Empty(format!("ZIP {postal_code}")))
    }
}

#[derive(Default)]
pub(crate) struct FakeWeather {
    pub(crate) conditions: Option<Conditions>,
    pub(crate) alerts: Vec<Alert>,
}

#[async_trait]
impl WeatherService for FakeWeather {
    async fn current_conditions(&self, _lat: f64, _lon: f64) -> Option<Conditions> {
        self.conditions.clone()
    }

    async fn active_alerts(&self, _lat: f64, _lon: f64) -> Vec<Alert> {
        self.alerts.clone()
    }
}

/// Radar provider that serves canned images by manifest path and scan time.
#[derive(Default)]
pub(crate) struct FakeRadar {
    pub(crate) manifest: Option<CompositeManifest>,
    pub(crate) tiles: HashMap<String, RgbaImage>,
    pub(crate) scans: HashMap<DateTime<Utc>, RgbaImage>,
    pub(crate) tile_calls: AtomicUsize,
    pub(crate) scan_calls: AtomicUsize,
}

impl FakeRadar {
    pub(crate) fn with_tiles(frames: &[(DateTime<Utc>, &str, bool)]) -> Self {
        let mut tiles = HashMap::new();
        let past = frames
            .iter()
            .map(|(time, path, ok)| {
                if *ok {
                    tiles.insert(path.to_string(), rain_image());
                }
                ManifestFrame {
                    time: *time,
                    path: path.to_string(),
                }
            })
            .collect();
        Self {
            manifest: Some(CompositeManifest {
                host: "fake://tiles".to_string(),
                past,
            }),
            tiles,
            ..Self::default()
        }
    }

    pub(crate) fn with_scans(times: &[DateTime<Utc>]) -> Self {
        Self {
            scans: times.iter().map(|t| (*t, rain_image())).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn tile_calls(&self) -> usize {
        self.tile_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RadarImagery for FakeRadar {
    async fn composite_manifest(&self) -> Result<CompositeManifest, UpstreamError> {
        self.manifest.clone().ok_or_else(|| not_found("manifest"))
    }

    async fn composite_tile(
        &self,
        _host: &str,
        frame: &ManifestFrame,
        _tile: TileCoord,
    ) -> Result<RgbaImage, UpstreamError> {
        self.tile_calls.fetch_add(1, Ordering::SeqCst);
        self.tiles
            .get(&frame.path)
            .cloned()
            .ok_or_else(|| not_found(&frame.path))
    }

    async fn station_image(
        &self,
        _bbox: BoundingBox,
        time: DateTime<Utc>,
        _width: u32,
        _height: u32,
    ) -> Result<RgbaImage, UpstreamError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        self.scans
            .get(&time)
            .cloned()
            .ok_or_else(|| not_found("scan"))
    }
}
