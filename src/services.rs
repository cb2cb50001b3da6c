//! Upstream collaborators, expressed as traits so the load pipeline can run
//! against real HTTP services or in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use image::RgbaImage;

use crate::error::UpstreamError;
use crate::model::{Alert, Conditions, Location};
use crate::tiles::{BoundingBox, TileCoord};

/// One past composite scan advertised by the manifest.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ManifestFrame {
    pub(crate) time: DateTime<Utc>,
    pub(crate) path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompositeManifest {
    pub(crate) host: String,
    pub(crate) past: Vec<ManifestFrame>,
}

#[async_trait]
pub(crate) trait Geocoder: Send + Sync {
    async fn geocode(&self, postal_code: &str) -> Result<Location, UpstreamError>;
}

/// Secondary data. Failures surface as `None`/empty, never as errors.
#[async_trait]
pub(crate) trait WeatherService: Send + Sync {
    async fn current_conditions(&self, lat: f64, lon: f64) -> Option<Conditions>;
    async fn active_alerts(&self, lat: f64, lon: f64) -> Vec<Alert>;
}

#[async_trait]
pub(crate) trait RadarImagery: Send + Sync {
    async fn composite_manifest(&self) -> Result<CompositeManifest, UpstreamError>;

    async fn composite_tile(
        &self,
        host: &str,
        frame: &ManifestFrame,
        tile: TileCoord,
    ) -> Result<RgbaImage, UpstreamError>;

    async fn station_image(
        &self,
        bbox: BoundingBox,
        time: DateTime<Utc>,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, UpstreamError>;
}

/// The full set of collaborators a load needs.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) geocoder: Arc<dyn Geocoder>,
    pub(crate) weather: Arc<dyn WeatherService>,
    pub(crate) radar: Arc<dyn RadarImagery>,
}
