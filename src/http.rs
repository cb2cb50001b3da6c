//! reqwest-backed implementations of the upstream service traits.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use image::RgbaImage;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::Timeouts;
use crate::error::UpstreamError;
use crate::model::{Alert, Conditions, Location};
use crate::services::{CompositeManifest, Geocoder, ManifestFrame, RadarImagery, WeatherService};
use crate::tiles::{wms_time, BoundingBox, TileCoord};
use crate::weather::{AlertsResp, ObservationResp, PointResp, StationsResp};

const USER_AGENT: &str = concat!("radarloop/", env!("CARGO_PKG_VERSION"));
const RAINVIEWER_MAPS: &str = "https://api.rainviewer.com/public/weather-maps.json";
const ZIPPOPOTAM: &str = "https://api.zippopotam.us/us";
const GEOCODIO: &str = "https://api.geocod.io/v1.7/geocode";
const NWS_API: &str = "https://api.weather.gov";
const IEM_WMS: &str = "https://mesonet.agron.iastate.edu/cgi-bin/wms/nexrad/n0r.cgi";

/// Tile size and palette options for RainViewer composite tiles.
const TILE_SIZE: u32 = 512;
const TILE_COLOR_SCHEME: u32 = 6;
const TILE_OPTIONS: &str = "1_1";

pub(crate) struct HttpServices {
    client: reqwest::Client,
    timeouts: Timeouts,
}

impl HttpServices {
    pub(crate) fn new(timeouts: Timeouts) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, timeouts })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<T, UpstreamError> {
        let resp = self.client.get(url).timeout(timeout).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn get_image(&self, url: &str, timeout: Duration) -> Result<RgbaImage, UpstreamError> {
        let resp = self.client.get(url).timeout(timeout).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let bytes = resp.bytes().await?;
        Ok(image::load_from_memory(&bytes)?.to_rgba8())
    }

    async fn geocode_zippopotam(&self, zip: &str) -> Result<Location, UpstreamError> {
        let url = format!("{ZIPPOPOTAM}/{zip}");
        let zr: ZipResp = self.get_json(&url, self.timeouts.geocode).await?;
        zr.into_location(zip)
    }

    async fn geocode_geocodio(&self, zip: &str) -> Result<Location, UpstreamError> {
        let url = format!("{GEOCODIO}?q={zip}&api_key=demo");
        let resp: GeocodioResp = self.get_json(&url, self.timeouts.geocode).await?;
        resp.into_location(zip)
    }

    async fn conditions(&self, lat: f64, lon: f64) -> Result<Conditions, UpstreamError> {
        let t = self.timeouts.weather;
        let point: PointResp = self
            .get_json(&format!("{NWS_API}/points/{lat:.4},{lon:.4}"), t)
            .await?;
        let stations: StationsResp = self
            .get_json(&point.properties.observation_stations, t)
            .await?;
        let station = stations
            .features
            .first()
            .map(|f| f.properties.station_identifier.clone())
            .ok_or_else(|| UpstreamError::Empty("observation stations".to_string()))?;
        let obs: ObservationResp = self
            .get_json(
                &format!("{NWS_API}/stations/{station}/observations/latest"),
                t,
            )
            .await?;
        Ok(obs.into_conditions())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZipResp {
    places: Vec<ZipPlace>,
}

#[derive(Debug, Deserialize)]
struct ZipPlace {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
    latitude: String,
    longitude: String,
}

impl ZipResp {
    pub(crate) fn into_location(self, zip: &str) -> Result<Location, UpstreamError> {
        let p = self
            .places
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Empty(format!("ZIP {zip}")))?;
        let latitude = p
            .latitude
            .trim()
            .parse()
            .map_err(|_| UpstreamError::Malformed(format!("invalid latitude for ZIP {zip}")))?;
        let longitude = p
            .longitude
            .trim()
            .parse()
            .map_err(|_| UpstreamError::Malformed(format!("invalid longitude for ZIP {zip}")))?;
        Ok(Location {
            latitude,
            longitude,
            city: p.place_name,
            region: p.state_abbreviation,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodioResp {
    #[serde(default)]
    results: Vec<GeocodioResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodioResult {
    address_components: GeocodioAddress,
    location: GeocodioPoint,
}

#[derive(Debug, Deserialize)]
struct GeocodioAddress {
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct GeocodioPoint {
    lat: f64,
    lng: f64,
}

impl GeocodioResp {
    pub(crate) fn into_location(self, zip: &str) -> Result<Location, UpstreamError> {
        let r = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Empty(format!("ZIP {zip}")))?;
        Ok(Location {
            latitude: r.location.lat,
            longitude: r.location.lng,
            city: r.address_components.city,
            region: r.address_components.state,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RainViewerMaps {
    host: String,
    radar: Option<RainViewerRadar>,
}

#[derive(Debug, Deserialize)]
struct RainViewerRadar {
    past: Option<Vec<RainViewerFrame>>,
}

#[derive(Debug, Deserialize)]
struct RainViewerFrame {
    time: i64,
    path: String,
}

impl RainViewerMaps {
    pub(crate) fn into_manifest(self) -> CompositeManifest {
        let past = self
            .radar
            .and_then(|r| r.past)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|f| {
                let time: DateTime<Utc> = Utc.timestamp_opt(f.time, 0).single()?;
                Some(ManifestFrame { time, path: f.path })
            })
            .collect();
        CompositeManifest {
            host: self.host,
            past,
        }
    }
}

#[async_trait]
impl Geocoder for HttpServices {
    async fn geocode(&self, postal_code: &str) -> Result<Location, UpstreamError> {
        match self.geocode_zippopotam(postal_code).await {
            Ok(loc) => Ok(loc),
            // Bad coordinates from the primary are final; only reachability falls back.
            Err(e @ UpstreamError::Malformed(_)) => Err(e),
            Err(e) => {
                info!(zip = postal_code, error = %e, "primary geocoder failed, trying fallback");
                self.geocode_geocodio(postal_code).await
            }
        }
    }
}

#[async_trait]
impl WeatherService for HttpServices {
    async fn current_conditions(&self, lat: f64, lon: f64) -> Option<Conditions> {
        match self.conditions(lat, lon).await {
            Ok(c) => {
                debug!(temp = ?c.temperature_f, text = %c.description, "current conditions");
                Some(c)
            }
            Err(e) => {
                warn!(error = %e, "current conditions unavailable");
                None
            }
        }
    }

    async fn active_alerts(&self, lat: f64, lon: f64) -> Vec<Alert> {
        let url = format!("{NWS_API}/alerts/active?point={lat:.4},{lon:.4}");
        match self.get_json::<AlertsResp>(&url, self.timeouts.weather).await {
            Ok(resp) => resp.into_alerts(),
            Err(e) => {
                warn!(error = %e, "weather alerts unavailable");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl RadarImagery for HttpServices {
    async fn composite_manifest(&self) -> Result<CompositeManifest, UpstreamError> {
        let maps: RainViewerMaps = self
            .get_json(RAINVIEWER_MAPS, self.timeouts.composite)
            .await?;
        Ok(maps.into_manifest())
    }

    async fn composite_tile(
        &self,
        host: &str,
        frame: &ManifestFrame,
        tile: TileCoord,
    ) -> Result<RgbaImage, UpstreamError> {
        let url = format!(
            "{host}{}/{TILE_SIZE}/{}/{}/{}/{TILE_COLOR_SCHEME}/{TILE_OPTIONS}.png",
            frame.path, tile.z, tile.x, tile.y
        );
        self.get_image(&url, self.timeouts.composite).await
    }

    async fn station_image(
        &self,
        bbox: BoundingBox,
        time: DateTime<Utc>,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, UpstreamError> {
        let url = format!(
            "{IEM_WMS}?SERVICE=WMS&VERSION=1.1.1&REQUEST=GetMap&FORMAT=image/png&TRANSPARENT=true\
&LAYERS=nexrad-n0r&WIDTH={width}&HEIGHT={height}&SRS=EPSG:4326&BBOX={}&TIME={}",
            bbox.to_wms(),
            wms_time(time)
        );
        self.get_image(&url, self.timeouts.station).await
    }
}
