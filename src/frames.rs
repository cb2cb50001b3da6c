//! Frame Source: assembles an oldest-first loop of intensity grids.
//!
//! Providers are tried one after another. The composite tile service goes
//! first; the single-station WMS is consulted only when the composite yields
//! nothing. Individual fetch or decode failures are skipped, so the only
//! reportable outcome is an empty result from both.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::convert::image_to_grid;
use crate::error::FrameSourceError;
use crate::model::{Frame, IntensityGrid, Station};
use crate::services::RadarImagery;
use crate::tiles::{lat_lon_to_tile, station_timestamps, BoundingBox};

pub(crate) const COMPOSITE_PRODUCT: &str = "Composite";
pub(crate) const STATION_PRODUCT: &str = "N0R";
pub(crate) const SYNTHETIC_PRODUCT: &str = "Simulated";

/// Station WMS images are requested at this multiple of the grid size.
const STATION_OVERSAMPLE: u32 = 4;

/// Collects successful frames until `max` is reached.
pub(crate) struct FrameAccumulator {
    frames: Vec<Frame>,
    max: usize,
}

impl FrameAccumulator {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            frames: Vec::with_capacity(max),
            max,
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.frames.len() >= self.max
    }

    /// Adds a frame unless already full. Returns whether it was kept.
    pub(crate) fn offer(&mut self, frame: Frame) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(frame);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// Runs both providers in order. Never returns an empty `Ok`.
pub(crate) async fn fetch_frames(
    radar: &dyn RadarImagery,
    station: &Station,
    lat: f64,
    lon: f64,
    cfg: &Config,
    now: DateTime<Utc>,
) -> Result<Vec<Frame>, FrameSourceError> {
    let frames = fetch_composite(radar, lat, lon, cfg).await;
    if !frames.is_empty() {
        info!(count = frames.len(), "radar frames from composite tiles");
        return Ok(frames);
    }

    let frames = fetch_station(radar, station, lat, lon, cfg, now).await;
    if !frames.is_empty() {
        info!(count = frames.len(), station = station.id, "radar frames from station WMS");
        return Ok(frames);
    }

    Err(FrameSourceError::NoRadarData)
}

pub(crate) async fn fetch_composite(
    radar: &dyn RadarImagery,
    lat: f64,
    lon: f64,
    cfg: &Config,
) -> Vec<Frame> {
    let mut manifest = match radar.composite_manifest().await {
        Ok(m) => m,
        Err(e) => {
            debug!(error = %e, "composite manifest unavailable");
            return Vec::new();
        }
    };
    manifest.past.sort_by_key(|f| f.time);

    let tile = lat_lon_to_tile(lat, lon, cfg.composite_zoom);
    let mut acc = FrameAccumulator::new(cfg.max_frames);
    for entry in &manifest.past {
        if acc.is_full() {
            break;
        }
        match radar.composite_tile(&manifest.host, entry, tile).await {
            Ok(img) => {
                acc.offer(Frame {
                    grid: image_to_grid(&img, cfg.grid_width, cfg.grid_height),
                    timestamp: entry.time,
                    product: COMPOSITE_PRODUCT.to_string(),
                });
            }
            Err(e) => debug!(path = %entry.path, error = %e, "skipping composite frame"),
        }
    }
    acc.into_frames()
}

pub(crate) async fn fetch_station(
    radar: &dyn RadarImagery,
    station: &Station,
    lat: f64,
    lon: f64,
    cfg: &Config,
    now: DateTime<Utc>,
) -> Vec<Frame> {
    let bbox = BoundingBox::around(lat, lon);
    let width = cfg.grid_width as u32 * STATION_OVERSAMPLE;
    let height = cfg.grid_height as u32 * STATION_OVERSAMPLE;

    let mut acc = FrameAccumulator::new(cfg.max_frames);
    for time in station_timestamps(now, cfg.station_lookback) {
        if acc.is_full() {
            break;
        }
        match radar.station_image(bbox, time, width, height).await {
            Ok(img) => {
                acc.offer(Frame {
                    grid: image_to_grid(&img, cfg.grid_width, cfg.grid_height),
                    timestamp: time,
                    product: STATION_PRODUCT.to_string(),
                });
            }
            Err(e) => debug!(station = station.id, %time, error = %e, "skipping station scan"),
        }
    }
    debug!(station = station.id, collected = acc.len(), "station scan pass done");

    // Collected newest-first.
    let mut frames = acc.into_frames();
    frames.reverse();
    frames
}

/// Drifting storm cells so the UI has something to animate without live data.
pub(crate) fn synthetic_frames(cfg: &Config, now: DateTime<Utc>) -> Vec<Frame> {
    let (w, h) = (cfg.grid_width, cfg.grid_height);
    (0..cfg.max_frames)
        .map(|i| {
            let mut grid = IntensityGrid::new(w, h);
            for c in 0..(2 + i % 3) {
                let cx = 10 + (i * 3 + c * 15) % w.max(1);
                let cy = 5 + (i * 2 + c * 10) % h.max(1);
                paint_cell(&mut grid, cx as i64, cy as i64, 5 + 2 * c as i32);
            }
            Frame {
                grid,
                timestamp: now + Duration::minutes(10 * i as i64),
                product: SYNTHETIC_PRODUCT.to_string(),
            }
        })
        .collect()
}

fn paint_cell(grid: &mut IntensityGrid, cx: i64, cy: i64, peak: i32) {
    for dy in -5i64..=5 {
        for dx in -5i64..=5 {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 {
                continue;
            }
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            if dist < 5.0 {
                grid.set(x as usize, y as usize, peak - dist as i32);
            }
        }
    }
}
