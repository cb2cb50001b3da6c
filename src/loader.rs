use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::LoadError;
use crate::frames::{fetch_frames, synthetic_frames};
use crate::model::RadarSession;
use crate::services::Services;
use crate::stations::{nearest_station, STATIONS};

/// Geocode, pick a station, then gather weather and radar for one session.
///
/// Only geocoding and station selection can fail. Missing weather just leaves
/// those fields empty; missing radar falls back to synthetic frames.
pub(crate) async fn load_session(
    zip: &str,
    services: &Services,
    cfg: &Config,
) -> Result<RadarSession, LoadError> {
    let location = services
        .geocoder
        .geocode(zip)
        .await
        .map_err(LoadError::Geocode)?;
    info!(zip, location = %location.label(), "geocoded");

    let station = nearest_station(STATIONS, location.latitude, location.longitude)
        .ok_or_else(|| LoadError::Station("no radar stations configured".to_string()))?;
    info!(station = station.id, name = station.name, "nearest radar station");

    let (lat, lon) = (location.latitude, location.longitude);
    let (conditions, alerts) = tokio::join!(
        services.weather.current_conditions(lat, lon),
        services.weather.active_alerts(lat, lon),
    );

    let now = Utc::now();
    let (frames, is_real_data) =
        match fetch_frames(services.radar.as_ref(), station, lat, lon, cfg, now).await {
            Ok(frames) => (frames, true),
            Err(e) => {
                warn!(error = %e, "using simulated radar");
                (synthetic_frames(cfg, now), false)
            }
        };

    let (temperature, conditions) = match conditions {
        Some(c) => (c.temperature_f, Some(c.description)),
        None => (None, None),
    };

    Ok(RadarSession {
        frames,
        location: location.label(),
        center: Some(location.point()),
        station: station.id.to_string(),
        last_updated: now,
        is_real_data,
        temperature,
        conditions,
        alerts,
    })
}
