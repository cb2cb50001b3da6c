use chrono::{DateTime, Duration, DurationRound, Utc};

/// A slippy-map tile address (z/x/y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TileCoord {
    pub(crate) z: u8,
    pub(crate) x: u32,
    pub(crate) y: u32,
}

/// Geographic box in EPSG:4326 axis order used by WMS 1.1.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundingBox {
    pub(crate) min_lon: f64,
    pub(crate) min_lat: f64,
    pub(crate) max_lon: f64,
    pub(crate) max_lat: f64,
}

impl BoundingBox {
    /// 5° wide, 4° tall box centred on the point.
    pub(crate) fn around(lat: f64, lon: f64) -> Self {
        Self {
            min_lon: lon - 2.5,
            min_lat: lat - 2.0,
            max_lon: lon + 2.5,
            max_lat: lat + 2.0,
        }
    }

    pub(crate) fn to_wms(self) -> String {
        format!(
            "{:.6},{:.6},{:.6},{:.6}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

pub(crate) fn lat_lon_to_tile(lat: f64, lon: f64, zoom: u8) -> TileCoord {
    let lat = lat.clamp(-85.0511, 85.0511);
    let n = 2.0_f64.powi(zoom as i32);
    let x = ((lon + 180.0) / 360.0 * n).floor() as i64;
    let lat_rad = lat.to_radians();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n)
        .floor() as i64;
    let n = n as i64;
    TileCoord {
        z: zoom,
        x: wrap_tile_x(x, n) as u32,
        y: y.clamp(0, n - 1) as u32,
    }
}

fn wrap_tile_x(tx: i64, n: i64) -> i64 {
    ((tx % n) + n) % n
}

/// `count` scan times walking back from `now` in 5 minute steps, newest first,
/// each rounded down to a multiple of 5 minutes.
pub(crate) fn station_timestamps(now: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let step = Duration::minutes(5);
    (0..count)
        .filter_map(|i| {
            let t = now - step * i as i32;
            t.duration_trunc(step).ok()
        })
        .collect()
}

/// Compact UTC stamp (`YYYYMMDDHHMM`) used by the WMS TIME parameter.
pub(crate) fn wms_time(t: DateTime<Utc>) -> String {
    t.format("%Y%m%d%H%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_york_tile_at_zoom_seven() {
        let tile = lat_lon_to_tile(40.75, -73.99, 7);
        assert_eq!(tile, TileCoord { z: 7, x: 37, y: 48 });
    }

    #[test]
    fn origin_tile_at_zoom_one() {
        assert_eq!(lat_lon_to_tile(10.0, 10.0, 1), TileCoord { z: 1, x: 1, y: 0 });
        assert_eq!(lat_lon_to_tile(-10.0, -10.0, 1), TileCoord { z: 1, x: 0, y: 1 });
    }

    #[test]
    fn longitude_wraps_and_latitude_is_clamped() {
        let east = lat_lon_to_tile(0.0, 180.0, 3);
        assert_eq!(east.x, 0);
        let pole = lat_lon_to_tile(89.9, 0.0, 3);
        assert_eq!(pole.y, 0);
    }

    #[test]
    fn timestamps_align_to_five_minutes_newest_first() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 37, 42).unwrap();
        let stamps = station_timestamps(now, 4);
        let want: Vec<_> = [35, 30, 25, 20]
            .iter()
            .map(|m| Utc.with_ymd_and_hms(2024, 6, 1, 12, *m, 0).unwrap())
            .collect();
        assert_eq!(stamps, want);
        assert_eq!(wms_time(stamps[0]), "202406011235");
    }

    #[test]
    fn timestamps_cross_the_hour() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 4, 0).unwrap();
        let stamps = station_timestamps(now, 2);
        assert_eq!(stamps[0], Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(stamps[1], Utc.with_ymd_and_hms(2024, 5, 31, 23, 55, 0).unwrap());
    }

    #[test]
    fn bbox_spans_five_by_four_degrees() {
        let bbox = BoundingBox::around(40.0, -100.0);
        assert_eq!(bbox.to_wms(), "-102.500000,38.000000,-97.500000,42.000000");
    }
}
