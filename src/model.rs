use chrono::{DateTime, Utc};

/// Highest quantized reflectivity level.
pub(crate) const MAX_INTENSITY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GeoPoint {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl GeoPoint {
    pub(crate) fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A geocoded postal code.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Location {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) city: String,
    pub(crate) region: String,
}

impl Location {
    pub(crate) fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub(crate) fn label(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Station {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// Fixed-size grid of precipitation levels in `0..=10`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IntensityGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl IntensityGrid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    #[cfg(test)]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.cells[y * self.width + x]
    }

    /// Stores `level` clamped to `0..=10`. Out-of-range coordinates are ignored.
    pub(crate) fn set(&mut self, x: usize, y: usize, level: i32) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = level.clamp(0, MAX_INTENSITY as i32) as u8;
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    pub(crate) fn max_level(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub(crate) grid: IntensityGrid,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) product: String,
}

/// Ordered NWS severity vocabulary; derives `Ord` from declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) enum Severity {
    #[default]
    Unknown,
    Minor,
    Moderate,
    Severe,
    Extreme,
}

impl Severity {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw {
            "Extreme" => Severity::Extreme,
            "Severe" => Severity::Severe,
            "Moderate" => Severity::Moderate,
            "Minor" => Severity::Minor,
            _ => Severity::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Alert {
    pub(crate) event: String,
    pub(crate) severity: Severity,
    pub(crate) urgency: String,
    pub(crate) headline: String,
    pub(crate) description: String,
    pub(crate) expires: Option<DateTime<Utc>>,
}

/// Latest surface observation, already normalized to Fahrenheit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Conditions {
    pub(crate) temperature_f: Option<i32>,
    pub(crate) description: String,
}

/// Everything one successful load produces. Replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub(crate) struct RadarSession {
    pub(crate) frames: Vec<Frame>,
    pub(crate) location: String,
    pub(crate) center: Option<GeoPoint>,
    pub(crate) station: String,
    pub(crate) last_updated: DateTime<Utc>,
    pub(crate) is_real_data: bool,
    pub(crate) temperature: Option<i32>,
    pub(crate) conditions: Option<String>,
    pub(crate) alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_zero() {
        let grid = IntensityGrid::new(6, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 6 && row.iter().all(|&v| v == 0)));
        assert_eq!(grid.max_level(), 0);
    }

    #[test]
    fn set_clamps_and_ignores_outside_cells() {
        let mut grid = IntensityGrid::new(4, 4);
        grid.set(0, 0, 42);
        grid.set(1, 0, -3);
        grid.set(9, 9, 5);
        assert_eq!(grid.get(0, 0), 10);
        assert_eq!(grid.get(1, 0), 0);
        assert_eq!(grid.get(9, 9), 0);
    }

    #[test]
    fn severity_orders_extreme_highest() {
        assert!(Severity::Extreme > Severity::Severe);
        assert!(Severity::Severe > Severity::Moderate);
        assert!(Severity::Moderate > Severity::Minor);
        assert!(Severity::Minor > Severity::Unknown);
        assert_eq!(Severity::parse("Severe"), Severity::Severe);
        assert_eq!(Severity::parse("bogus"), Severity::Unknown);
    }

    #[test]
    fn location_label_joins_city_and_region() {
        let loc = Location {
            latitude: 40.75,
            longitude: -73.99,
            city: "New York".to_string(),
            region: "NY".to_string(),
        };
        assert_eq!(loc.label(), "New York, NY");
        assert_eq!(loc.point(), GeoPoint::new(40.75, -73.99));
    }
}
