use crate::model::Station;

#[rustfmt::skip]
pub(crate) const STATIONS: &[Station] = &[
    Station { id: "KOKX", name: "New York", latitude: 40.8653, longitude: -72.8639 },
    Station { id: "KLOT", name: "Chicago", latitude: 41.6045, longitude: -88.0847 },
    Station { id: "KAMX", name: "Miami", latitude: 25.6111, longitude: -80.4128 },
    Station { id: "KATX", name: "Seattle", latitude: 48.1945, longitude: -122.4958 },
    Station { id: "KFWS", name: "Dallas", latitude: 32.5731, longitude: -97.3031 },
    Station { id: "KLVX", name: "Louisville", latitude: 37.9753, longitude: -85.9439 },
    Station { id: "KTFX", name: "Great Falls", latitude: 47.4595, longitude: -111.3855 },
    Station { id: "KSGF", name: "Springfield", latitude: 37.2355, longitude: -93.4003 },
    Station { id: "KLAS", name: "Las Vegas", latitude: 36.0558, longitude: -115.1622 },
    Station { id: "KPHX", name: "Phoenix", latitude: 33.4301, longitude: -112.0128 },
];

/// Closest station by planar distance in degrees. First entry wins ties.
pub(crate) fn nearest_station(catalog: &[Station], lat: f64, lon: f64) -> Option<&Station> {
    let mut best: Option<(&Station, f64)> = None;
    for station in catalog {
        let d = (lat - station.latitude).powi(2) + (lon - station.longitude).powi(2);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((station, d)),
        }
    }
    best.map(|(s, _)| s)
}
