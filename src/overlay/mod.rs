//! Static basemap drawn under the radar: state borders and labels, rivers,
//! mountain ranges, coastlines, lakes and distance rings around the centre.

pub(crate) mod canvas;
mod geo;

use crate::model::GeoPoint;

pub(crate) use canvas::{Canvas, Mark, Paint};

/// Horizontal and vertical extent of the map in miles.
const MAP_WIDTH_MILES: f64 = 250.0;
const MAP_HEIGHT_MILES: f64 = 150.0;
const MILES_PER_DEGREE: f64 = 69.0;

pub(crate) const CENTER_GLYPH: char = '★';
pub(crate) const RING_GLYPH: char = '·';

/// Local equirectangular projection onto grid cells, north up.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Projection {
    center: GeoPoint,
    center_x: i32,
    center_y: i32,
    miles_per_col: f64,
    miles_per_row: f64,
    miles_per_deg_lon: f64,
}

impl Projection {
    pub(crate) fn new(center: GeoPoint, width: usize, height: usize) -> Self {
        Self {
            center,
            center_x: (width / 2) as i32,
            center_y: (height / 2) as i32,
            miles_per_col: MAP_WIDTH_MILES / width.max(1) as f64,
            miles_per_row: MAP_HEIGHT_MILES / height.max(1) as f64,
            miles_per_deg_lon: MILES_PER_DEGREE * center.lat.to_radians().cos(),
        }
    }

    /// Grid cell for a coordinate; may fall outside the grid.
    pub(crate) fn project(&self, lat: f64, lon: f64) -> (i32, i32) {
        let north = (lat - self.center.lat) * MILES_PER_DEGREE;
        let east = (lon - self.center.lon) * self.miles_per_deg_lon;
        (
            self.center_x + (east / self.miles_per_col) as i32,
            self.center_y - (north / self.miles_per_row) as i32,
        )
    }
}

/// Draws the full overlay for a map centred on `center`. Without a centre
/// only the centre marker is drawn.
pub(crate) fn render(center: Option<GeoPoint>, width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

    if let Some(center) = center {
        let proj = Projection::new(center, width, height);
        draw_borders(&mut canvas, &proj);
        draw_labels(&mut canvas, &proj);
        draw_rivers(&mut canvas, &proj);
        draw_mountains(&mut canvas, &proj);
        draw_coasts(&mut canvas, &proj, center);
        draw_lakes(&mut canvas, &proj, center);
        draw_rings(&mut canvas, cx, cy);
    }

    canvas.set_cell(cx, cy, CENTER_GLYPH, Mark::Center, Paint::Always);
    canvas
}

fn draw_borders(canvas: &mut Canvas, proj: &Projection) {
    for &(lat1, lon1, lat2, lon2) in geo::STATE_BORDERS {
        let (x1, y1) = proj.project(lat1, lon1);
        let (x2, y2) = proj.project(lat2, lon2);
        let glyph = if (x1 - x2).abs() < (y1 - y2).abs() { '│' } else { '─' };
        canvas.draw_line(x1, y1, x2, y2, glyph, Mark::Border, Paint::SkipExisting);
    }
}

fn draw_labels(canvas: &mut Canvas, proj: &Projection) {
    for &(lat, lon, abbr) in geo::STATE_LABELS {
        let (x, y) = proj.project(lat, lon);
        canvas.draw_label(x, y, abbr, Mark::Label);
    }
}

fn draw_polyline(canvas: &mut Canvas, proj: &Projection, path: geo::Path, glyph: char, mark: Mark) {
    for pair in path.windows(2) {
        let (x1, y1) = proj.project(pair[0].0, pair[0].1);
        let (x2, y2) = proj.project(pair[1].0, pair[1].1);
        canvas.draw_line(x1, y1, x2, y2, glyph, mark, Paint::OverBase);
    }
}

fn draw_rivers(canvas: &mut Canvas, proj: &Projection) {
    for &river in geo::RIVERS {
        draw_polyline(canvas, proj, river, '~', Mark::River);
    }
}

/// Ranges are plotted at their vertices, three cells wide.
fn draw_mountains(canvas: &mut Canvas, proj: &Projection) {
    for range in geo::MOUNTAINS {
        for &(lat, lon) in range.iter() {
            let (x, y) = proj.project(lat, lon);
            for dx in -1..=1 {
                canvas.set_cell(x + dx, y, '^', Mark::Mountain, Paint::OverBase);
            }
        }
    }
}

fn draw_coasts(canvas: &mut Canvas, proj: &Projection, center: GeoPoint) {
    for coast in geo::COASTS {
        if (coast.visible)(center.lat, center.lon) {
            draw_polyline(canvas, proj, coast.path, '≈', Mark::Coast);
        }
    }
}

fn draw_lakes(canvas: &mut Canvas, proj: &Projection, center: GeoPoint) {
    if !geo::in_great_lakes_region(center.lat, center.lon) {
        return;
    }
    if geo::shows_lake_superior(center.lat) {
        for &(lat, lon) in geo::LAKE_SUPERIOR {
            let (x, y) = proj.project(lat, lon);
            canvas.set_cell(x, y, '≈', Mark::Lake, Paint::OverBase);
        }
    }
    if geo::shows_lake_michigan(center.lon) {
        for (lat, lon) in geo::lake_michigan_points(center.lat, center.lon) {
            let (x, y) = proj.project(lat, lon);
            canvas.set_cell(x, y, '≈', Mark::Lake, Paint::OverBase);
        }
    }
}

/// Roughly 50 and 100 mile rings. The outer ring is squashed vertically to
/// compensate for tall terminal cells.
fn draw_rings(canvas: &mut Canvas, cx: i32, cy: i32) {
    for (radius, step, squash) in [(12.0, 10, 1.0), (22.0, 15, 0.5)] {
        for deg in (0..360).step_by(step) {
            let a = (deg as f64).to_radians();
            let x = cx + (radius * a.cos()) as i32;
            let y = cy + (radius * a.sin() * squash) as i32;
            canvas.set_cell(x, y, RING_GLYPH, Mark::Ring, Paint::SkipExisting);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: GeoPoint = GeoPoint { lat: 40.75, lon: -73.99 };
    const DENVER: GeoPoint = GeoPoint { lat: 39.74, lon: -104.99 };
    /// Open Pacific, far from every table entry.
    const OCEAN: GeoPoint = GeoPoint { lat: 0.0, lon: -150.0 };

    fn glyphs(canvas: &Canvas) -> String {
        canvas.rows().flat_map(|r| r.iter().map(|c| c.glyph)).collect()
    }

    #[test]
    fn projection_is_anchored_at_grid_centre() {
        let proj = Projection::new(GeoPoint::new(0.0, 0.0), 60, 30);
        assert_eq!(proj.project(0.0, 0.0), (30, 15));
        // 69 miles north at 5 miles per row.
        assert_eq!(proj.project(1.0, 0.0), (30, 2));
        // 69 miles east at 250/60 miles per column.
        assert_eq!(proj.project(0.0, 1.0), (46, 15));
        assert_eq!(proj.project(0.0, -1.0), (14, 15));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render(Some(NYC), 60, 30), render(Some(NYC), 60, 30));
    }

    #[test]
    fn centre_marker_always_wins() {
        for center in [NYC, DENVER, OCEAN] {
            let c = render(Some(center), 60, 30);
            assert_eq!(c.get(30, 15).glyph, CENTER_GLYPH);
        }
    }

    #[test]
    fn without_a_centre_only_the_marker_is_drawn() {
        let c = render(None, 60, 30);
        let drawn: Vec<_> = c.rows().flatten().filter(|cell| !cell.is_blank()).collect();
        assert_eq!(drawn.len(), 1);
        assert_eq!(c.get(30, 15).mark, Mark::Center);
    }

    #[test]
    fn open_ocean_shows_only_rings_and_marker() {
        let c = render(Some(OCEAN), 60, 30);
        assert!(c
            .rows()
            .flatten()
            .all(|cell| matches!(cell.mark, Mark::Blank | Mark::Ring | Mark::Center)));
        assert_eq!(c.get(42, 15).mark, Mark::Ring);
        assert_eq!(c.get(30, 27).mark, Mark::Ring);
        assert_eq!(c.get(52, 15).mark, Mark::Ring);
    }

    #[test]
    fn coasts_follow_their_region_gates() {
        assert!(glyphs(&render(Some(NYC), 60, 30)).contains('≈'));
        assert!(!glyphs(&render(Some(DENVER), 60, 30)).contains('≈'));
    }

    fn count(canvas: &Canvas, mark: Mark) -> usize {
        canvas.rows().flatten().filter(|cell| cell.mark == mark).count()
    }

    #[test]
    fn pacific_coast_is_drawn_only_out_west() {
        let los_angeles = GeoPoint::new(34.05, -118.24);
        assert!(count(&render(Some(los_angeles), 60, 30), Mark::Coast) > 0);

        let phoenix = GeoPoint::new(33.45, -112.07);
        assert_eq!(count(&render(Some(phoenix), 60, 30), Mark::Coast), 0);
    }

    #[test]
    fn duluth_gets_lake_superior() {
        let duluth = GeoPoint::new(46.78, -92.10);
        assert!(count(&render(Some(duluth), 60, 30), Mark::Lake) > 0);

        // South of the Superior gate and west of the Michigan one.
        let madison = GeoPoint::new(43.07, -89.40);
        assert_eq!(count(&render(Some(madison), 60, 30), Mark::Lake), 0);
    }

    #[test]
    fn denver_sits_among_the_rockies() {
        let c = render(Some(DENVER), 60, 30);
        assert!(glyphs(&c).contains('^'));
        // The range vertex west of town covers the state label.
        let (x, y) = Projection::new(DENVER, 60, 30).project(39.0, -105.5);
        assert_eq!(c.get(x, y).mark, Mark::Mountain);
    }

    #[test]
    fn chicago_gets_lake_michigan() {
        let chicago = GeoPoint::new(41.88, -87.63);
        let c = render(Some(chicago), 60, 30);
        let proj = Projection::new(chicago, 60, 30);
        let (x, y) = proj.project(chicago.lat + 1.0, chicago.lon + 1.5);
        assert_eq!(c.get(x, y).glyph, '≈');
    }

    #[test]
    fn small_grids_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (3, 2)] {
            let c = render(Some(NYC), w, h);
            assert_eq!(c.width(), w);
            assert_eq!(c.height(), h);
        }
    }
}
