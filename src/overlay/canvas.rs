/// What kind of feature put a glyph in a cell. Drives both overwrite rules
/// and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Blank,
    Border,
    Label,
    River,
    Mountain,
    Coast,
    Lake,
    Ring,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) glyph: char,
    pub(crate) mark: Mark,
}

impl Cell {
    pub(crate) const BLANK: Cell = Cell {
        glyph: ' ',
        mark: Mark::Blank,
    };

    #[cfg(test)]
    pub(crate) fn is_blank(&self) -> bool {
        self.mark == Mark::Blank
    }
}

/// Overwrite policy for a drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paint {
    /// Only fill blank cells.
    SkipExisting,
    /// Replace blanks, borders, labels and rings, but never another feature.
    OverBase,
    /// Replace anything.
    Always,
}

impl Paint {
    fn allows(self, existing: Mark) -> bool {
        match self {
            Paint::SkipExisting => existing == Mark::Blank,
            Paint::OverBase => matches!(
                existing,
                Mark::Blank | Mark::Border | Mark::Label | Mark::Ring
            ),
            Paint::Always => true,
        }
    }
}

/// Mutable glyph grid with signed coordinates; anything outside is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell at `(x, y)`, blank when outside.
    pub(crate) fn get(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::BLANK;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Returns whether the cell was written.
    pub(crate) fn set_cell(&mut self, x: i32, y: i32, glyph: char, mark: Mark, paint: Paint) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = y as usize * self.width + x as usize;
        if !paint.allows(self.cells[idx].mark) {
            return false;
        }
        self.cells[idx] = Cell { glyph, mark };
        true
    }

    /// Bresenham from `(x1, y1)` to `(x2, y2)` inclusive. Points off the
    /// canvas are skipped; segments entirely to one side are rejected early.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        glyph: char,
        mark: Mark,
        paint: Paint,
    ) {
        let (w, h) = (self.width as i32, self.height as i32);
        if (x1 < 0 && x2 < 0) || (y1 < 0 && y2 < 0) || (x1 >= w && x2 >= w) || (y1 >= h && y2 >= h) {
            return;
        }

        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.set_cell(x, y, glyph, mark, paint);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Writes `text` left to right starting at `(x, y)`, or nothing at all
    /// if any character would fall off the canvas.
    pub(crate) fn draw_label(&mut self, x: i32, y: i32, text: &str, mark: Mark) -> bool {
        let len = text.chars().count() as i32;
        if !self.in_bounds(x, y) || !self.in_bounds(x + len - 1, y) {
            return false;
        }
        for (i, ch) in text.chars().enumerate() {
            self.set_cell(x + i as i32, y, ch, mark, Paint::Always);
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if !canvas.get(x, y).is_blank() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn line(w: usize, h: usize, x1: i32, y1: i32, x2: i32, y2: i32) -> Canvas {
        let mut c = Canvas::new(w, h);
        c.draw_line(x1, y1, x2, y2, '#', Mark::Border, Paint::Always);
        c
    }

    #[test]
    fn horizontal_and_vertical_lines_are_inclusive() {
        assert_eq!(marked(&line(6, 3, 1, 1, 4, 1)), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
        assert_eq!(marked(&line(3, 6, 1, 4, 1, 2)), vec![(1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn diagonal_line_hits_every_step() {
        assert_eq!(marked(&line(5, 5, 0, 0, 3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn steep_line_has_one_cell_per_row() {
        let c = line(4, 6, 0, 0, 2, 5);
        let cells = marked(&c);
        assert_eq!(cells.len(), 6);
        for y in 0..6 {
            assert_eq!(cells.iter().filter(|(_, cy)| *cy == y).count(), 1);
        }
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(2, 5)));
    }

    #[test]
    fn endpoint_order_does_not_matter_for_axis_lines() {
        assert_eq!(marked(&line(8, 8, 0, 3, 7, 3)), marked(&line(8, 8, 7, 3, 0, 3)));
    }

    #[test]
    fn lines_are_clipped_to_the_canvas() {
        assert_eq!(marked(&line(4, 4, -5, 2, 9, 2)), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert!(marked(&line(4, 4, -5, -1, -1, -9)).is_empty());
        assert!(marked(&line(4, 4, 10, 0, 12, 3)).is_empty());
    }

    #[test]
    fn skip_existing_leaves_features_alone() {
        let mut c = Canvas::new(5, 1);
        c.set_cell(2, 0, '~', Mark::River, Paint::Always);
        c.draw_line(0, 0, 4, 0, '─', Mark::Border, Paint::SkipExisting);
        assert_eq!(c.get(2, 0).glyph, '~');
        assert_eq!(c.get(0, 0).mark, Mark::Border);
        assert_eq!(c.get(4, 0).mark, Mark::Border);
    }

    #[test]
    fn features_overwrite_borders_but_not_each_other() {
        let mut c = Canvas::new(3, 1);
        c.draw_line(0, 0, 2, 0, '─', Mark::Border, Paint::SkipExisting);
        c.set_cell(0, 0, '~', Mark::River, Paint::OverBase);
        assert!(!c.set_cell(0, 0, '^', Mark::Mountain, Paint::OverBase));
        assert!(c.set_cell(1, 0, '^', Mark::Mountain, Paint::OverBase));
        assert!(c.set_cell(0, 0, '★', Mark::Center, Paint::Always));
        let glyphs: String = c.rows().next().unwrap().iter().map(|cell| cell.glyph).collect();
        assert_eq!(glyphs, "★^─");
    }

    #[test]
    fn labels_that_would_overflow_are_dropped() {
        let mut c = Canvas::new(10, 2);
        assert!(!c.draw_label(9, 0, "NY", Mark::Label));
        assert!(c.get(9, 0).is_blank());
        assert!(c.draw_label(8, 1, "NY", Mark::Label));
        assert_eq!(c.get(8, 1).glyph, 'N');
        assert_eq!(c.get(9, 1).glyph, 'Y');
        assert!(!c.draw_label(-1, 1, "NY", Mark::Label));
    }

    #[test]
    fn out_of_bounds_reads_and_writes_are_harmless() {
        let mut c = Canvas::new(2, 2);
        assert!(!c.in_bounds(2, 0));
        assert!(!c.in_bounds(0, -1));
        assert!(!c.set_cell(5, 5, 'x', Mark::Border, Paint::Always));
        assert!(c.get(-3, 1).is_blank());
    }
}
