//! Radar imagery to intensity grid.
//!
//! Source images use the usual green→yellow→red reflectivity palette. Each
//! target cell samples one source pixel (nearest neighbour) and classifies it
//! with fixed RGB thresholds; the first matching band wins.

use image::{GenericImageView, Rgba};
use tracing::debug;

use crate::model::IntensityGrid;

/// Pixels with alpha below this carry no data.
const OPAQUE_ALPHA: u8 = 128;

pub(crate) fn image_to_grid<I>(img: &I, width: usize, height: usize) -> IntensityGrid
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut grid = IntensityGrid::new(width, height);
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 || width == 0 || height == 0 {
        return grid;
    }

    let mut found = false;
    for y in 0..height {
        for x in 0..width {
            let px = (x * src_w as usize / width) as u32;
            let py = (y * src_h as usize / height) as u32;
            let level = classify_pixel(img.get_pixel(px, py));
            if level > 0 {
                found = true;
            }
            grid.set(x, y, level);
        }
    }

    if found {
        debug!(max_level = grid.max_level(), "precipitation found in radar image");
    } else {
        debug!("no precipitation detected in radar image");
    }
    grid
}

/// Maps one RGBA sample to a level in `0..=10`.
pub(crate) fn classify_pixel(px: Rgba<u8>) -> i32 {
    let [r, g, b, a] = px.0;
    if a < OPAQUE_ALPHA {
        return 0;
    }
    let (r, g, b) = (r as i32, g as i32, b as i32);

    let level = if r > 200 && g < 100 && b < 100 {
        8 + (r - 200) / 28
    } else if r > 200 && g > 150 && b < 100 {
        5 + (r - 200) / 50
    } else if g > 150 && r < 150 && b < 100 {
        1 + (g - 150) / 50
    } else if b > 150 && r < 100 && g < 150 {
        1
    } else if r > 100 && g > 100 && b < 50 {
        4
    } else {
        0
    };
    level.clamp(0, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
        Rgba([r, g, b, a])
    }

    #[test]
    fn bands_follow_threshold_order() {
        assert_eq!(classify_pixel(rgba(255, 0, 0, 255)), 9);
        assert_eq!(classify_pixel(rgba(201, 50, 50, 255)), 8);
        assert_eq!(classify_pixel(rgba(255, 200, 0, 255)), 6);
        assert_eq!(classify_pixel(rgba(220, 160, 20, 255)), 5);
        assert_eq!(classify_pixel(rgba(0, 255, 0, 255)), 3);
        assert_eq!(classify_pixel(rgba(100, 160, 50, 255)), 1);
        assert_eq!(classify_pixel(rgba(20, 100, 220, 255)), 1);
        assert_eq!(classify_pixel(rgba(150, 140, 10, 255)), 4);
        assert_eq!(classify_pixel(rgba(128, 128, 128, 255)), 0);
        assert_eq!(classify_pixel(rgba(255, 255, 255, 255)), 0);
    }

    #[test]
    fn earlier_band_wins_over_later_rules() {
        // Also satisfies the yellowish rule, which would give 4.
        assert_eq!(classify_pixel(rgba(210, 180, 20, 255)), 5);
    }

    #[test]
    fn transparent_pixels_are_empty() {
        for a in [0u8, 1, 64, 127] {
            assert_eq!(classify_pixel(rgba(255, 0, 0, a)), 0);
        }
        assert_eq!(classify_pixel(rgba(255, 0, 0, 128)), 9);
    }

    #[test]
    fn every_opaque_colour_stays_in_range() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let level = classify_pixel(rgba(r as u8, g as u8, b as u8, 255));
                    assert!((0..=10).contains(&level));
                }
            }
        }
    }

    #[test]
    fn downsampling_picks_nearest_source_pixel() {
        // 4x2 source: left half heavy red, right half green.
        let mut img = RgbaImage::new(4, 2);
        for (x, _, p) in img.enumerate_pixels_mut() {
            *p = if x < 2 { rgba(255, 0, 0, 255) } else { rgba(0, 255, 0, 255) };
        }
        let grid = image_to_grid(&img, 2, 1);
        assert_eq!(grid.get(0, 0), 9);
        assert_eq!(grid.get(1, 0), 3);
    }

    #[test]
    fn upsampling_and_transparent_image() {
        let img = RgbaImage::from_pixel(3, 3, rgba(255, 0, 0, 0));
        let grid = image_to_grid(&img, 60, 30);
        assert_eq!(grid.width(), 60);
        assert_eq!(grid.height(), 30);
        assert_eq!(grid.max_level(), 0);
    }

    #[test]
    fn empty_source_yields_zero_grid() {
        let img = RgbaImage::new(0, 0);
        let grid = image_to_grid(&img, 5, 5);
        assert_eq!(grid.max_level(), 0);
    }
}
