//! Brush painting
//!
//! A [`Stroke`] is a filled circle of solid color with a one pixel blended
//! rim, painted directly into the raster.

use super::Raster;
use crate::color::BYTES_PER_PIXEL;

/// A circular brush dab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Center x coordinate (may lie outside the image)
    pub x: i32,
    /// Center y coordinate (may lie outside the image)
    pub y: i32,
    /// Radius in pixels
    pub radius: u32,
    /// RGBA color
    pub color: [u8; 4],
}

impl Stroke {
    /// Create a new stroke.
    pub const fn new(x: i32, y: i32, radius: u32, color: [u8; 4]) -> Self {
        Self {
            x,
            y,
            radius,
            color,
        }
    }
}

impl Raster {
    /// Paint a stroke.
    ///
    /// For every offset `(dx, dy)` in `[-r, r]^2` that lands inside the image:
    ///
    /// - `dx^2 + dy^2 <= r^2` overwrites the pixel with the stroke color
    /// - `dx^2 + dy^2 == r^2 + 1` writes the per-channel average
    ///   `(old + color) / 2`
    ///
    /// All other pixels are untouched.
    pub fn paint_stroke(&mut self, stroke: &Stroke) {
        let r = stroke.radius as i64;
        let r2 = r * r;
        let (cx, cy) = (stroke.x as i64, stroke.y as i64);
        let width = self.width as usize;

        for dy in -r..=r {
            for dx in -r..=r {
                let (x, y) = (cx + dx, cy + dy);
                if !self.contains(x, y) {
                    continue;
                }
                let dist = dx * dx + dy * dy;
                let i = (y as usize * width + x as usize) * BYTES_PER_PIXEL;
                let px = &mut self.data[i..i + BYTES_PER_PIXEL];
                if dist <= r2 {
                    px.copy_from_slice(&stroke.color);
                } else if dist == r2 + 1 {
                    for (old, &c) in px.iter_mut().zip(stroke.color.iter()) {
                        *old = ((*old as u16 + c as u16) / 2) as u8;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_radius_zero_paints_center() {
        let mut raster = Raster::new(3, 3).unwrap();
        raster.paint_stroke(&Stroke::new(1, 1, 0, RED));
        assert_eq!(raster.get_pixel(1, 1), Some(RED));
        // Offsets stay within [-r, r], so radius 0 has no rim
        assert_eq!(raster.get_pixel(0, 1), Some([0, 0, 0, 0]));
        assert_eq!(raster.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_rim_is_blended() {
        let mut raster = Raster::new(7, 7).unwrap();
        raster.fill([100, 100, 100, 100]);
        raster.paint_stroke(&Stroke::new(3, 3, 2, RED));
        // Inside: dist 4 <= 4
        assert_eq!(raster.get_pixel(5, 3), Some(RED));
        // Rim: dist 5 == 4 + 1
        assert_eq!(raster.get_pixel(5, 4), Some([177, 50, 50, 177]));
        // Outside: dist 8
        assert_eq!(raster.get_pixel(5, 5), Some([100, 100, 100, 100]));
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut raster = Raster::new(4, 4).unwrap();
        raster.paint_stroke(&Stroke::new(-1, 0, 1, RED));
        assert_eq!(raster.get_pixel(0, 0), Some(RED));
        assert_eq!(raster.get_pixel(1, 0), Some([0, 0, 0, 0]));
        raster.paint_stroke(&Stroke::new(100, 100, 3, RED));
    }
}
