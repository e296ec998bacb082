//! Deterministic synthetic test images
//!
//! Every fixture is a pure function of its arguments, so regression output
//! is reproducible without image files checked into the repository.
//!
//! # Panics
//!
//! All constructors panic if `width` or `height` is 0.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use targa_core::Raster;

fn blank(width: u32, height: u32) -> Raster {
    Raster::new(width, height)
        .unwrap_or_else(|e| panic!("fixture {}x{}: {}", width, height, e))
}

/// Image filled with a single RGBA color.
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    let mut raster = blank(width, height);
    raster.fill(rgba);
    raster
}

/// Opaque color gradient: red ramps left to right, green ramps top to
/// bottom, blue is their complement.
pub fn gradient(width: u32, height: u32) -> Raster {
    let mut raster = blank(width, height);
    let wd = width.max(2) - 1;
    let hd = height.max(2) - 1;
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / wd) as u8;
            let g = (y * 255 / hd) as u8;
            let b = 255 - ((r as u16 + g as u16) / 2) as u8;
            raster.set_pixel_unchecked(x, y, [r, g, b, 255]);
        }
    }
    raster
}

/// Opaque horizontal gray ramp from 0 at the left to 255 at the right.
pub fn gray_ramp(width: u32, height: u32) -> Raster {
    let mut raster = blank(width, height);
    let wd = width.max(2) - 1;
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / wd) as u8;
            raster.set_pixel_unchecked(x, y, [v, v, v, 255]);
        }
    }
    raster
}

/// Opaque RGB noise from a seeded generator.
pub fn noise(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = blank(width, height);
    for px in raster.pixels_mut() {
        px[0] = rng.r#gen();
        px[1] = rng.r#gen();
        px[2] = rng.r#gen();
        px[3] = 255;
    }
    raster
}

/// Opaque black image with a single white pixel at `(x, y)`.
pub fn single_dot(width: u32, height: u32, x: u32, y: u32) -> Raster {
    let mut raster = solid(width, height, [0, 0, 0, 255]);
    raster.set_pixel_unchecked(x, y, [255, 255, 255, 255]);
    raster
}

/// Image made of `count` distinct opaque colors laid out in raster order,
/// color `i` covering `i + 1` pixels. Remaining pixels are black.
///
/// Useful for exercising populosity ordering where counts are all distinct.
pub fn color_bands(width: u32, height: u32, count: u32) -> Raster {
    let mut raster = solid(width, height, [0, 0, 0, 255]);
    let colors = (0..count).flat_map(|i| {
        let c = [
            ((i * 37) % 32 * 8) as u8,
            ((i * 11 + 3) % 32 * 8) as u8,
            ((i / 32 + 1) * 8 % 256) as u8,
            255,
        ];
        std::iter::repeat_n(c, i as usize + 1)
    });
    for (px, c) in raster.pixels_mut().zip(colors) {
        px.copy_from_slice(&c);
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        let r = solid(3, 2, [1, 2, 3, 4]);
        assert!(r.pixels().all(|p| p == [1, 2, 3, 4]));
    }

    #[test]
    fn test_gradient_corners() {
        let r = gradient(5, 5);
        assert_eq!(r.get_pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(r.get_pixel(4, 4), Some([255, 255, 0, 255]));
    }

    #[test]
    fn test_gray_ramp_ends() {
        let r = gray_ramp(256, 1);
        assert_eq!(r.get_pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(r.get_pixel(128, 0), Some([128, 128, 128, 255]));
        assert_eq!(r.get_pixel(255, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_noise_is_deterministic() {
        assert_eq!(noise(8, 8, 42), noise(8, 8, 42));
        assert_ne!(noise(8, 8, 42), noise(8, 8, 43));
    }

    #[test]
    fn test_single_dot() {
        let r = single_dot(4, 4, 2, 1);
        assert_eq!(r.get_pixel(2, 1), Some([255, 255, 255, 255]));
        assert_eq!(r.get_pixel(1, 1), Some([0, 0, 0, 255]));
    }
}
