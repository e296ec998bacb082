//! Floyd-Steinberg error diffusion
//!
//! Pixels are visited in raster order (no serpentine). The quantization
//! error of each pixel is pushed to its unvisited neighbors:
//!
//! ```text
//!          *    7/16
//!   3/16  5/16  1/16
//! ```
//!
//! Neighbors outside the image are skipped and their share of the error is
//! dropped. Rows do not wrap.

use super::{intensity, nearest_level, set_bilevel};
use crate::colorspace::to_grayscale;
use targa_core::Raster;

/// Error share pushed to the right neighbor
const WEIGHT_RIGHT: f32 = 7.0 / 16.0;
/// Error share pushed below and to the left
const WEIGHT_BELOW_LEFT: f32 = 3.0 / 16.0;
/// Error share pushed below
const WEIGHT_BELOW: f32 = 5.0 / 16.0;
/// Error share pushed below and to the right
const WEIGHT_BELOW_RIGHT: f32 = 1.0 / 16.0;

/// Monochrome output levels
const MONO_LEVELS: [f32; 2] = [0.0, 1.0];

/// Red and green output levels, normalized and as bytes
const RG_LEVELS: [f32; 8] = [
    0.0, 0.140625, 0.28515625, 0.42578125, 0.5703125, 0.7109375, 0.85546875, 1.0,
];
const RG_TABLE: [u8; 8] = [0, 36, 73, 109, 146, 182, 219, 255];

/// Blue output levels, normalized and as bytes
const B_LEVELS: [f32; 4] = [0.0, 0.33203125, 0.6640625, 1.0];
const B_TABLE: [u8; 4] = [0, 85, 170, 255];

/// Run error diffusion over one plane of normalized values.
///
/// `values` is consumed as scratch space. Returns the chosen level index of
/// every sample in raster order.
fn diffuse_plane(values: &mut [f32], width: usize, height: usize, levels: &[f32]) -> Vec<u8> {
    let mut out = vec![0u8; values.len()];
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let old = values[i];
            let Some(level) = nearest_level(old, levels) else {
                continue;
            };
            out[i] = level as u8;
            let err = old - levels[level];

            let has_right = x + 1 < width;
            let has_below = y + 1 < height;
            if has_right {
                values[i + 1] += WEIGHT_RIGHT * err;
            }
            if has_below {
                if x > 0 {
                    values[i + width - 1] += WEIGHT_BELOW_LEFT * err;
                }
                values[i + width] += WEIGHT_BELOW * err;
                if has_right {
                    values[i + width + 1] += WEIGHT_BELOW_RIGHT * err;
                }
            }
        }
    }
    out
}

/// Floyd-Steinberg dither to black and white.
///
/// The image is converted to grayscale, then each intensity is snapped to
/// the nearer of 0.0 and 1.0 (0.0 on a tie) while diffusing the error.
pub fn dither_fs(raster: &mut Raster) {
    to_grayscale(raster);

    let (width, height) = (raster.width() as usize, raster.height() as usize);
    let mut values: Vec<f32> = raster.pixels().map(|px| intensity(px[0])).collect();
    let levels = diffuse_plane(&mut values, width, height, &MONO_LEVELS);

    for (px, &level) in raster.pixels_mut().zip(levels.iter()) {
        set_bilevel(px, level == 1);
    }
}

/// Floyd-Steinberg dither to an 8-8-4 level color palette.
///
/// Each RGB channel of the alpha-composited image (see
/// [`Raster::to_rgb`]) is diffused independently: red and green onto
/// `{0, 36, 73, 109, 146, 182, 219, 255}`, blue onto `{0, 85, 170, 255}`.
/// Alpha is left untouched.
pub fn dither_color(raster: &mut Raster) {
    let (width, height) = (raster.width() as usize, raster.height() as usize);
    let rgb = raster.to_rgb();

    let plane = |c: usize| -> Vec<f32> {
        rgb.chunks_exact(3)
            .map(|p| intensity(p[c]))
            .collect()
    };
    let mut red = plane(0);
    let mut green = plane(1);
    let mut blue = plane(2);

    let red = diffuse_plane(&mut red, width, height, &RG_LEVELS);
    let green = diffuse_plane(&mut green, width, height, &RG_LEVELS);
    let blue = diffuse_plane(&mut blue, width, height, &B_LEVELS);

    for (i, px) in raster.pixels_mut().enumerate() {
        px[0] = RG_TABLE[red[i] as usize];
        px[1] = RG_TABLE[green[i] as usize];
        px[2] = B_TABLE[blue[i] as usize];
    }

    tracing::trace!(width, height, "color error diffusion done");
}
