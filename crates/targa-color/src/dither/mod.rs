//! Dithering (halftoning)
//!
//! Every variant except [`dither_color`] first converts the image to
//! grayscale in place, then sets R, G and B of each pixel to either 0 or
//! 255. Alpha is never modified.
//!
//! Intensities are normalized as `value / 256`, so a gray level of 255 maps
//! to 0.99609375 and never reaches 1.0.
//!
//! - [`threshold`]: fixed threshold, random noise, brightness preserving
//! - [`ordered`]: 4x4 clustered-dot matrix
//! - [`diffusion`]: Floyd-Steinberg error diffusion, monochrome and color

pub mod diffusion;
pub mod ordered;
pub mod threshold;

pub use diffusion::{dither_color, dither_fs};
pub use ordered::{CLUSTER_MATRIX, dither_cluster};
pub use threshold::{dither_bright, dither_random, dither_random_with, dither_threshold};

use targa_core::Raster;

/// Normalize a gray level to `[0, 1)`.
#[inline]
pub fn intensity(value: u8) -> f32 {
    value as f32 / 256.0
}

/// Index of the level nearest to `value`, or `None` if `levels` is empty.
///
/// The first level with the smallest absolute distance wins ties.
pub(crate) fn nearest_level(value: f32, levels: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &level) in levels.iter().enumerate() {
        let dist = (value - level).abs();
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Set R, G and B of a pixel to black or white.
#[inline]
pub(crate) fn set_bilevel(px: &mut [u8], white: bool) {
    let v = if white { 255 } else { 0 };
    px[0] = v;
    px[1] = v;
    px[2] = v;
}

/// Threshold every pixel's gray level against `threshold(x, y)`.
pub(crate) fn threshold_by<F>(raster: &mut Raster, threshold: F)
where
    F: Fn(u32, u32) -> f32,
{
    let width = raster.width() as usize;
    for (i, px) in raster.pixels_mut().enumerate() {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        let white = intensity(px[0]) > threshold(x, y);
        set_bilevel(px, white);
    }
}
