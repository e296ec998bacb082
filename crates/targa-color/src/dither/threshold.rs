//! Threshold dithering
//!
//! - Fixed threshold at 0.5
//! - Random noise added before the fixed threshold
//! - Brightness preserving threshold chosen from the sorted gray levels

use super::{intensity, set_bilevel, threshold_by};
use crate::colorspace::to_grayscale;
use rand::Rng;
use targa_core::Raster;

/// Largest noise offset added by random dithering, in gray levels (0.2 of
/// full scale).
pub const RANDOM_NOISE_AMPLITUDE: i32 = 51;

/// Fixed threshold used by threshold and random dithering.
pub const FIXED_THRESHOLD: f32 = 0.5;

/// Dither with a fixed threshold.
///
/// A pixel becomes white iff its normalized intensity is strictly greater
/// than 0.5, i.e. gray level 129 or above.
pub fn dither_threshold(raster: &mut Raster) {
    to_grayscale(raster);
    threshold_by(raster, |_, _| FIXED_THRESHOLD);
}

/// Dither with random noise using the thread-local generator.
///
/// See [`dither_random_with`].
pub fn dither_random(raster: &mut Raster) {
    dither_random_with(raster, &mut rand::thread_rng());
}

/// Dither with random noise.
///
/// Each gray level gets an independent uniform offset in `[-51, 51]`, is
/// clamped to `[0, 255]`, then thresholded at 0.5.
pub fn dither_random_with<R: Rng + ?Sized>(raster: &mut Raster, rng: &mut R) {
    to_grayscale(raster);
    for px in raster.pixels_mut() {
        let offset = rng.gen_range(-RANDOM_NOISE_AMPLITUDE..=RANDOM_NOISE_AMPLITUDE);
        let noisy = (px[0] as i32 + offset).clamp(0, 255) as u8;
        set_bilevel(px, intensity(noisy) > FIXED_THRESHOLD);
    }
}

/// Dither while preserving average brightness.
///
/// With `avg` the mean normalized intensity and `n` the pixel count, the
/// threshold is the gray level at rank `round((1 - avg) * n)` of the sorted
/// gray levels (clamped to `n - 1`), so that roughly `(1 - avg) * n` pixels
/// end up black. A pixel becomes white iff its intensity is strictly
/// greater than the threshold, so pixels equal to it turn black.
pub fn dither_bright(raster: &mut Raster) {
    to_grayscale(raster);

    let mut sorted: Vec<u8> = raster.pixels().map(|px| px[0]).collect();
    let n = sorted.len();
    let sum: u64 = sorted.iter().map(|&v| v as u64).sum();
    sorted.sort_unstable();

    let avg = sum as f64 / (256.0 * n as f64);
    let rank = (((1.0 - avg) * n as f64).round() as usize).min(n - 1);
    let threshold = intensity(sorted[rank]);

    tracing::debug!(avg, rank, threshold, "brightness preserving threshold");

    threshold_by(raster, |_, _| threshold);
}
