//! Grayscale conversion
//!
//! Luminance uses the ITU-R BT.601 weights `0.299 R + 0.587 G + 0.114 B`,
//! truncated toward zero. The weights are applied in exact integer
//! arithmetic so that white maps to 255 rather than 254.

use targa_core::Raster;

/// Luminance of a single RGB triple.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Convert an image to grayscale in place.
///
/// R, G and B of every pixel are set to the pixel's luminance. Alpha is
/// left untouched. The conversion is idempotent.
pub fn to_grayscale(raster: &mut Raster) {
    for px in raster.pixels_mut() {
        let gray = rgb_to_gray(px[0], px[1], px[2]);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
    tracing::trace!(
        width = raster.width(),
        height = raster.height(),
        "converted to grayscale"
    );
}
