//! 2x reduction
//!
//! Each output pixel `(x, y)` is a 3x3 weighted average centered on source
//! pixel `(2x, 2y)`:
//!
//! ```text
//!   1 2 1
//!   2 4 2   / 16
//!   1 2 1
//! ```
//!
//! Taps falling outside the source contribute nothing; the sum is still
//! divided by 16, so the top and left edges come out darker.

use crate::convolve::{Overflow, normalize};
use crate::{FilterError, FilterResult};
use targa_core::Raster;

const REDUCE_WEIGHTS: [[f32; 3]; 3] = [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]];
const REDUCE_DIVISOR: f32 = 16.0;

/// Reduce a raster to half its width and height.
///
/// The output is `width / 2` by `height / 2` and fully opaque.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if either dimension is less
/// than 2.
pub fn half_size(src: &Raster) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();
    if width < 2 || height < 2 {
        return Err(FilterError::InvalidParameters(format!(
            "cannot halve a {}x{} image",
            width, height
        )));
    }

    let (out_w, out_h) = (width / 2, height / 2);
    let mut dst = Raster::new(out_w, out_h)?;

    for y in 0..out_h {
        for x in 0..out_w {
            let (cx, cy) = (2 * x as i64, 2 * y as i64);
            let mut sum = [0.0f32; 3];
            for (dy, weights) in REDUCE_WEIGHTS.iter().enumerate() {
                for (dx, &w) in weights.iter().enumerate() {
                    let (sx, sy) = (cx + dx as i64 - 1, cy + dy as i64 - 1);
                    if !src.contains(sx, sy) {
                        continue;
                    }
                    let px = src.get_pixel_unchecked(sx as u32, sy as u32);
                    for (s, &v) in sum.iter_mut().zip(&px[..3]) {
                        *s += v as f32 * w;
                    }
                }
            }
            let [r, g, b] = sum.map(|s| normalize(s, REDUCE_DIVISOR, Overflow::Clamp));
            dst.set_pixel_unchecked(x, y, [r, g, b, 255]);
        }
    }

    tracing::debug!(width, height, out_w, out_h, "half size");
    Ok(dst)
}

/// Replace a raster with its [`half_size`] reduction.
///
/// # Errors
///
/// Same as [`half_size`]; the raster is untouched on error.
pub fn half_size_in_place(raster: &mut Raster) -> FilterResult<()> {
    *raster = half_size(raster)?;
    Ok(())
}
