//! Convolution engine
//!
//! Filters read from an immutable snapshot of the image and write RGB into
//! a separate destination. With `r = size / 2`, the interior region is the
//! set of pixels at least `r` away from every edge. Only interior pixels
//! receive filtered values, and only interior neighbors contribute to them.
//! The band of width `r` along every edge is set to black, and its pixels
//! never leak into the interior. Alpha is never written.
//!
//! As a consequence, a kernel whose weights sum to its divisor leaves a
//! uniform image unchanged only at pixels `2r` or more from every edge.
//! Closer to the band, part of the window is dropped and the result is
//! darker.

use crate::{FilterError, FilterResult, Kernel};
use targa_core::Raster;

/// How normalized values above 255 are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Saturate at 255
    #[default]
    Clamp,
    /// Keep the low 8 bits
    Wrap,
}

impl Overflow {
    /// Store a non-negative channel value as a byte.
    #[inline]
    pub fn apply(self, value: i32) -> u8 {
        match self {
            Overflow::Clamp => value.clamp(0, 255) as u8,
            Overflow::Wrap => value as u8,
        }
    }

    /// Add a filter response to a channel value.
    #[inline]
    pub fn add(self, a: u8, b: u8) -> u8 {
        match self {
            Overflow::Clamp => a.saturating_add(b),
            Overflow::Wrap => a.wrapping_add(b),
        }
    }
}

/// Options for convolution filters
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Upper bound policy for filtered channels
    pub overflow: Overflow,
}

/// Normalize a weighted sum to a channel value.
///
/// A sum that truncates to zero or below yields 0; otherwise the quotient
/// is rounded half up.
#[inline]
pub(crate) fn normalize(sum: f32, divisor: f32, overflow: Overflow) -> u8 {
    if (sum as i32) <= 0 {
        return 0;
    }
    overflow.apply((sum / divisor + 0.5) as i32)
}

fn check_fits(raster: &Raster, size: u32) -> FilterResult<()> {
    let (width, height) = raster.dimensions();
    if size > width || size > height {
        return Err(FilterError::KernelTooLarge {
            size,
            width,
            height,
        });
    }
    Ok(())
}

/// Convolve `src` with `kernel`, writing RGB into `dst`.
///
/// Pixels closer than `kernel.radius()` to any edge get RGB 0, and they do
/// not contribute to their interior neighbors either. The alpha channel of
/// `dst` is left as it was.
///
/// # Errors
///
/// Returns [`FilterError::Core`] if `src` and `dst` differ in size, and
/// [`FilterError::KernelTooLarge`] if the kernel is larger than the image.
pub fn apply_kernel(
    src: &Raster,
    kernel: &Kernel,
    dst: &mut Raster,
    options: &FilterOptions,
) -> FilterResult<()> {
    src.check_same_size(dst)?;
    check_fits(src, kernel.size())?;

    let (width, height) = src.dimensions();
    let r = kernel.radius();
    let size = kernel.size() as usize;
    let divisor = kernel.divisor();

    tracing::debug!(
        width,
        height,
        size,
        overflow = ?options.overflow,
        "applying kernel"
    );

    let interior = |v: u32, dim: u32| v >= r && v < dim - r;

    for y in 0..height {
        let out = dst.row_mut(y);
        for x in 0..width {
            let px = &mut out[x as usize * 4..x as usize * 4 + 3];
            if !(interior(y, height) && interior(x, width)) {
                px.fill(0);
                continue;
            }

            // Clip the window columns to the interior
            let first = (x - r).max(r);
            let last = (x + r).min(width - r - 1);
            let skip = (first - (x - r)) as usize;
            let taps = (last - first + 1) as usize;

            let mut sum = [0.0f32; 3];
            for (ky, weights) in kernel.weights().chunks_exact(size).enumerate() {
                let sy = y - r + ky as u32;
                if !interior(sy, height) {
                    continue;
                }
                let row = &src.row(sy)[first as usize * 4..(last as usize + 1) * 4];
                let weights = &weights[skip..skip + taps];
                for (&w, sp) in weights.iter().zip(row.chunks_exact(4)) {
                    for (s, &v) in sum.iter_mut().zip(sp) {
                        *s += v as f32 * w;
                    }
                }
            }
            for (d, s) in px.iter_mut().zip(sum) {
                *d = normalize(s, divisor, options.overflow);
            }
        }
    }
    Ok(())
}

/// Convolve a raster in place with default options.
///
/// See [`convolve_with`].
pub fn convolve(raster: &mut Raster, kernel: &Kernel) -> FilterResult<()> {
    convolve_with(raster, kernel, &FilterOptions::default())
}

/// Convolve a raster in place.
///
/// The raster is snapshotted first so every output pixel is computed from
/// the original values.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooLarge`] if the kernel is larger than
/// either image dimension. The raster is not modified in that case.
pub fn convolve_with(
    raster: &mut Raster,
    kernel: &Kernel,
    options: &FilterOptions,
) -> FilterResult<()> {
    check_fits(raster, kernel.size())?;
    let snapshot = raster.clone();
    apply_kernel(&snapshot, kernel, raster, options)
}

/// 5x5 box blur.
pub fn filter_box(raster: &mut Raster) -> FilterResult<()> {
    convolve(raster, &Kernel::box5())
}

/// 5x5 Bartlett blur.
pub fn filter_bartlett(raster: &mut Raster) -> FilterResult<()> {
    convolve(raster, &Kernel::bartlett5())
}

/// 5x5 Gaussian blur.
pub fn filter_gaussian(raster: &mut Raster) -> FilterResult<()> {
    convolve(raster, &Kernel::gaussian5())
}

/// N x N Gaussian blur using [`Kernel::gaussian`].
///
/// # Errors
///
/// Returns [`FilterError::KernelTooLarge`] if `n` exceeds the image size,
/// checked before any weights are built, and [`FilterError::InvalidKernel`]
/// if `n` is even or zero.
pub fn filter_gaussian_n(raster: &mut Raster, n: u32) -> FilterResult<()> {
    check_fits(raster, n)?;
    let kernel = Kernel::gaussian(n)?;
    convolve(raster, &kernel)
}
