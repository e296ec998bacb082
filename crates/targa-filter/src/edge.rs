//! Edge detection and enhancement
//!
//! Both filters use [`Kernel::edge5`]. Enhancement adds the edge response
//! back onto the original image, which sharpens transitions.

use crate::convolve::{FilterOptions, apply_kernel, convolve_with};
use crate::{FilterResult, Kernel};
use targa_core::Raster;

/// 5x5 high-pass edge detection.
pub fn filter_edge(raster: &mut Raster) -> FilterResult<()> {
    filter_edge_with(raster, &FilterOptions::default())
}

/// 5x5 high-pass edge detection with explicit options.
pub fn filter_edge_with(raster: &mut Raster, options: &FilterOptions) -> FilterResult<()> {
    convolve_with(raster, &Kernel::edge5(), options)
}

/// Sharpen by adding the edge response to each RGB channel.
pub fn filter_enhance(raster: &mut Raster) -> FilterResult<()> {
    filter_enhance_with(raster, &FilterOptions::default())
}

/// Sharpen by adding the edge response to each RGB channel.
///
/// With [`Overflow::Clamp`](crate::Overflow::Clamp) the addition saturates
/// at 255, with [`Overflow::Wrap`](crate::Overflow::Wrap) it wraps. Alpha
/// is untouched. Since the edge band of the response is black, border
/// pixels keep their original values.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooLarge`](crate::FilterError::KernelTooLarge)
/// if the image is smaller than 5x5.
pub fn filter_enhance_with(raster: &mut Raster, options: &FilterOptions) -> FilterResult<()> {
    let mut edges = raster.clone();
    apply_kernel(raster, &Kernel::edge5(), &mut edges, options)?;

    for (px, e) in raster.pixels_mut().zip(edges.pixels()) {
        for (c, &d) in px[..3].iter_mut().zip(&e[..3]) {
            *c = options.overflow.add(*c, d);
        }
    }
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        "enhance done"
    );
    Ok(())
}
