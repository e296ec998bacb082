//! Targa Filter - Convolution filters and reduction
//!
//! This crate provides spatial filters over a [`Raster`](targa_core::Raster):
//!
//! - Convolution with square, odd-sized kernels ([`convolve`])
//! - Blurs: 5x5 box, Bartlett, Gaussian and N x N Gaussian
//! - Edge detection and edge enhancement ([`edge`])
//! - 2x reduction with a 3x3 weighted average ([`reduce`])
//!
//! Convolution only fills the interior region where the kernel window fits
//! inside the image; the border band of width `size / 2` becomes black.

pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod reduce;

// Re-export core types
pub use targa_core;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{
    FilterOptions, Overflow, apply_kernel, convolve, convolve_with, filter_bartlett, filter_box,
    filter_gaussian, filter_gaussian_n,
};
pub use edge::{filter_edge, filter_edge_with, filter_enhance, filter_enhance_with};
pub use reduce::{half_size, half_size_in_place};
