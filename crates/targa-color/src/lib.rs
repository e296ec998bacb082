//! Targa Color - Color reduction and dithering
//!
//! This crate rewrites the colors of a [`Raster`](targa_core::Raster) in
//! place:
//!
//! - **Grayscale** ([`colorspace`]): BT.601 luminance
//! - **Quantization** ([`quantize`]): uniform 3-3-2 bits, populosity
//! - **Dithering** ([`dither`]): threshold, random, clustered-dot,
//!   brightness preserving, Floyd-Steinberg, color Floyd-Steinberg
//!
//! Alpha is never modified by any operation in this crate.

pub mod colorspace;
pub mod dither;
pub mod error;
pub mod palette;
pub mod quantize;

// Re-export core types
pub use targa_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export grayscale functions
pub use colorspace::{rgb_to_gray, to_grayscale};

// Re-export quantization functions
pub use palette::Palette;
pub use quantize::{
    // Types
    PopulosityOptions,
    UniformQuantOptions,
    // Functions
    quant_populosity,
    quant_populosity_with,
    quant_uniform,
    quant_uniform_with,
};

// Re-export dithering functions
pub use dither::{
    dither_bright, dither_cluster, dither_color, dither_fs, dither_random, dither_random_with,
    dither_threshold,
};
