//! Targa - RGBA raster processing for Rust
//!
//! An in-memory 32-bit RGBA image with a set of whole-image transforms and a
//! Truevision TGA codec.
//!
//! # Overview
//!
//! - Image I/O (TGA, uncompressed and RLE)
//! - Grayscale conversion and color quantization
//! - Dithering (threshold, random, clustered, brightness preserving,
//!   Floyd-Steinberg)
//! - Convolution filters, edge enhancement and 2x reduction
//! - Pixel difference and stroke painting
//!
//! # Example
//!
//! ```
//! use targa::Raster;
//!
//! let mut raster = Raster::new(16, 16).unwrap();
//! raster.fill([128, 128, 128, 255]);
//! targa::color::to_grayscale(&mut raster);
//! targa::filter::filter_box(&mut raster).unwrap();
//! assert_eq!(raster.get_pixel(8, 8), Some([128, 128, 128, 255]));
//! assert_eq!(raster.get_pixel(0, 0), Some([0, 0, 0, 255]));
//!
//! let bytes = targa::io::write_image_mem(&raster).unwrap();
//! let loaded = targa::io::read_image_mem(&bytes).unwrap();
//! assert_eq!(loaded, raster);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use targa_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use targa_color as color;
pub use targa_filter as filter;
pub use targa_io as io;
