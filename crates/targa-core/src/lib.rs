//! Targa Core - The RGBA raster buffer
//!
//! This crate provides the fundamental data structures shared by every
//! transform in the targa image processing library:
//!
//! - [`Raster`] - A width x height buffer of interleaved R, G, B, A bytes
//! - [`Channel`] - Channel selector for plane extraction
//! - [`Stroke`] - A filled circle brush painted with [`Raster::paint_stroke`]
//! - [`Error`] / [`Result`] - The core error type
//!
//! Row 0 is always the top row of the image in memory. Codecs whose native
//! row order differs are responsible for flipping exactly once on load and
//! once on save (see `targa-io`).

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Channel, Raster, Stroke};

/// Channel indices and helper functions for RGBA byte pixels.
///
/// # Pixel format
///
/// Pixels are stored as four consecutive bytes `[R, G, B, A]`.
pub mod color {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes per RGBA pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Background the RGBA to RGB conversion composites over.
    pub const BACKGROUND: [u8; 3] = [0, 0, 0];

    /// Compose an opaque RGBA pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> [u8; 4] {
        [r, g, b, 255]
    }

    /// Extract the RGB values of an RGBA pixel.
    #[inline]
    pub fn extract_rgb(pixel: [u8; 4]) -> [u8; 3] {
        [pixel[RED], pixel[GREEN], pixel[BLUE]]
    }

    /// Composite a single RGBA pixel over the opaque black background.
    ///
    /// A fully transparent pixel becomes the background. Otherwise each color
    /// channel is scaled by `255 / alpha`, floored and clamped to 255.
    /// The floor is computed exactly in integer arithmetic.
    #[inline]
    pub fn rgba_to_rgb(pixel: [u8; 4]) -> [u8; 3] {
        let alpha = pixel[ALPHA] as u32;
        if alpha == 0 {
            return BACKGROUND;
        }
        let unpremultiply = |c: u8| ((c as u32 * 255) / alpha).min(255) as u8;
        [
            unpremultiply(pixel[RED]),
            unpremultiply(pixel[GREEN]),
            unpremultiply(pixel[BLUE]),
        ]
    }

}
