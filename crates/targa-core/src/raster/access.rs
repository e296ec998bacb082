//! Pixel access functions
//!
//! Low-level functions for getting and setting individual RGBA pixels.
//!
//! # Pixel layout
//!
//! Pixel `(x, y)` occupies bytes `[(y * width + x) * 4, +4)` of the buffer,
//! in R, G, B, A order.

use super::Raster;
use crate::color::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

impl Raster {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Check if `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, rgba);
        Ok(())
    }

    /// Set the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Iterate over pixels in raster order as 4-byte slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }

    /// Iterate mutably over pixels in raster order as 4-byte slices.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(BYTES_PER_PIXEL)
    }
}
