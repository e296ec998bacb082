//! Raster - The main image container
//!
//! A `Raster` owns a contiguous `width * height * 4` byte buffer of
//! interleaved R, G, B, A samples in row-major order, row 0 at the top.
//!
//! # Ownership model
//!
//! A `Raster` is a plain owned value. Transforms borrow it mutably for the
//! duration of a call, so no reader can observe a partially transformed
//! buffer. `Clone` produces an independent deep copy.

mod access;
mod compare;
mod graphics;
mod rgb;

pub use graphics::Stroke;
pub use rgb::Channel;

use crate::color::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

/// RGBA raster buffer
///
/// # Invariant
///
/// `data.len() == width * height * 4` for the whole lifetime of the value.
///
/// # Examples
///
/// ```
/// use targa_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interleaved RGBA bytes
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster with every channel of every pixel set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the pixel buffer cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.resize(len, 0);
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Create a raster that takes ownership of an existing RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Create a raster by copying an RGBA slice.
    pub fn from_rgba_slice(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Self::from_rgba(width, height, data.to_vec())
    }

    /// Compute the byte length of a `width x height` RGBA buffer.
    ///
    /// Uses checked arithmetic so absurd dimensions fail instead of wrapping.
    fn buffer_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the image.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get raw access to the RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the RGBA bytes.
    ///
    /// The slice length is fixed, so the size invariant cannot be broken.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its RGBA bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Get mutable bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Set every channel of every pixel (alpha included) to zero.
    pub fn clear_to_black(&mut self) {
        self.data.fill(0);
    }

    /// Set every pixel to `rgba`.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Return a copy of this raster with the row order reversed.
    ///
    /// Used at codec boundaries whose native row order is bottom-up.
    pub fn reverse_rows(&self) -> Raster {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(self.stride()).rev() {
            data.extend_from_slice(row);
        }
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Require `other` to have the same dimensions as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] naming both sizes.
    pub fn check_same_size(&self, other: &Raster) -> Result<()> {
        if self.sizes_equal(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            })
        }
    }
}
