//! Image comparison operations
//!
//! - Exact equality of pixel data
//! - Absolute difference image

use super::Raster;
use crate::color;
use crate::error::Result;

impl Raster {
    /// Check if two rasters have identical dimensions and pixel bytes.
    pub fn equals(&self, other: &Raster) -> bool {
        self == other
    }

    /// Replace this image with the absolute difference against `other`.
    ///
    /// Both images are composited over black first; each RGB channel becomes
    /// `|a - b|` and alpha is set to 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// if the sizes differ. The image is left unchanged in that case.
    pub fn difference(&mut self, other: &Raster) -> Result<()> {
        self.check_same_size(other)?;

        for (dst, src) in self.pixels_mut().zip(other.pixels()) {
            let a = color::rgba_to_rgb([dst[0], dst[1], dst[2], dst[3]]);
            let b = color::rgba_to_rgb([src[0], src[1], src[2], src[3]]);
            dst[color::RED] = a[0].abs_diff(b[0]);
            dst[color::GREEN] = a[1].abs_diff(b[1]);
            dst[color::BLUE] = a[2].abs_diff(b[2]);
            dst[color::ALPHA] = 255;
        }
        Ok(())
    }

    /// Count pixels whose RGBA bytes differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Raster) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self
            .pixels()
            .zip(other.pixels())
            .filter(|(a, b)| a != b)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_difference() {
        let mut a = Raster::from_rgba(2, 1, vec![200, 10, 50, 255, 0, 0, 0, 0]).unwrap();
        let b = Raster::from_rgba(2, 1, vec![100, 30, 50, 255, 40, 40, 40, 255]).unwrap();
        a.difference(&b).unwrap();
        assert_eq!(a.get_pixel(0, 0), Some([100, 20, 0, 255]));
        // Transparent pixel composites to black
        assert_eq!(a.get_pixel(1, 0), Some([40, 40, 40, 255]));
    }

    #[test]
    fn test_difference_with_self_is_black() {
        let mut a = Raster::from_rgba(1, 1, vec![12, 34, 56, 78]).unwrap();
        let b = a.clone();
        a.difference(&b).unwrap();
        assert_eq!(a.get_pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_difference_mismatch_leaves_target() {
        let mut a = Raster::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let b = Raster::new(2, 1).unwrap();
        let before = a.clone();
        assert!(matches!(
            a.difference(&b),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(a, before);
    }

    #[test]
    fn test_count_pixel_diffs() {
        let a = Raster::new(2, 2).unwrap();
        let mut b = a.clone();
        assert_eq!(a.count_pixel_diffs(&b).unwrap(), 0);
        assert!(a.equals(&b));
        b.set_pixel(1, 1, [0, 0, 0, 1]).unwrap();
        assert_eq!(a.count_pixel_diffs(&b).unwrap(), 1);
        assert!(!a.equals(&b));
    }
}
