//! RGB component operations
//!
//! Functions for compositing RGBA pixels down to RGB and for extracting
//! individual channel planes.

use super::Raster;
use crate::color::{self, ALPHA, BLUE, GREEN, RED};

/// Channel selector for plane extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel (byte 0)
    Red,
    /// Green channel (byte 1)
    Green,
    /// Blue channel (byte 2)
    Blue,
    /// Alpha channel (byte 3)
    Alpha,
}

impl Channel {
    /// Byte index of this channel within an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => RED,
            Channel::Green => GREEN,
            Channel::Blue => BLUE,
            Channel::Alpha => ALPHA,
        }
    }
}

impl Raster {
    /// Composite every pixel over opaque black and return packed RGB bytes.
    ///
    /// The result has `width * height * 3` bytes in raster order. See
    /// [`color::rgba_to_rgb`] for the per-pixel rule.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for px in self.pixels() {
            rgb.extend_from_slice(&color::rgba_to_rgb([px[0], px[1], px[2], px[3]]));
        }
        rgb
    }

    /// Extract a single channel as a `width * height` byte plane.
    pub fn channel(&self, channel: Channel) -> Vec<u8> {
        let idx = channel.index();
        self.pixels().map(|px| px[idx]).collect()
    }
}
