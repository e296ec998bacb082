//! Clustered-dot ordered dithering

use super::threshold_by;
use crate::colorspace::to_grayscale;
use targa_core::Raster;

/// 4x4 clustered-dot threshold matrix, indexed `[x % 4][y % 4]`.
pub const CLUSTER_MATRIX: [[f32; 4]; 4] = [
    [0.7059, 0.3529, 0.5882, 0.2353],
    [0.0588, 0.9412, 0.8235, 0.4118],
    [0.4706, 0.7647, 0.8824, 0.1176],
    [0.1765, 0.5294, 0.2941, 0.6471],
];

/// Dither with the 4x4 clustered-dot matrix.
///
/// Pixel `(x, y)` becomes white iff its intensity is strictly greater than
/// `CLUSTER_MATRIX[x % 4][y % 4]`.
pub fn dither_cluster(raster: &mut Raster) {
    to_grayscale(raster);
    threshold_by(raster, |x, y| {
        CLUSTER_MATRIX[(x % 4) as usize][(y % 4) as usize]
    });
}
