//! Error types for targa-filter
//!
//! Every filter validates its inputs before touching pixel data, so an
//! error always leaves the target raster unchanged.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] targa_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Kernel window does not fit inside the image
    #[error("kernel of size {size} does not fit a {width}x{height} image")]
    KernelTooLarge {
        /// Kernel side length
        size: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
