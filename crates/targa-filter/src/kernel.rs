//! Convolution kernels
//!
//! A [`Kernel`] is a square, odd-sized grid of weights plus the divisor the
//! weighted sum is normalized by. The named constructors cover the fixed
//! 5x5 filters and the parametric N x N Gaussian approximation.

use crate::{FilterError, FilterResult};

/// A square convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Weights in row-major order
    weights: Vec<f32>,
    /// Normalization divisor
    divisor: f32,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero, if
    /// `weights` does not hold `size * size` values, or if `divisor` is not
    /// a positive finite number.
    pub fn new(size: u32, weights: Vec<f32>, divisor: f32) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "size must be odd, got {}",
                size
            )));
        }
        let expected = (size as usize) * (size as usize);
        if weights.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights, got {}",
                expected,
                weights.len()
            )));
        }
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(FilterError::InvalidKernel(format!(
                "divisor must be positive, got {}",
                divisor
            )));
        }
        Ok(Kernel {
            size,
            weights,
            divisor,
        })
    }

    /// Build a fixed 5x5 kernel from a literal table.
    fn from_table(table: [[f32; 5]; 5], divisor: f32) -> Self {
        Kernel {
            size: 5,
            weights: table.iter().flatten().copied().collect(),
            divisor,
        }
    }

    /// Create a 5x5 box (averaging) kernel.
    ///
    /// All weights are 1, divisor 25.
    pub fn box5() -> Self {
        Self::from_table([[1.0; 5]; 5], 25.0)
    }

    /// Create a 5x5 Bartlett (tent) kernel, divisor 81.
    pub fn bartlett5() -> Self {
        Self::from_table(
            [
                [1.0, 2.0, 3.0, 2.0, 1.0],
                [2.0, 4.0, 6.0, 4.0, 2.0],
                [3.0, 6.0, 9.0, 6.0, 3.0],
                [2.0, 4.0, 6.0, 4.0, 2.0],
                [1.0, 2.0, 3.0, 2.0, 1.0],
            ],
            81.0,
        )
    }

    /// Create a 5x5 binomial Gaussian kernel, divisor 256.
    pub fn gaussian5() -> Self {
        Self::from_table(
            [
                [1.0, 4.0, 6.0, 4.0, 1.0],
                [4.0, 16.0, 24.0, 16.0, 4.0],
                [6.0, 24.0, 36.0, 24.0, 6.0],
                [4.0, 16.0, 24.0, 16.0, 4.0],
                [1.0, 4.0, 6.0, 4.0, 1.0],
            ],
            256.0,
        )
    }

    /// Create an N x N Gaussian approximation.
    ///
    /// The outermost ring weighs 1, the next ring `n - 1` and everything
    /// inside that `(n - 1)^2`. The divisor is the sum of all weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `n` is even or zero, or if
    /// the `n * n` weights cannot be allocated.
    pub fn gaussian(n: u32) -> FilterResult<Self> {
        if n == 0 || n % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian size must be odd, got {}",
                n
            )));
        }
        let count = (n as usize)
            .checked_mul(n as usize)
            .ok_or_else(|| FilterError::InvalidKernel(format!("gaussian size {} overflows", n)))?;
        let mut weights = Vec::new();
        weights.try_reserve_exact(count).map_err(|_| {
            FilterError::InvalidKernel(format!("cannot allocate {} weights", count))
        })?;

        let edge = (n - 1) as f32;
        for i in 0..n {
            for j in 0..n {
                let w = if i == 0 || i == n - 1 || j == 0 || j == n - 1 {
                    1.0
                } else if i == 1 || i == n - 2 || j == 1 || j == n - 2 {
                    edge
                } else {
                    edge * edge
                };
                weights.push(w);
            }
        }
        let divisor = weights.iter().sum();
        Self::new(n, weights, divisor)
    }

    /// Create a 5x5 edge-detect (high pass) kernel.
    ///
    /// A negated binomial ring around a center of 220, divisor 256. The
    /// weights sum to zero, so flat regions map to black.
    pub fn edge5() -> Self {
        Self::from_table(
            [
                [-1.0, -4.0, -6.0, -4.0, -1.0],
                [-4.0, -16.0, -24.0, -16.0, -4.0],
                [-6.0, -24.0, 220.0, -24.0, -6.0],
                [-4.0, -16.0, -24.0, -16.0, -4.0],
                [-1.0, -4.0, -6.0, -4.0, -1.0],
            ],
            256.0,
        )
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the distance from the center to an edge of the window.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Get the normalization divisor.
    #[inline]
    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    /// Get the weight at column `kx`, row `ky`.
    pub fn get(&self, kx: u32, ky: u32) -> Option<f32> {
        if kx < self.size && ky < self.size {
            Some(self.weights[(ky * self.size + kx) as usize])
        } else {
            None
        }
    }

    /// Get all weights in row-major order.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}
