//! One-dimensional Gaussian kernels and border handling for convolution

use crate::io::error::{Result, invalid_parameter};

/// Normalised, symmetric 1-D Gaussian kernel
///
/// A square `size x size` Gaussian is separable, so the blur applies this
/// kernel once along rows and once along columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    weights: Vec<f64>,
    sigma: f64,
}

impl GaussianKernel {
    /// Kernel of the given odd size with sigma derived from the size
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or even
    pub fn new(size: usize) -> Result<Self> {
        Self::with_sigma(size, Self::auto_sigma(size))
    }

    /// Kernel of the given odd size and standard deviation
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or even, or `sigma` is not a positive finite number
    pub fn with_sigma(size: usize, sigma: f64) -> Result<Self> {
        if size % 2 == 0 {
            return Err(invalid_parameter(
                "kernel_size",
                &size,
                &"must be a positive odd number",
            ));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &sigma,
                &"must be a positive finite number",
            ));
        }

        let radius = (size / 2) as f64;
        let denominator = 2.0 * sigma * sigma;
        let raw: Vec<f64> = (0..size)
            .map(|tap| {
                let offset = tap as f64 - radius;
                (-(offset * offset) / denominator).exp()
            })
            .collect();

        let total: f64 = raw.iter().sum();
        let weights = raw.into_iter().map(|w| w / total).collect();

        Ok(Self { weights, sigma })
    }

    /// Standard deviation used when none is given: `0.3 * ((size - 1) * 0.5 - 1) + 0.8`
    pub fn auto_sigma(size: usize) -> f64 {
        0.3f64.mul_add((size as f64 - 1.0).mul_add(0.5, -1.0), 0.8)
    }

    /// Number of taps
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Taps on either side of the centre
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// Standard deviation
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Weights from the leftmost tap to the rightmost, summing to one
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Map a possibly out-of-range index into `0..len` by mirroring without repeating the edge
///
/// Produces the `dcb|abcd|cba` border pattern. Returns 0 when `len` is 0 or 1.
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }

    let last = len as isize - 1;
    let period = 2 * last;
    let folded = index.rem_euclid(period);
    (if folded > last { period - folded } else { folded }) as usize
}
