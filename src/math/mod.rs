//! Numerical building blocks for image filtering

/// Separable convolution over textures
pub mod convolution;
/// Gaussian kernel weights and border reflection
pub mod kernel;
