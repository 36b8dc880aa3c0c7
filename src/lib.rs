//! Seamless texture conversion by quadrant swapping and seam blurring
//!
//! Tiling an arbitrary image shows a hard seam wherever opposite edges meet.
//! The image is cut into quadrants that trade places diagonally, which moves
//! those edges to the midlines; a cross-shaped band around the midlines is
//! replaced with a Gaussian-blurred copy, and the quadrants are swapped back.

#![forbid(unsafe_code)]

/// Compositing and the seam blending pipeline
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Gaussian kernels and convolution
pub mod math;
/// Texture storage, quadrant partitioning and blend masks
pub mod spatial;

pub use algorithm::executor::{SeamConfig, TextureSeamer};
pub use io::error::{Result, SeamError};
pub use spatial::Texture;
