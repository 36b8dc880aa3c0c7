//! Separable Gaussian blur over 8-bit textures

use crate::math::kernel::{GaussianKernel, reflect_101};
use crate::spatial::texture::Texture;
use ndarray::Array3;

/// Blur every channel of a texture with a square Gaussian
///
/// Runs the kernel horizontally into a floating-point buffer, then
/// vertically back to 8 bits. Taps that fall outside the image are mirrored
/// with [`reflect_101`], so edges are not darkened.
pub fn gaussian_blur(texture: &Texture, kernel: &GaussianKernel) -> Texture {
    let source = texture.pixels();
    let (height, width, channels) = source.dim();
    let radius = kernel.radius() as isize;

    let horizontal = Array3::from_shape_fn((height, width, channels), |(row, col, channel)| {
        kernel
            .weights()
            .iter()
            .enumerate()
            .map(|(tap, &weight)| {
                let col_index = reflect_101(col as isize + tap as isize - radius, width);
                let sample = source.get((row, col_index, channel)).copied().unwrap_or(0);
                weight * f64::from(sample)
            })
            .sum::<f64>()
    });

    let blurred = Array3::from_shape_fn((height, width, channels), |(row, col, channel)| {
        let value = kernel
            .weights()
            .iter()
            .enumerate()
            .map(|(tap, &weight)| {
                let row_index = reflect_101(row as isize + tap as isize - radius, height);
                weight * horizontal.get((row_index, col, channel)).copied().unwrap_or(0.0)
            })
            .sum::<f64>();
        quantize(value)
    });

    Texture::from_parts(blurred, texture.layout())
}

// Round half away from zero into the 8-bit range
fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
