//! Seam blending pipeline: swap, mask, blur, composite, swap back

use crate::algorithm::composite::composite;
use crate::io::configuration::{DEFAULT_MARGIN, MIN_DIMENSION_KERNELS};
use crate::io::error::{Result, SeamError, invalid_parameter};
use crate::math::convolution::gaussian_blur;
use crate::math::kernel::GaussianKernel;
use crate::spatial::mask::Mask;
use crate::spatial::quadrant::{QuadrantPartition, swap_quadrants, unswap_quadrants};
use crate::spatial::texture::Texture;
use log::debug;

/// Blend geometry for the seam pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeamConfig {
    /// Half-width in pixels of the blended band around each seam
    pub margin: usize,
}

impl Default for SeamConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl SeamConfig {
    /// Create a configuration with the given margin
    ///
    /// # Errors
    ///
    /// Returns an error if `margin` is zero, which would leave the seams untouched
    pub fn new(margin: usize) -> Result<Self> {
        if margin == 0 {
            return Err(invalid_parameter(
                "margin",
                &margin,
                &"must be at least one pixel",
            ));
        }
        Ok(Self { margin })
    }

    /// Side of the square blur kernel (`2 * margin + 1`)
    pub const fn kernel_size(&self) -> usize {
        2 * self.margin + 1
    }

    /// Smallest accepted width or height
    pub const fn min_dimension(&self) -> usize {
        MIN_DIMENSION_KERNELS * self.kernel_size()
    }
}

/// Turns a texture into one that tiles without visible seams
///
/// Swapping quadrants brings the four edges to the image midlines, a
/// cross-shaped band around the midlines is replaced with a blurred copy,
/// and the inverse swap puts everything back. Pixels farther than the margin
/// from any seam are left bit-identical.
#[derive(Debug, Clone)]
pub struct TextureSeamer {
    config: SeamConfig,
    kernel: GaussianKernel,
}

impl TextureSeamer {
    /// Create a seamer for the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration's margin is zero
    pub fn new(config: SeamConfig) -> Result<Self> {
        let config = SeamConfig::new(config.margin)?;
        let kernel = GaussianKernel::new(config.kernel_size())?;
        Ok(Self { config, kernel })
    }

    /// Active configuration
    pub const fn config(&self) -> &SeamConfig {
        &self.config
    }

    /// Blur kernel applied to the seam band
    pub const fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Check that a texture is large enough for the band and kernel
    ///
    /// # Errors
    ///
    /// Returns [`SeamError::Dimension`] if either side is below
    /// [`SeamConfig::min_dimension`]
    pub fn validate(&self, texture: &Texture) -> Result<()> {
        let required = self.config.min_dimension();
        if texture.width() < required || texture.height() < required {
            return Err(SeamError::Dimension {
                width: texture.width(),
                height: texture.height(),
                required,
                margin: self.config.margin,
            });
        }
        Ok(())
    }

    /// Produce the seamless version of a texture
    ///
    /// # Errors
    ///
    /// Returns an error if the texture fails [`Self::validate`]
    pub fn apply(&self, texture: &Texture) -> Result<Texture> {
        self.validate(texture)?;

        let partition = QuadrantPartition::of(texture);
        debug!(
            "Swapping quadrants of {}x{} texture at ({}, {})",
            texture.width(),
            texture.height(),
            partition.half_width(),
            partition.half_height()
        );
        let swapped = swap_quadrants(texture);

        let mask = Mask::cross(&partition, self.config.margin);
        debug!(
            "Blend band covers {} of {} pixels",
            mask.count(),
            texture.width() * texture.height()
        );

        debug!(
            "Blurring with {0}x{0} kernel, sigma {1:.3}",
            self.kernel.size(),
            self.kernel.sigma()
        );
        let blurred = gaussian_blur(&swapped, &self.kernel);
        let blended = composite(&swapped, &blurred, &mask)?;

        Ok(unswap_quadrants(&blended))
    }
}
