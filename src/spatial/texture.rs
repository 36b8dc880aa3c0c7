//! Owned pixel grid shared by every stage of the seam pipeline

use crate::io::error::{Result, buffer_shape};
use ndarray::{Array3, ArrayView1, Axis};

/// Channel arrangement of a texture's pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl ChannelLayout {
    /// Number of 8-bit channels per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// An 8-bit image stored as a `(height, width, channels)` array
///
/// Rows come first so that `pixels[(row, col, channel)]` reads the same way
/// the image is laid out in memory by the `image` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pixels: Array3<u8>,
    layout: ChannelLayout,
}

impl Texture {
    /// Create a black texture
    pub fn new(height: usize, width: usize, layout: ChannelLayout) -> Self {
        Self {
            pixels: Array3::zeros((height, width, layout.channels())),
            layout,
        }
    }

    /// Build a texture by evaluating `f(row, col, channel)` for every sample
    pub fn from_fn<F>(height: usize, width: usize, layout: ChannelLayout, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let pixels = Array3::from_shape_fn((height, width, layout.channels()), |(r, c, ch)| {
            f(r, c, ch)
        });
        Self { pixels, layout }
    }

    /// Wrap an existing pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if the array's channel axis does not match `layout`
    pub fn from_pixels(pixels: Array3<u8>, layout: ChannelLayout) -> Result<Self> {
        let channels = pixels.dim().2;
        if channels != layout.channels() {
            return Err(buffer_shape(
                "texture construction",
                &format!(
                    "{layout:?} expects {} channels, array has {channels}",
                    layout.channels()
                ),
            ));
        }
        Ok(Self { pixels, layout })
    }

    // Callers guarantee the channel axis already matches the layout
    pub(crate) const fn from_parts(pixels: Array3<u8>, layout: ChannelLayout) -> Self {
        Self { pixels, layout }
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Channel arrangement
    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Raw sample storage
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Consume the texture, returning its sample storage
    pub fn into_pixels(self) -> Array3<u8> {
        self.pixels
    }

    /// Channel values of one pixel, or `None` outside the image
    pub fn pixel(&self, row: usize, col: usize) -> Option<ArrayView1<'_, u8>> {
        (row < self.height() && col < self.width()).then(|| {
            self.pixels
                .index_axis(Axis(0), row)
                .index_axis_move(Axis(0), col)
        })
    }
}
