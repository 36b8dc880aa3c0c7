//! Decoding images into textures and PNG export

use crate::io::error::{Result, SeamError, buffer_shape};
use crate::spatial::texture::{ChannelLayout, Texture};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage, RgbaImage};
use ndarray::Array3;
use std::path::Path;

/// Read and decode an image file
///
/// The format is detected from the file contents, falling back to the
/// extension.
///
/// # Errors
///
/// Returns [`SeamError::Decode`] if:
/// - The file cannot be opened or read
/// - The contents are not a supported image format
/// - The decoded image cannot be converted into a texture
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture> {
    let path = path.as_ref();
    let decode_error = |source| SeamError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    texture_from_image(&image)
}

/// Convert a decoded image into an 8-bit RGB or RGBA texture
///
/// Images with an alpha channel keep it; everything else becomes RGB.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the image dimensions
pub fn texture_from_image(image: &DynamicImage) -> Result<Texture> {
    // Alpha is kept and blended with the colour channels so cut-out textures stay cut out
    let (layout, raw) = if image.color().has_alpha() {
        (ChannelLayout::Rgba, image.to_rgba8().into_raw())
    } else {
        (ChannelLayout::Rgb, image.to_rgb8().into_raw())
    };

    let shape = (
        image.height() as usize,
        image.width() as usize,
        layout.channels(),
    );
    let pixels = Array3::from_shape_vec(shape, raw)
        .map_err(|e| buffer_shape("image decoding", &e))?;

    Texture::from_pixels(pixels, layout)
}

/// Convert a texture back into an image
///
/// # Errors
///
/// Returns an error if the texture is too large for the image crate's
/// 32-bit dimensions
pub fn texture_to_image(texture: &Texture) -> Result<DynamicImage> {
    let width = u32::try_from(texture.width())
        .map_err(|e| buffer_shape("image encoding", &e))?;
    let height = u32::try_from(texture.height())
        .map_err(|e| buffer_shape("image encoding", &e))?;
    let raw: Vec<u8> = texture.pixels().iter().copied().collect();

    let image = match texture.layout() {
        ChannelLayout::Rgb => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        ChannelLayout::Rgba => {
            RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
        }
    };

    image.ok_or_else(|| buffer_shape("image encoding", &"pixel buffer is too small"))
}

/// Encode a texture as PNG, replacing any existing file
///
/// # Errors
///
/// Returns [`SeamError::Write`] if the file cannot be created or encoded
pub fn save_png<P: AsRef<Path>>(texture: &Texture, path: P) -> Result<()> {
    let path = path.as_ref();
    texture_to_image(texture)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SeamError::Write {
            path: path.to_path_buf(),
            source,
        })
}
