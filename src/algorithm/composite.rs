//! Mask-driven selection between two textures

use crate::io::error::{Result, buffer_shape};
use crate::spatial::mask::Mask;
use crate::spatial::texture::Texture;
use ndarray::Array3;

/// Take `overlay` pixels where `mask` is set and `base` pixels elsewhere
///
/// # Errors
///
/// Returns an error if the textures differ in size or layout, or the mask
/// does not match their dimensions
pub fn composite(base: &Texture, overlay: &Texture, mask: &Mask) -> Result<Texture> {
    if base.pixels().dim() != overlay.pixels().dim() || base.layout() != overlay.layout() {
        return Err(buffer_shape(
            "composite",
            &format!(
                "base is {:?} {:?}, overlay is {:?} {:?}",
                base.pixels().dim(),
                base.layout(),
                overlay.pixels().dim(),
                overlay.layout()
            ),
        ));
    }
    if mask.height() != base.height() || mask.width() != base.width() {
        return Err(buffer_shape(
            "composite",
            &format!(
                "mask is {}x{}, textures are {}x{}",
                mask.width(),
                mask.height(),
                base.width(),
                base.height()
            ),
        ));
    }

    let chosen = Array3::from_shape_fn(base.pixels().dim(), |(row, col, channel)| {
        let source = if mask.contains(row, col) {
            overlay
        } else {
            base
        };
        source
            .pixels()
            .get((row, col, channel))
            .copied()
            .unwrap_or(0)
    });

    Ok(Texture::from_parts(chosen, base.layout()))
}
