//! Quadrant partition and the diagonal quadrant swap
//!
//! Swapping each quadrant with its diagonal opposite moves the four image
//! edges to the middle of the image, where a seam can be blended like any
//! other interior feature.

use crate::spatial::texture::Texture;
use ndarray::Array3;

/// Bisection of an image into four quadrants at its midpoints
///
/// The top and left quadrants span `len div 2` pixels. For odd sizes the
/// bottom or right quadrants are one pixel larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantPartition {
    height: usize,
    width: usize,
}

impl QuadrantPartition {
    /// Partition an image of the given size
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Partition matching a texture's dimensions
    pub fn of(texture: &Texture) -> Self {
        Self::new(texture.height(), texture.width())
    }

    /// Row where the top and bottom halves meet (`height div 2`)
    pub const fn half_height(&self) -> usize {
        self.height / 2
    }

    /// Column where the left and right halves meet (`width div 2`)
    pub const fn half_width(&self) -> usize {
        self.width / 2
    }

    /// Image height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Image width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Row in the source image that lands on `row` after [`swap_quadrants`]
    pub const fn source_row(&self, row: usize) -> usize {
        rotate(row, self.half_height(), self.height)
    }

    /// Column in the source image that lands on `col` after [`swap_quadrants`]
    pub const fn source_col(&self, col: usize) -> usize {
        rotate(col, self.half_width(), self.width)
    }

    /// Row in the swapped image that lands on `row` after [`unswap_quadrants`]
    pub const fn restored_row(&self, row: usize) -> usize {
        rotate(row, self.height - self.half_height(), self.height)
    }

    /// Column in the swapped image that lands on `col` after [`unswap_quadrants`]
    pub const fn restored_col(&self, col: usize) -> usize {
        rotate(col, self.width - self.half_width(), self.width)
    }
}

const fn rotate(index: usize, shift: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + shift) % len }
}

fn remap<R, C>(texture: &Texture, row_source: R, col_source: C) -> Texture
where
    R: Fn(usize) -> usize,
    C: Fn(usize) -> usize,
{
    let source = texture.pixels();
    let remapped = Array3::from_shape_fn(source.dim(), |(row, col, channel)| {
        source
            .get((row_source(row), col_source(col), channel))
            .copied()
            .unwrap_or(0)
    });
    Texture::from_parts(remapped, texture.layout())
}

/// Move every quadrant to its diagonally opposite position
///
/// Top-left trades places with bottom-right and top-right with bottom-left,
/// so the original first and last rows and columns meet at the new
/// midlines. For even sizes the swap is its own inverse.
pub fn swap_quadrants(texture: &Texture) -> Texture {
    let partition = QuadrantPartition::of(texture);
    remap(
        texture,
        |row| partition.source_row(row),
        |col| partition.source_col(col),
    )
}

/// Undo [`swap_quadrants`] for any size, odd dimensions included
pub fn unswap_quadrants(texture: &Texture) -> Texture {
    let partition = QuadrantPartition::of(texture);
    remap(
        texture,
        |row| partition.restored_row(row),
        |col| partition.restored_col(col),
    )
}
