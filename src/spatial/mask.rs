//! Blend region masks built by rasterising polygons
//!
//! The blend region is a plus-shaped band around the midlines of a
//! quadrant-swapped image. It is described as a twelve-vertex polygon and
//! filled into a bit grid, one bit per pixel.

use crate::spatial::quadrant::QuadrantPartition;
use bitvec::vec::BitVec;

/// Closed polygon in pixel coordinates, vertices as `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<[i64; 2]>,
}

impl Polygon {
    /// Create a polygon from its vertices in drawing order
    pub const fn new(vertices: Vec<[i64; 2]>) -> Self {
        Self { vertices }
    }

    /// Plus-shaped outline of half-width `margin` around the partition midlines
    ///
    /// The arms reach the image border on all four sides, so every pixel
    /// within `margin` of the horizontal or vertical midline lies inside.
    pub fn cross(partition: &QuadrantPartition, margin: usize) -> Self {
        let w = partition.width() as i64;
        let h = partition.height() as i64;
        let hw = partition.half_width() as i64;
        let hh = partition.half_height() as i64;
        let m = margin as i64;

        Self::new(vec![
            [hw - m, 0],
            [hw + m, 0],
            [hw + m, hh - m],
            [w, hh - m],
            [w, hh + m],
            [hw + m, hh + m],
            [hw + m, h],
            [hw - m, h],
            [hw - m, hh + m],
            [0, hh + m],
            [0, hh - m],
            [hw - m, hh - m],
        ])
    }

    /// Vertices in drawing order
    pub fn vertices(&self) -> &[[i64; 2]] {
        &self.vertices
    }

    /// Whether `(x, y)` lies inside the polygon or on its outline
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let mut inside = false;

        let next = self.vertices.iter().cycle().skip(1);
        for (&[x1, y1], &[x2, y2]) in self.vertices.iter().zip(next) {

            if on_segment([x1, y1], [x2, y2], x, y) {
                return true;
            }

            // Even-odd rule with a ray towards +x; half-open in y so shared vertices count once
            if (y1 > y) != (y2 > y) {
                let dy = y2 - y1;
                let lhs = (x - x1) * dy;
                let rhs = (y - y1) * (x2 - x1);
                if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                    inside = !inside;
                }
            }
        }

        inside
    }
}

fn on_segment(a: [i64; 2], b: [i64; 2], x: i64, y: i64) -> bool {
    let cross = (b[0] - a[0]) * (y - a[1]) - (b[1] - a[1]) * (x - a[0]);
    cross == 0
        && x >= a[0].min(b[0])
        && x <= a[0].max(b[0])
        && y >= a[1].min(b[1])
        && y <= a[1].max(b[1])
}

/// Binary per-pixel mask, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl Mask {
    /// Create an empty mask
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, width * height),
            width,
            height,
        }
    }

    /// Mark every pixel inside or on the outline of `polygon`
    pub fn from_polygon(polygon: &Polygon, width: usize, height: usize) -> Self {
        let mut mask = Self::new(width, height);
        for row in 0..height {
            for col in 0..width {
                if polygon.contains(col as i64, row as i64) {
                    mask.set(row, col, true);
                }
            }
        }
        mask
    }

    /// Cross-shaped blend region for a partitioned image
    pub fn cross(partition: &QuadrantPartition, margin: usize) -> Self {
        Self::from_polygon(
            &Polygon::cross(partition, margin),
            partition.width(),
            partition.height(),
        )
    }

    /// Mask width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Mask height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether a pixel is in the region; pixels outside the mask never are
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height
            && col < self.width
            && self.bits.get(row * self.width + col).is_some_and(|bit| *bit)
    }

    /// Set or clear one pixel; out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row < self.height && col < self.width {
            self.bits.set(row * self.width + col, value);
        }
    }

    /// Number of pixels in the region
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
