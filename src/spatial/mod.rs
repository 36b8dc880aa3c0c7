//! Pixel storage and geometric operations on whole images
//!
//! This module contains:
//! - The texture pixel grid
//! - Quadrant partitioning and swapping
//! - Blend masks and the polygons they are filled from

/// Blend region polygons and bit masks
pub mod mask;
/// Quadrant partition and the self-inverse quadrant swap
pub mod quadrant;
/// 8-bit RGB/RGBA pixel grid
pub mod texture;

pub use texture::{ChannelLayout, Texture};
