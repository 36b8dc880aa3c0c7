/// Mask-driven compositing of two textures
pub mod composite;
/// Seam blending pipeline and its configuration
pub mod executor;
