//! Transform constants and runtime defaults

/// Half-width in pixels of the blended band around each seam
pub const DEFAULT_MARGIN: usize = 10;

// The blur kernel spans 2 * margin + 1 pixels; each quadrant must hold at least one full kernel
/// Number of blur kernels that must fit across each image dimension
pub const MIN_DIMENSION_KERNELS: usize = 2;

// Output settings
/// Suffix appended to the full input path
pub const OUTPUT_SUFFIX: &str = "_seamless";
/// Extension of the written file, which is always PNG encoded
pub const OUTPUT_EXTENSION: &str = "png";

/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
