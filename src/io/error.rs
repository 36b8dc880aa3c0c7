//! Error types for texture decoding, validation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all seam blending operations
#[derive(Debug)]
pub enum SeamError {
    /// Input file could not be read or decoded as an image
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image is too small for the blend band and blur kernel
    ///
    /// Both dimensions must be at least `2 * (2 * margin + 1)` pixels,
    /// otherwise the cross-shaped band would cover most of the image and the
    /// kernel would reach across the whole quadrant.
    Dimension {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Minimum accepted size of either dimension
        required: usize,
        /// Margin the requirement was derived from
        margin: usize,
    },

    /// Failed to encode or save the blended texture
    Write {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Library parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pixel buffers passed together do not agree in shape
    BufferShape {
        /// Name of the operation that received the buffers
        operation: &'static str,
        /// Description of the mismatch
        reason: String,
    },
}

impl fmt::Display for SeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::Dimension {
                width,
                height,
                required,
                margin,
            } => {
                write!(
                    f,
                    "Image of {width}x{height} is too small: both dimensions must be at least {required} pixels for margin {margin}"
                )
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BufferShape { operation, reason } => {
                write!(f, "Buffer shape mismatch in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SeamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for seam blending results
pub type Result<T> = std::result::Result<T, SeamError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SeamError {
    SeamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a buffer shape error
pub fn buffer_shape(operation: &'static str, reason: &impl ToString) -> SeamError {
    SeamError::BufferShape {
        operation,
        reason: reason.to_string(),
    }
}
