//! Error types for pixel grid construction

use std::fmt;

/// Error type for [`PixelGrid`](super::PixelGrid) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    Empty {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// Pixel buffer length does not equal `width * height`
    LengthMismatch {
        /// Expected number of pixels (`width * height`)
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty { width, height } => {
                write!(f, "pixel grid cannot be empty ({}x{})", width, height)
            }
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
