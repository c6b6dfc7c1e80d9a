//! Unified error type for the pixel-lut public API.
//!
//! [`LutError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::emit::EmitError;
use crate::grid::GridError;
use std::fmt;

/// Unified error type for the pixel-lut public API.
///
/// # Example
///
/// ```
/// use pixel_lut::{LutError, LutGenerator, PixelGrid, Rgb};
///
/// fn generate(pixels: Vec<Rgb>) -> Result<String, LutError> {
///     let grid = PixelGrid::new(2, 2, pixels)?;
///     Ok(LutGenerator::new().generate(&grid)?.to_string())
/// }
///
/// assert!(generate(vec![Rgb::new(0, 0, 0); 3]).is_err());
/// ```
#[derive(Debug)]
pub enum LutError {
    /// Pixel grid shape error
    Grid(GridError),
    /// Emitter configuration error (bad signal names)
    Emit(EmitError),
}

impl fmt::Display for LutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutError::Grid(err) => write!(f, "grid error: {}", err),
            LutError::Emit(err) => write!(f, "emit error: {}", err),
        }
    }
}

impl std::error::Error for LutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LutError::Grid(err) => Some(err),
            LutError::Emit(err) => Some(err),
        }
    }
}

impl From<GridError> for LutError {
    fn from(err: GridError) -> Self {
        LutError::Grid(err)
    }
}

impl From<EmitError> for LutError {
    fn from(err: EmitError) -> Self {
        LutError::Emit(err)
    }
}
