//! Decoded pixel input
//!
//! [`PixelGrid`] is the only input the pipeline consumes. Decoding image files
//! happens elsewhere; this module just validates the buffer shape.

mod error;
mod pixel_grid;

pub use error::GridError;
pub use pixel_grid::PixelGrid;
