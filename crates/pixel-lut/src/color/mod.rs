//! Color types and quantization
//!
//! - [`Rgb`]: decoded 8-bit pixel, the pipeline input
//! - [`ColorCode`]: packed RGB565 value, the pipeline output
//!
//! # Example
//!
//! ```
//! use pixel_lut::{ColorCode, Rgb};
//!
//! let code = ColorCode::quantize(Rgb::new(255, 255, 255));
//! assert_eq!(code, ColorCode::WHITE);
//! ```

mod code;
mod rgb;

pub use code::{ColorCode, CODE_BITS};
pub use rgb::Rgb;
