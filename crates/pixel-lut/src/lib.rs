//! pixel-lut: pixel-index lookup tables for RGB565 displays
//!
//! This library turns a decoded RGB image into a Verilog if/else-if chain
//! that maps a linear pixel index to a 16-bit color constant. The chain is
//! meant to be pasted into a display driver that walks `pixel_index` across
//! the panel and drives `oled_data`.
//!
//! # Quick Start
//!
//! The [`LutGenerator`] builder is the primary entry point:
//!
//! ```
//! use pixel_lut::{LutGenerator, PixelGrid, Rgb};
//!
//! let grid = PixelGrid::new(1, 1, vec![Rgb::new(255, 255, 255)]).unwrap();
//! let table = LutGenerator::new().generate(&grid).unwrap();
//!
//! assert_eq!(
//!     table.to_string(),
//!     "if (pixel_index == 0) oled_data = 16'b1111111111111111;"
//! );
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid                (decoded RGB, row-major)
//!     |
//!     v
//! ColorGroups              (quantize to RGB565, index = y * width + x,
//!     |                     groups kept in first-occurrence order)
//!     v
//! compress()               (sort, fold consecutive indices into runs)
//!     |
//!     v
//! Emitter                  (one `if` / `else if` line per group)
//!     |
//!     v
//! LookupTable
//! ```
//!
//! Every stage is deterministic: the same grid always produces the same
//! text, including line order. Lines follow the order in which each color
//! first appears in the scan, not the numeric order of the codes.
//!
//! # Output
//!
//! ```text
//! if (<disjunction>) oled_data = 16'bRRRRRGGGGGGBBBBB;
//! else if (<disjunction>) oled_data = 16'bRRRRRGGGGGGBBBBB;
//! ```
//!
//! where each disjunction term is `pixel_index == N` or
//! `((pixel_index >= LOW) && (pixel_index <= HIGH))`, joined by ` || `.
//! There is no trailing `else`.

pub mod api;
pub mod color;
pub mod emit;
pub mod grid;
pub mod group;
pub mod output;
pub mod ranges;


pub use api::{LutError, LutGenerator};
pub use color::{ColorCode, Rgb};
pub use emit::{Branch, EmitError, Emitter, Statement};
pub use grid::{GridError, PixelGrid};
pub use group::{ColorGroup, ColorGroups};
pub use output::LookupTable;
pub use ranges::{compress, Condition};
