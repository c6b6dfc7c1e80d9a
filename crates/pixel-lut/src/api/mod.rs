//! Public API for the pixel-lut crate.
//!
//! This module provides the high-level API: [`LutGenerator`] builder and
//! [`LutError`] unified error type.

mod builder;
mod error;

pub use builder::LutGenerator;
pub use error::LutError;
