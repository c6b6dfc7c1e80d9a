//! img2verilog
//!
//! Turns a PNG frame into a Verilog `pixel_index` lookup chain for RGB565
//! OLED drivers. This library exposes modules for integration testing.

pub mod error;
pub mod loader;
pub mod models;
pub mod services;
