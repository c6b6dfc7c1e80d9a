pub mod config;
pub mod display_spec;

pub use config::{AppConfig, VerilogConfig, CONFIG_ENV_VAR};
pub use display_spec::{DimensionMismatch, DisplaySpec};
