use std::path::PathBuf;

use pixel_lut::LutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to locate input: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Unsupported PNG layout: {0}")]
    Unsupported(String),

    #[error("Invalid pixel data: {0}")]
    Grid(#[from] pixel_lut::GridError),
}

impl From<png::DecodingError> for LoadError {
    fn from(e: png::DecodingError) -> Self {
        LoadError::Decode(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Generation error: {0}")]
    Generate(#[from] LutError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
