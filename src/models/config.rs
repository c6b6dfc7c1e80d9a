use crate::error::ConfigError;
use crate::models::DisplaySpec;
use pixel_lut::emit::{DEFAULT_INDEX_SIGNAL, DEFAULT_TARGET};
use pixel_lut::LutGenerator;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Expected frame size of the target display
    #[serde(default)]
    pub display: DisplaySpec,

    /// Names used in the generated Verilog
    #[serde(default)]
    pub verilog: VerilogConfig,
}

/// Signal names for the generated chain
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct VerilogConfig {
    /// Variable assigned by every statement
    #[serde(default = "default_target")]
    pub target: String,

    /// Signal tested by every condition
    #[serde(default = "default_index_signal")]
    pub index_signal: String,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_index_signal() -> String {
    DEFAULT_INDEX_SIGNAL.to_string()
}

impl Default for VerilogConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            index_signal: default_index_signal(),
        }
    }
}

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "CONFIG_FILE";

impl AppConfig {
    /// Pick the config file: an explicit path wins over `CONFIG_FILE`.
    ///
    /// `None` means run with defaults.
    pub fn resolve_path(explicit: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
        explicit.or_else(|| {
            env_value
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    width = config.display.width,
                    height = config.display.height,
                    target = %config.verilog.target,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Generator configured with this config's signal names
    pub fn generator(&self) -> LutGenerator {
        LutGenerator::new()
            .target(self.verilog.target.clone())
            .index_signal(self.verilog.index_signal.clone())
    }

    /// Generator with per-run name overrides applied on top of this config
    pub fn generator_with(
        &self,
        target: Option<String>,
        index_signal: Option<String>,
    ) -> LutGenerator {
        let mut generator = self.generator();
        if let Some(name) = target {
            generator = generator.target(name);
        }
        if let Some(name) = index_signal {
            generator = generator.index_signal(name);
        }
        generator
    }
}
