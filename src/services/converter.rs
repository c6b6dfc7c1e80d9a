use std::path::Path;

use pixel_lut::{LookupTable, LutGenerator, PixelGrid};

use crate::error::ConvertError;
use crate::loader;
use crate::models::{AppConfig, DimensionMismatch, DisplaySpec};

/// Result of one conversion run
#[derive(Debug)]
pub struct ConversionReport {
    /// Decoded source image
    pub grid: PixelGrid,
    /// Generated lookup chain
    pub table: LookupTable,
    /// Set when the image does not match the display frame
    pub dimension_warning: Option<DimensionMismatch>,
}

/// Conversion pipeline that orchestrates load → check → generate
pub struct Converter {
    display: DisplaySpec,
    generator: LutGenerator,
}

impl Converter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            display: config.display,
            generator: config.generator(),
        }
    }

    /// Override the generator (e.g. with CLI-supplied names)
    pub fn with_generator(mut self, generator: LutGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Load a PNG and generate its lookup chain
    pub fn convert_file(&self, path: &Path) -> Result<ConversionReport, ConvertError> {
        tracing::info!(path = %path.display(), "Processing image");
        let grid = loader::load_png(path)?;
        self.convert_grid(grid)
    }

    /// Generate the lookup chain for an already decoded grid.
    ///
    /// A size mismatch is logged and reported, never fatal; index math always
    /// uses the grid's own width.
    pub fn convert_grid(&self, grid: PixelGrid) -> Result<ConversionReport, ConvertError> {
        let dimension_warning = self.display.check(grid.width(), grid.height());
        if let Some(mismatch) = &dimension_warning {
            tracing::warn!(%mismatch, "Image does not match display size");
        }

        let table = self.generator.generate(&grid)?;
        tracing::info!(
            colors = table.color_count(),
            conditions = table.condition_count(),
            "Found {} colours in the image",
            table.color_count()
        );

        Ok(ConversionReport {
            grid,
            table,
            dimension_warning,
        })
    }

    /// Write the rendered chain to `path`
    pub fn write_output(report: &ConversionReport, path: &Path) -> Result<(), ConvertError> {
        std::fs::write(path, report.table.to_string()).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            lines = report.table.lines().len(),
            "Wrote Verilog output"
        );
        Ok(())
    }
}
