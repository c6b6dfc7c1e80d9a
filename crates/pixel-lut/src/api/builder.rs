//! LutGenerator builder -- the primary entry point for the crate.
//!
//! [`LutGenerator`] wraps the pipeline (group, compress, emit) behind a
//! fluent configuration of the emitted signal names.

use super::error::LutError;
use crate::emit::{Emitter, DEFAULT_INDEX_SIGNAL, DEFAULT_TARGET};
use crate::grid::PixelGrid;
use crate::group::ColorGroups;
use crate::output::LookupTable;

/// High-level lookup table generator.
///
/// - Configuration methods consume and return `self`
/// - Names are validated when [`generate()`](Self::generate) or
///   [`emitter()`](Self::emitter) runs
/// - [`generate()`](Self::generate) takes `&self`, so one generator can be
///   reused across grids
///
/// # Example
///
/// ```
/// use pixel_lut::{LutGenerator, PixelGrid, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let green = Rgb::new(0, 255, 0);
/// let grid = PixelGrid::new(2, 2, vec![red, red, green, red]).unwrap();
///
/// let table = LutGenerator::new().target("oled_data").generate(&grid).unwrap();
/// assert_eq!(table.lines(), &[
///     "if (((pixel_index >= 0) && (pixel_index <= 1)) || pixel_index == 3) oled_data = 16'b1111100000000000;",
///     "else if (pixel_index == 2) oled_data = 16'b0000011111100000;",
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct LutGenerator {
    target: String,
    index_signal: String,
}

impl Default for LutGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LutGenerator {
    /// Generator with the default `oled_data` / `pixel_index` names.
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            index_signal: DEFAULT_INDEX_SIGNAL.to_string(),
        }
    }

    /// Set the variable each statement assigns.
    #[inline]
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.target = name.into();
        self
    }

    /// Set the signal each condition tests.
    #[inline]
    pub fn index_signal(mut self, name: impl Into<String>) -> Self {
        self.index_signal = name.into();
        self
    }

    /// Validate the names and build the emitter.
    pub fn emitter(&self) -> Result<Emitter, LutError> {
        Ok(Emitter::new(
            self.target.clone(),
            self.index_signal.clone(),
        )?)
    }

    /// Group, compress and emit `grid`.
    pub fn generate(&self, grid: &PixelGrid) -> Result<LookupTable, LutError> {
        let emitter = self.emitter()?;
        let groups = ColorGroups::from_grid(grid);
        let statements = emitter.statements(&groups);
        let lines = statements.iter().map(|s| emitter.render(s)).collect();
        Ok(LookupTable::new(
            statements,
            lines,
            grid.width(),
            grid.height(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::emit::EmitError;

    #[test]
    fn test_generator_reusable() {
        let generator = LutGenerator::new();
        let a = PixelGrid::new(1, 1, vec![Rgb::new(0, 0, 0)]).unwrap();
        let b = PixelGrid::new(1, 2, vec![Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)]).unwrap();

        assert_eq!(generator.generate(&a).unwrap().color_count(), 1);
        assert_eq!(generator.generate(&b).unwrap().color_count(), 2);
    }

    #[test]
    fn test_invalid_target_is_reported() {
        let grid = PixelGrid::new(1, 1, vec![Rgb::new(0, 0, 0)]).unwrap();
        let err = LutGenerator::new().target("").generate(&grid).unwrap_err();
        assert!(matches!(
            err,
            LutError::Emit(EmitError::InvalidIdentifier { role: "target", .. })
        ));
        assert_eq!(
            err.to_string(),
            "emit error: invalid target name \"\": not a Verilog identifier"
        );
    }

    #[test]
    fn test_table_records_dimensions() {
        let grid = PixelGrid::from_fn(4, 3, |_, _| Rgb::new(10, 10, 10)).unwrap();
        let table = LutGenerator::new().generate(&grid).unwrap();
        assert_eq!(table.width(), 4);
        assert_eq!(table.height(), 3);
        assert_eq!(table.condition_count(), 1);
    }
}
