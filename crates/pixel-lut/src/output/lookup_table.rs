//! LookupTable: the rendered result of the generator.

use std::fmt;

use crate::emit::Statement;

/// A generated if/else-if chain together with the grid it came from.
///
/// The rendered lines are canonical; `Display` joins them with `\n` and adds
/// no trailing newline.
///
/// # Example
///
/// ```
/// use pixel_lut::{LutGenerator, PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(2, 1, vec![Rgb::new(255, 255, 255); 2]).unwrap();
/// let table = LutGenerator::new().generate(&grid).unwrap();
///
/// assert_eq!(table.color_count(), 1);
/// assert_eq!(
///     table.to_string(),
///     "if (((pixel_index >= 0) && (pixel_index <= 1))) oled_data = 16'b1111111111111111;"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    /// Statements in emission order.
    statements: Vec<Statement>,
    /// One rendered line per statement.
    lines: Vec<String>,
    /// Source grid width in pixels.
    width: usize,
    /// Source grid height in pixels.
    height: usize,
}

impl LookupTable {
    /// Create a table from statements and their rendered lines.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that there is one line per statement.
    pub fn new(statements: Vec<Statement>, lines: Vec<String>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            statements.len(),
            lines.len(),
            "statement count ({}) must match line count ({})",
            statements.len(),
            lines.len()
        );
        Self {
            statements,
            lines,
            width,
            height,
        }
    }

    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of distinct quantized colors, which is also the line count.
    #[inline]
    pub fn color_count(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of conditions across all statements.
    pub fn condition_count(&self) -> usize {
        self.statements.iter().map(|s| s.conditions.len()).sum()
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
