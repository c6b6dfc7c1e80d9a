//! Verilog if/else-if emission.
//!
//! One statement per color group, in group order:
//!
//! ```text
//! if (((pixel_index >= 0) && (pixel_index <= 1)) || pixel_index == 3) oled_data = 16'b1111100000000000;
//! else if (pixel_index == 2) oled_data = 16'b0000011111100000;
//! ```
//!
//! No trailing `else` is emitted. An index that matches no statement leaves
//! the target unassigned; every index of a grid belongs to some group, so
//! this cannot happen for generated tables.

mod error;
mod identifier;

pub use error::EmitError;
pub use identifier::is_identifier;

use crate::color::ColorCode;
use crate::group::ColorGroups;
use crate::ranges::{compress, Condition};

/// Default assignment target.
pub const DEFAULT_TARGET: &str = "oled_data";
/// Default index signal tested by each condition.
pub const DEFAULT_INDEX_SIGNAL: &str = "pixel_index";

/// Leading keyword of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    If,
    ElseIf,
}

impl Branch {
    /// `If` for the first statement, `ElseIf` after.
    #[inline]
    pub fn for_position(position: usize) -> Self {
        if position == 0 {
            Branch::If
        } else {
            Branch::ElseIf
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Branch::If => "if",
            Branch::ElseIf => "else if",
        }
    }
}

/// One conditional assignment, before names are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub branch: Branch,
    pub code: ColorCode,
    /// Ascending, non-overlapping; never empty.
    pub conditions: Vec<Condition>,
}

/// Renders color groups as conditional assignments.
///
/// # Example
///
/// ```
/// use pixel_lut::{ColorGroups, Emitter, PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(1, 1, vec![Rgb::new(0, 0, 0)]).unwrap();
/// let groups = ColorGroups::from_grid(&grid);
///
/// let lines = Emitter::default().lines(&groups);
/// assert_eq!(lines, vec!["if (pixel_index == 0) oled_data = 16'b0000000000000000;"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    target: String,
    index_signal: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            index_signal: DEFAULT_INDEX_SIGNAL.to_string(),
        }
    }
}

impl Emitter {
    /// Create an emitter with custom signal names.
    ///
    /// Both names must be Verilog identifiers and must differ.
    pub fn new(
        target: impl Into<String>,
        index_signal: impl Into<String>,
    ) -> Result<Self, EmitError> {
        let target = target.into();
        let index_signal = index_signal.into();
        if !is_identifier(&target) {
            return Err(EmitError::InvalidIdentifier {
                role: "target",
                name: target,
            });
        }
        if !is_identifier(&index_signal) {
            return Err(EmitError::InvalidIdentifier {
                role: "index signal",
                name: index_signal,
            });
        }
        if target == index_signal {
            return Err(EmitError::NameCollision(target));
        }
        Ok(Self {
            target,
            index_signal,
        })
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn index_signal(&self) -> &str {
        &self.index_signal
    }

    /// Compress every group and tag it with its branch keyword.
    pub fn statements(&self, groups: &ColorGroups) -> Vec<Statement> {
        groups
            .iter()
            .enumerate()
            .map(|(position, group)| Statement {
                branch: Branch::for_position(position),
                code: group.code(),
                conditions: compress(group.indices()),
            })
            .collect()
    }

    /// `pixel_index == N` or `((pixel_index >= LOW) && (pixel_index <= HIGH))`.
    pub fn render_condition(&self, condition: &Condition) -> String {
        let signal = &self.index_signal;
        match *condition {
            Condition::Equals(i) => format!("{signal} == {i}"),
            Condition::Range { low, high } => {
                format!("(({signal} >= {low}) && ({signal} <= {high}))")
            }
        }
    }

    /// Render one statement as a single line.
    pub fn render(&self, statement: &Statement) -> String {
        let disjunction = statement
            .conditions
            .iter()
            .map(|c| self.render_condition(c))
            .collect::<Vec<_>>()
            .join(" || ");
        format!(
            "{} ({}) {} = {};",
            statement.branch.keyword(),
            disjunction,
            self.target,
            statement.code
        )
    }

    /// Render all groups, one line each.
    pub fn lines(&self, groups: &ColorGroups) -> Vec<String> {
        self.statements(groups)
            .iter()
            .map(|s| self.render(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_equals() {
        let emitter = Emitter::default();
        assert_eq!(
            emitter.render_condition(&Condition::Equals(7)),
            "pixel_index == 7"
        );
    }

    #[test]
    fn test_render_range() {
        let emitter = Emitter::default();
        assert_eq!(
            emitter.render_condition(&Condition::Range { low: 10, high: 95 }),
            "((pixel_index >= 10) && (pixel_index <= 95))"
        );
    }

    #[test]
    fn test_render_statement_branches() {
        let emitter = Emitter::default();
        let mut statement = Statement {
            branch: Branch::If,
            code: ColorCode::WHITE,
            conditions: vec![Condition::Range { low: 0, high: 1 }, Condition::Equals(3)],
        };
        assert_eq!(
            emitter.render(&statement),
            "if (((pixel_index >= 0) && (pixel_index <= 1)) || pixel_index == 3) oled_data = 16'b1111111111111111;"
        );

        statement.branch = Branch::ElseIf;
        assert!(emitter.render(&statement).starts_with("else if (("));
    }

    #[test]
    fn test_custom_names() {
        let emitter = Emitter::new("lcd_rgb", "addr").unwrap();
        let statement = Statement {
            branch: Branch::If,
            code: ColorCode::BLACK,
            conditions: vec![Condition::Equals(0)],
        };
        assert_eq!(
            emitter.render(&statement),
            "if (addr == 0) lcd_rgb = 16'b0000000000000000;"
        );
    }

    #[test]
    fn test_rejects_bad_names() {
        assert_eq!(
            Emitter::new("oled data", "pixel_index"),
            Err(EmitError::InvalidIdentifier {
                role: "target",
                name: "oled data".to_string()
            })
        );
        assert!(matches!(
            Emitter::new("oled_data", "1idx"),
            Err(EmitError::InvalidIdentifier {
                role: "index signal",
                ..
            })
        ));
        assert_eq!(
            Emitter::new("x", "x"),
            Err(EmitError::NameCollision("x".to_string()))
        );
        assert!(matches!(
            Emitter::new("and", "pixel_index"),
            Err(EmitError::InvalidIdentifier { role: "target", .. })
        ));
        assert!(matches!(
            Emitter::new("oled_data", "posedge"),
            Err(EmitError::InvalidIdentifier {
                role: "index signal",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_groups_emit_nothing() {
        assert!(Emitter::default().lines(&ColorGroups::new()).is_empty());
    }

    #[test]
    fn test_branch_for_position() {
        assert_eq!(Branch::for_position(0), Branch::If);
        assert_eq!(Branch::for_position(1), Branch::ElseIf);
        assert_eq!(Branch::for_position(99).keyword(), "else if");
    }
}
