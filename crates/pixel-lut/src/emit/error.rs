//! Error types for the Verilog emitter

use std::fmt;

/// Error type for emitter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// Signal name is not a legal Verilog simple identifier
    InvalidIdentifier {
        /// Which name was rejected ("target" or "index signal")
        role: &'static str,
        /// The rejected name
        name: String,
    },
    /// Target and index signal are the same name
    NameCollision(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::InvalidIdentifier { role, name } => {
                write!(f, "invalid {} name {:?}: not a Verilog identifier", role, name)
            }
            EmitError::NameCollision(name) => {
                write!(f, "target and index signal are both named {:?}", name)
            }
        }
    }
}

impl std::error::Error for EmitError {}
