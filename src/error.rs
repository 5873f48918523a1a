//! Error types for rosary configuration and checked graph access.

use core::fmt;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, RosaryError>;

/// Errors that can occur while configuring a rosary or addressing its nodes.
///
/// Runtime conditions (unknown highlight ids, empty picks, degenerate
/// geometry) are never reported through this type.
#[derive(Debug, Clone, PartialEq)]
pub enum RosaryError {
    /// Link stiffness must be in [0, 1].
    InvalidStiffness,
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// A numeric knob is non-finite or out of its allowed range.
    InvalidParameter { name: &'static str },
    /// Node index is out of bounds.
    NodeOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for RosaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosaryError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            RosaryError::InvalidIterations => write!(f, "iteration count must be at least 1"),
            RosaryError::InvalidParameter { name } => {
                write!(f, "configuration value `{}` is out of range", name)
            }
            RosaryError::NodeOutOfBounds { index, count } => {
                write!(f, "node index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for RosaryError {}
