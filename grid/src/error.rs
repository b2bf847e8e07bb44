//! Error types for grid operations.

use std::fmt;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while addressing or decoding a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid extent.
    OutOfBounds {
        /// The requested x coordinate.
        x: i64,
        /// The requested y coordinate.
        y: i64,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },

    /// Cell buffer length does not match the declared dimensions.
    DimensionMismatch {
        /// Expected cell count (`width * height`).
        expected: usize,
        /// Actual cell count found.
        actual: usize,
    },

    /// Encoded blob is not valid Base64.
    MalformedEncoding {
        /// Decoder failure description.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "coordinate ({x}, {y}) outside {width}x{height} grid")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} cells but buffer holds {actual}")
            }
            Self::MalformedEncoding { reason } => {
                write!(f, "malformed blob encoding: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}
