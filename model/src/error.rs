//! Error types for map model operations.

use std::fmt;

use grid::GridError;

/// Result type for map model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or mutating a map model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Grid addressing or blob decoding error.
    Grid(GridError),

    /// Object already holds collision claims in another map's mask.
    ForeignObject {
        /// Name of the offending object.
        name: String,
    },

    /// Object footprint has a zero width or height.
    EmptyFootprint {
        /// Name of the offending object.
        name: String,
    },

    /// Object index past the end of the object list.
    NoSuchObject {
        /// The requested index.
        index: usize,
    },

    /// Wire record could not be parsed or written as JSON.
    Json {
        /// Parser failure description.
        reason: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "grid error: {err}"),
            Self::ForeignObject { name } => {
                write!(f, "object '{name}' already belongs to another map")
            }
            Self::EmptyFootprint { name } => {
                write!(f, "object '{name}' has a zero-sized footprint")
            }
            Self::NoSuchObject { index } => {
                write!(f, "no object at index {index}")
            }
            Self::Json { reason } => write!(f, "wire record error: {reason}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ModelError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            reason: err.to_string(),
        }
    }
}
