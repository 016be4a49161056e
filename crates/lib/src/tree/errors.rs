//! Error types for tree operations.
//!
//! Lookup absence is deliberately not represented here: a missing key, an
//! out-of-range index, or a path that runs through a scalar is reported as
//! `None`/`false` by the read surface, never as an error. These variants
//! cover the cases that are genuinely illegal.

use thiserror::Error;

/// Structured error types for tree operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// Construction was handed non-container data at the top level
    #[error("invalid input: expected a mapping or sequence at the top level, found {found}")]
    InvalidInput { found: String },

    /// A write path traverses through an existing scalar as if it were a container
    #[error("path conflict at '{path}': segment '{segment}' holds a scalar, not a container")]
    PathConflict { path: String, segment: String },

    /// An invalid path was given to a write operation
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// Type mismatch during value conversion
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl TreeError {
    /// Check if this error is related to invalid construction input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TreeError::InvalidInput { .. })
    }

    /// Check if this error is related to a write colliding with a scalar
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, TreeError::PathConflict { .. })
    }

    /// Check if this error is related to an invalid path
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, TreeError::InvalidPath { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::PathConflict { path, .. } | TreeError::InvalidPath { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
