//! Error types for OBJ I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while reading or writing OBJ data.
#[derive(Debug, Error)]
pub enum ObjError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A recognized line could not be parsed.
    #[error("invalid content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// A face references a vertex that does not exist.
    #[error("line {line}: face index {index} out of range (file has {vertex_count} vertices)")]
    IndexOutOfRange {
        /// 1-based index as written in the file.
        index: i64,
        /// Number of vertices in the file.
        vertex_count: usize,
        /// 1-based line number of the face.
        line: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl ObjError {
    /// Create an `InvalidContent` error for the given line.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}
