//! Error types for skeletons and skinning.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for skinning operations.
pub type SkinResult<T> = Result<T, SkinError>;

/// Errors that can occur while building or driving a skinned model.
#[derive(Debug, Error)]
pub enum SkinError {
    /// A joint's accumulated rest-pose world transform is not invertible.
    #[error("joint {joint} has a singular bind transform")]
    SingularTransform {
        /// Arena index of the degenerate joint.
        joint: usize,
    },

    /// A joint or attachment index is out of range.
    #[error("index {index} out of range ({count} available)")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of valid entries.
        count: usize,
    },

    /// The hierarchy has no root joint.
    #[error("skeleton has no root joint")]
    MissingRoot,

    /// More than one joint claims to be the root.
    #[error("joint {joint} is a second root; the hierarchy must have exactly one")]
    MultipleRoots {
        /// Arena index of the extra root.
        joint: usize,
    },

    /// A joint references a parent at or after its own position.
    #[error("joint {joint} appears before its parent; ancestors must come first")]
    ParentAfterChild {
        /// Arena index of the misplaced joint.
        joint: usize,
    },

    /// Bind transforms have not been computed yet.
    #[error("bind transforms must be computed before posing the skeleton")]
    BindNotComputed,

    /// Bind transforms were already computed; the bind pose is fixed.
    #[error("bind transforms were already computed")]
    BindAlreadyComputed,

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A line in a skeleton or attachment file could not be parsed.
    #[error("invalid content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// Error from the OBJ mesh loader.
    #[error(transparent)]
    Obj(#[from] mesh_obj::ObjError),

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

impl SkinError {
    /// Create an `InvalidContent` error for the given line.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}
