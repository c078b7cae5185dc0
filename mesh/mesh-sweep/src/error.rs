//! Error types for swept-surface construction.

use thiserror::Error;

/// Errors that can occur while building a swept surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// The profile curve leaves the `z = 0` plane.
    #[error("profile sample {index} is not flat in the z=0 plane")]
    NonPlanarProfile {
        /// First offending profile sample.
        index: usize,
    },

    /// The profile has no samples.
    #[error("profile curve is empty")]
    EmptyProfile,

    /// The sweep path has no samples.
    #[error("sweep path is empty")]
    EmptyPath,

    /// Too few revolution steps to enclose a volume.
    #[error("too few steps: need at least {min}, got {actual}")]
    TooFewSteps {
        /// Minimum usable step count.
        min: usize,
        /// Actual step count requested.
        actual: usize,
    },
}
