//! Error types for curve evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// The control polygon has the wrong number of points for the curve kind.
    #[error("invalid control point count {actual}: need {requirement}")]
    InvalidControlPointCount {
        /// Actual number of points provided.
        actual: usize,
        /// Human-readable statement of the requirement that was violated.
        requirement: &'static str,
    },

    /// Radius must be positive and finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// At least one sample per segment is required.
    #[error("invalid step count: {0} (must be at least 1)")]
    InvalidStepCount(usize),
}

impl CurveError {
    /// Check if this is a control-point-count error.
    #[must_use]
    pub fn is_invalid_control_point_count(&self) -> bool {
        matches!(self, Self::InvalidControlPointCount { .. })
    }
}
