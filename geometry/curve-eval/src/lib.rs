//! Discretized parametric curve evaluation for swept-surface modeling.
//!
//! This crate evaluates piecewise cubic curves into sampled point sequences
//! carrying a full orthonormal frame at every sample:
//!
//! - [`eval_bezier`] - Chains of cubic Bézier segments sharing endpoints
//! - [`eval_bspline`] - Uniform cubic B-splines, evaluated by basis change
//! - [`eval_circle`] - Analytic circle, useful as a closed sweep path
//!
//! # Frames
//!
//! Each [`CurvePoint`] carries position, unit tangent, unit normal, and unit
//! binormal. The normal/binormal pair is *propagated* from sample to sample
//! (a rotation-minimizing update seeded from a world-Z guess) rather than
//! recomputed from the second derivative, so the frame stays well-defined
//! through inflection points and straight runs where curvature vanishes.
//!
//! # Example
//!
//! ```
//! use curve_eval::eval_bezier;
//! use nalgebra::Point3;
//!
//! let control = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 2.0, 0.0),
//!     Point3::new(3.0, 2.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//! ];
//!
//! let curve = eval_bezier(&control, 16).unwrap();
//! assert_eq!(curve.len(), 16);
//! for sample in &curve {
//!     assert!(sample.is_orthonormal(1e-6));
//! }
//! ```
//!
//! # Preconditions
//!
//! Input control polygons are assumed G1-continuous across segment joins.
//! Where the tangent direction jumps, the propagated frame is still produced
//! but is not guaranteed smooth; this is a documented caller obligation, not
//! a runtime check.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::suboptimal_flops,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

mod circle;
mod error;
mod sample;
mod spline;

pub use circle::eval_circle;
pub use error::CurveError;
pub use sample::CurvePoint;
pub use spline::{evaluate, eval_bezier, eval_bspline, SplineKind};

// Re-export nalgebra types for convenience, as the rest of the workspace does.
pub use nalgebra::{Point3, Vector3};

/// Result type for curve evaluation.
pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;

    fn s_curve() -> Vec<Point3<f64>> {
        // Two cubic segments with a shared endpoint, G1 at the join.
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 1.0),
            Point3::new(3.0, 0.0, 1.0),
            Point3::new(4.0, -2.0, 1.0),
            Point3::new(5.0, -2.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_frames_orthonormal_across_kinds() {
        let bezier = eval_bezier(&s_curve(), 24).expect("bezier");
        let bspline = eval_bspline(&s_curve(), 24).expect("bspline");

        for sample in bezier.iter().chain(bspline.iter()) {
            assert!(sample.is_orthonormal(1e-4));
        }
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let control = s_curve();
        let direct = eval_bezier(&control, 8).expect("direct");
        let dispatched = evaluate(&control, 8, SplineKind::Bezier).expect("dispatch");

        assert_eq!(direct.len(), dispatched.len());
        for (a, b) in direct.iter().zip(dispatched.iter()) {
            assert_relative_eq!(a.position, b.position, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_frame_propagates_continuously() {
        // Consecutive normals should never flip sign on a smooth curve.
        let curve = eval_bspline(&s_curve(), 32).expect("bspline");
        for pair in curve.windows(2) {
            assert!(pair[0].normal.dot(&pair[1].normal) > 0.0);
        }
    }
}
