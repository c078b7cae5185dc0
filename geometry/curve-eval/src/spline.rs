//! Piecewise cubic spline evaluation by basis matrices.
//!
//! Both supported curve families are evaluated the same way: slide a window
//! of 4 control points along the polygon, multiply the geometry matrix by
//! the family's fixed 4x4 basis matrix and the power basis `[1, t, t², t³]`,
//! and sample `t` over the half-open interval `[0, 1)`. Bézier windows
//! advance by 3 (segments share endpoints); B-spline windows advance by 1,
//! using the uniform cubic B-spline basis (the Bézier basis change divided
//! by 6).

use nalgebra::{Matrix3x4, Matrix4, Point3, Vector4};

use crate::error::CurveError;
use crate::sample::{bootstrap_binormal, propagate_frame, CurvePoint};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Curve family selector for [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplineKind {
    /// Chained cubic Bézier segments (3n+1 control points).
    Bezier,
    /// Uniform cubic B-spline (4 or more control points).
    BSpline,
}

/// Bernstein basis for a cubic Bézier segment.
fn bezier_basis() -> Matrix4<f64> {
    Matrix4::new(
        1.0, -3.0, 3.0, -1.0,
        0.0, 3.0, -6.0, 3.0,
        0.0, 0.0, 3.0, -3.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Uniform cubic B-spline basis, expressed in the power basis.
fn bspline_basis() -> Matrix4<f64> {
    Matrix4::new(
        1.0, -3.0, 3.0, -1.0,
        4.0, 0.0, -6.0, 3.0,
        1.0, 3.0, 3.0, -3.0,
        0.0, 0.0, 0.0, 1.0,
    ) / 6.0
}

/// Evaluate a chain of cubic Bézier segments.
///
/// Requires `3n + 1` control points (`n >= 1`): consecutive segments share
/// their endpoint. Produces `steps` samples per segment over `t ∈ [0, 1)`;
/// the chain's final endpoint itself is not emitted.
///
/// # Errors
///
/// [`CurveError::InvalidControlPointCount`] unless
/// `control.len() >= 4 && (control.len() - 1) % 3 == 0`;
/// [`CurveError::InvalidStepCount`] when `steps` is zero.
pub fn eval_bezier(control: &[Point3<f64>], steps: usize) -> Result<Vec<CurvePoint>> {
    if control.len() < 4 || (control.len() - 1) % 3 != 0 {
        return Err(CurveError::InvalidControlPointCount {
            actual: control.len(),
            requirement: "3n+1 control points with n >= 1",
        });
    }
    eval_windows(control, &bezier_basis(), 3, steps)
}

/// Evaluate a uniform cubic B-spline.
///
/// Requires at least 4 control points. Every consecutive 4-point window is
/// one segment (windows advance by 1), converted to Bézier form through the
/// fixed basis change; `steps` samples per segment over `t ∈ [0, 1)`.
///
/// # Errors
///
/// [`CurveError::InvalidControlPointCount`] with fewer than 4 points;
/// [`CurveError::InvalidStepCount`] when `steps` is zero.
pub fn eval_bspline(control: &[Point3<f64>], steps: usize) -> Result<Vec<CurvePoint>> {
    if control.len() < 4 {
        return Err(CurveError::InvalidControlPointCount {
            actual: control.len(),
            requirement: "at least 4 control points",
        });
    }
    eval_windows(control, &bspline_basis(), 1, steps)
}

/// Evaluate a control polygon as the given curve family.
pub fn evaluate(
    control: &[Point3<f64>],
    steps: usize,
    kind: SplineKind,
) -> Result<Vec<CurvePoint>> {
    match kind {
        SplineKind::Bezier => eval_bezier(control, steps),
        SplineKind::BSpline => eval_bspline(control, steps),
    }
}

/// Shared evaluation loop over 4-point windows.
///
/// The binormal is threaded through the whole curve: bootstrapped once at
/// the very first sample, then propagated sample-to-sample, including across
/// window boundaries, so the frame rotates as little as possible about the
/// tangent.
fn eval_windows(
    control: &[Point3<f64>],
    basis: &Matrix4<f64>,
    window_stride: usize,
    steps: usize,
) -> Result<Vec<CurvePoint>> {
    if steps == 0 {
        return Err(CurveError::InvalidStepCount(steps));
    }

    let segments = (control.len() - 4) / window_stride + 1;
    let mut samples = Vec::with_capacity(segments * steps);
    let mut prev_binormal: Option<nalgebra::Vector3<f64>> = None;
    let mut prev_tangent = nalgebra::Vector3::x();

    let mut start = 0;
    while start + 4 <= control.len() {
        let geometry = Matrix3x4::from_columns(&[
            control[start].coords,
            control[start + 1].coords,
            control[start + 2].coords,
            control[start + 3].coords,
        ]);

        for i in 0..steps {
            let t = i as f64 / steps as f64;
            let power = Vector4::new(1.0, t, t * t, t * t * t);
            let d_power = Vector4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t);

            let position = Point3::from(geometry * (basis * power));
            let raw_tangent = geometry * (basis * d_power);

            // A degenerate control polygon (coincident points) can zero the
            // derivative; carry the previous direction rather than emit NaN.
            let tangent = raw_tangent
                .try_normalize(1e-12)
                .unwrap_or(prev_tangent);
            prev_tangent = tangent;

            let binormal = match prev_binormal {
                Some(b) => b,
                None => bootstrap_binormal(&tangent),
            };
            let sample = propagate_frame(position, tangent, &binormal);
            prev_binormal = Some(sample.binormal);
            samples.push(sample);
        }

        start += window_stride;
    }

    Ok(samples)
}
