//! Sampled curve points and frame propagation.

use nalgebra::{Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cross products below this magnitude are treated as parallel.
const PARALLEL_EPS: f64 = 1e-8;

/// A single sample on a discretized curve.
///
/// The `{tangent, normal, binormal}` triple is mutually orthonormal and
/// right-handed (`binormal = tangent × normal`). The tangent is the
/// normalized first derivative of the curve at the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// Position on the curve.
    pub position: Point3<f64>,
    /// Unit tangent (direction of increasing parameter).
    pub tangent: Vector3<f64>,
    /// Unit normal, perpendicular to the tangent.
    pub normal: Vector3<f64>,
    /// Unit binormal, `tangent × normal`.
    pub binormal: Vector3<f64>,
}

impl CurvePoint {
    /// Create a sample from its components.
    ///
    /// The vectors are assumed orthonormal; use [`Self::is_orthonormal`] to
    /// verify when the source is untrusted.
    #[must_use]
    pub fn new(
        position: Point3<f64>,
        tangent: Vector3<f64>,
        normal: Vector3<f64>,
        binormal: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// The 4x4 rigid frame with columns `[normal, binormal, tangent, position]`.
    ///
    /// Maps local profile coordinates (x along the normal, y along the
    /// binormal, z along the tangent) into world space. This is the frame
    /// layout the swept-surface builder multiplies through.
    #[must_use]
    pub fn frame_matrix(&self) -> Matrix4<f64> {
        Matrix4::new(
            self.normal.x, self.binormal.x, self.tangent.x, self.position.x,
            self.normal.y, self.binormal.y, self.tangent.y, self.position.y,
            self.normal.z, self.binormal.z, self.tangent.z, self.position.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Check that the frame is orthonormal within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        (self.tangent.norm() - 1.0).abs() < tolerance
            && (self.normal.norm() - 1.0).abs() < tolerance
            && (self.binormal.norm() - 1.0).abs() < tolerance
            && self.tangent.dot(&self.normal).abs() < tolerance
            && self.tangent.dot(&self.binormal).abs() < tolerance
            && self.normal.dot(&self.binormal).abs() < tolerance
    }
}

/// Pick an initial binormal guess that is not parallel to `tangent`.
///
/// Starts from world-Z; while the guess is parallel to the tangent, adds one
/// unit to a coordinate axis (cycling x, y, z) and renormalizes. Guarantees a
/// valid starting frame even when the first tangent is axis-aligned.
pub(crate) fn bootstrap_binormal(tangent: &Vector3<f64>) -> Vector3<f64> {
    let mut guess = Vector3::z();
    let mut axis = 0;
    while guess.cross(tangent).norm() < PARALLEL_EPS {
        guess[axis % 3] += 1.0;
        guess = guess.normalize();
        axis += 1;
    }
    guess
}

/// Derive the sample frame from the previous binormal and the new tangent.
///
/// `normal = normalize(prev_binormal × tangent)`, then the binormal is
/// re-orthogonalized as `tangent × normal`. Returns the completed sample;
/// callers thread the returned binormal into the next derivation.
pub(crate) fn propagate_frame(
    position: Point3<f64>,
    tangent: Vector3<f64>,
    prev_binormal: &Vector3<f64>,
) -> CurvePoint {
    let normal = prev_binormal.cross(&tangent).normalize();
    let binormal = tangent.cross(&normal).normalize();
    CurvePoint::new(position, tangent, normal, binormal)
}
