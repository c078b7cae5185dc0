//! Analytic circle evaluation.

use nalgebra::{Point3, Vector3};

use crate::error::CurveError;
use crate::sample::CurvePoint;
use crate::Result;

/// Evaluate a circle of the given radius in the `z = 0` plane.
///
/// Produces `steps + 1` samples counterclockwise about +Z, with the first
/// and last samples coincident (a closed loop, convenient as a sweep path).
/// The frame is analytic: tangent from the first derivative, normal from the
/// second (pointing at the center), binormal fixed at world-Z.
///
/// # Errors
///
/// [`CurveError::InvalidRadius`] unless `radius` is positive and finite;
/// [`CurveError::InvalidStepCount`] when `steps` is zero.
///
/// # Example
///
/// ```
/// use curve_eval::eval_circle;
///
/// let circle = eval_circle(2.0, 32).unwrap();
/// assert_eq!(circle.len(), 33);
/// for sample in &circle {
///     assert!((sample.position.coords.norm() - 2.0).abs() < 1e-12);
/// }
/// ```
pub fn eval_circle(radius: f64, steps: usize) -> Result<Vec<CurvePoint>> {
    if radius <= 0.0 || !radius.is_finite() {
        return Err(CurveError::InvalidRadius(radius));
    }
    if steps == 0 {
        return Err(CurveError::InvalidStepCount(steps));
    }

    let mut samples = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (steps as f64);
        let (sin, cos) = theta.sin_cos();

        samples.push(CurvePoint::new(
            Point3::new(radius * cos, radius * sin, 0.0),
            Vector3::new(-sin, cos, 0.0),
            Vector3::new(-cos, -sin, 0.0),
            Vector3::z(),
        ));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_is_closed() {
        let circle = eval_circle(1.5, 20).expect("circle");
        assert_eq!(circle.len(), 21);
        assert_relative_eq!(
            circle[0].position,
            circle[20].position,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_circle_radius_holds_everywhere() {
        let circle = eval_circle(3.0, 17).expect("circle");
        for sample in &circle {
            assert_relative_eq!(sample.position.coords.norm(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_circle_frames_orthonormal() {
        let circle = eval_circle(1.0, 8).expect("circle");
        for sample in &circle {
            assert!(sample.is_orthonormal(1e-12));
            assert_relative_eq!(sample.binormal, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_circle_rejects_bad_inputs() {
        assert!(matches!(
            eval_circle(0.0, 8),
            Err(CurveError::InvalidRadius(_))
        ));
        assert!(matches!(
            eval_circle(-1.0, 8),
            Err(CurveError::InvalidRadius(_))
        ));
        assert!(matches!(
            eval_circle(f64::NAN, 8),
            Err(CurveError::InvalidRadius(_))
        ));
        assert!(matches!(
            eval_circle(1.0, 0),
            Err(CurveError::InvalidStepCount(0))
        ));
    }
}
