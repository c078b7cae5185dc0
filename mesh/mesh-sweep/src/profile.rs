//! Profile curve preconditions.

use curve_eval::CurvePoint;

use crate::error::SweepError;

/// Components beyond this magnitude count as leaving the plane.
const FLAT_EPS: f64 = 1e-9;

/// Both builders only handle profiles flat in the `z = 0` plane: the
/// position, tangent, and normal of every sample must have a (near-)zero z
/// component. Returns the first offending sample.
pub(crate) fn ensure_flat(profile: &[CurvePoint]) -> Result<(), SweepError> {
    if profile.is_empty() {
        return Err(SweepError::EmptyProfile);
    }
    for (index, sample) in profile.iter().enumerate() {
        if sample.position.z.abs() > FLAT_EPS
            || sample.tangent.z.abs() > FLAT_EPS
            || sample.normal.z.abs() > FLAT_EPS
        {
            return Err(SweepError::NonPlanarProfile { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn flat_sample(x: f64, y: f64) -> CurvePoint {
        CurvePoint::new(
            Point3::new(x, y, 0.0),
            Vector3::y(),
            Vector3::x(),
            -Vector3::z(),
        )
    }

    #[test]
    fn test_flat_profile_accepted() {
        let profile = vec![flat_sample(1.0, 0.0), flat_sample(1.0, 1.0)];
        assert!(ensure_flat(&profile).is_ok());
    }

    #[test]
    fn test_out_of_plane_position_rejected() {
        let mut profile = vec![flat_sample(1.0, 0.0), flat_sample(1.0, 1.0)];
        profile[1].position.z = 0.5;
        assert_eq!(
            ensure_flat(&profile),
            Err(SweepError::NonPlanarProfile { index: 1 })
        );
    }

    #[test]
    fn test_out_of_plane_normal_rejected() {
        let mut profile = vec![flat_sample(1.0, 0.0)];
        profile[0].normal = Vector3::z();
        assert!(ensure_flat(&profile).is_err());
    }

    #[test]
    fn test_empty_profile_rejected() {
        assert_eq!(ensure_flat(&[]), Err(SweepError::EmptyProfile));
    }
}
