//! Surface of revolution.

use curve_eval::CurvePoint;
use nalgebra::{Rotation3, Vector3};
use surface_types::Surface;

use crate::error::SweepError;
use crate::faces::grid_faces;
use crate::profile::ensure_flat;
use crate::Result;

/// Revolve a flat profile curve about the +Y axis.
///
/// For each of `steps` rotation stops at angle `i * 2π / steps`, every
/// profile sample is rotated into place. Vertex normals follow the
/// inverse-transpose rule for transforming normals and are negated so they
/// point out of the surface. Faces wrap around the revolution; the two
/// profile endpoints stay open (a line profile yields an uncapped cylinder).
///
/// # Errors
///
/// [`SweepError::NonPlanarProfile`] if any profile sample leaves `z = 0`;
/// [`SweepError::EmptyProfile`] for an empty profile;
/// [`SweepError::TooFewSteps`] for fewer than 3 steps.
pub fn revolve(profile: &[CurvePoint], steps: usize) -> Result<Surface> {
    ensure_flat(profile)?;
    if steps < 3 {
        return Err(SweepError::TooFewSteps {
            min: 3,
            actual: steps,
        });
    }

    let mut surface = Surface::with_capacity(steps * profile.len(), steps * profile.len() * 2);

    for i in 0..steps {
        let angle = (i as f64) * 2.0 * std::f64::consts::PI / (steps as f64);
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        // Inverse-transpose for normal transformation. For a pure rotation
        // this equals the rotation itself, but the rule is kept explicit so
        // the construction survives a change of mapping.
        let normal_map = rotation.inverse().matrix().transpose();

        for sample in profile {
            surface.vertices.push(rotation * sample.position);
            surface.normals.push(-(normal_map * sample.normal));
        }
    }

    surface.faces = grid_faces(steps, profile.len(), false);

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    /// A straight vertical profile at x = 1, normals pointing at the Y axis.
    fn line_profile(samples: usize) -> Vec<CurvePoint> {
        (0..samples)
            .map(|i| {
                CurvePoint::new(
                    Point3::new(1.0, i as f64, 0.0),
                    Vector3::y(),
                    Vector3::new(-1.0, 0.0, 0.0),
                    Vector3::z(),
                )
            })
            .collect()
    }

    #[test]
    fn test_vertex_and_face_counts() {
        let profile = line_profile(5);
        let surface = revolve(&profile, 12).expect("surface");

        assert_eq!(surface.vertex_count(), 12 * 5);
        assert_eq!(surface.face_count(), 12 * 4 * 2);
        assert!(surface.validate().is_ok());
    }

    #[test]
    fn test_cylinder_radius_preserved() {
        let profile = line_profile(3);
        let surface = revolve(&profile, 16).expect("surface");

        for vertex in &surface.vertices {
            let radial = (vertex.x * vertex.x + vertex.z * vertex.z).sqrt();
            assert_relative_eq!(radial, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normals_point_outward() {
        // Profile normals aim at the axis; the builder negates them so every
        // output normal points away from the Y axis.
        let profile = line_profile(3);
        let surface = revolve(&profile, 8).expect("surface");

        for (vertex, normal) in surface.vertices.iter().zip(&surface.normals) {
            let radial = Vector3::new(vertex.x, 0.0, vertex.z);
            assert!(normal.dot(&radial) > 0.0);
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_first_stop_is_unrotated() {
        let profile = line_profile(2);
        let surface = revolve(&profile, 4).expect("surface");
        assert_relative_eq!(
            surface.vertices[0],
            Point3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            surface.normals[0],
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_non_planar_profile_rejected() {
        let mut profile = line_profile(3);
        profile[2].position.z = 0.1;
        assert_eq!(
            revolve(&profile, 8),
            Err(SweepError::NonPlanarProfile { index: 2 })
        );
    }

    #[test]
    fn test_too_few_steps_rejected() {
        let profile = line_profile(3);
        assert_eq!(
            revolve(&profile, 2),
            Err(SweepError::TooFewSteps { min: 3, actual: 2 })
        );
    }
}
