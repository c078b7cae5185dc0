//! Generalized cylinder along a framed path.

use curve_eval::CurvePoint;
use nalgebra::Matrix3;
use surface_types::Surface;

use crate::error::SweepError;
use crate::faces::grid_faces;
use crate::profile::ensure_flat;
use crate::Result;

/// Sweep a flat profile along a framed path.
///
/// Each path sample contributes one ring: its `[N B T | V]` frame matrix
/// maps the profile's plane coordinates (x along the frame normal, y along
/// the binormal) into world space, so the profile is re-expressed in the
/// local frame at every stop. Normals go through the frame's rotation part
/// and are negated to point out of the tube.
///
/// Faces wrap around the path direction *and* close the profile loop,
/// producing a closed tube topology; sweeping along a closed path (for
/// example [`curve_eval::eval_circle`]) yields a torus.
///
/// # Errors
///
/// [`SweepError::NonPlanarProfile`] / [`SweepError::EmptyProfile`] for a bad
/// profile; [`SweepError::EmptyPath`] when the path has no samples.
pub fn sweep(profile: &[CurvePoint], path: &[CurvePoint]) -> Result<Surface> {
    ensure_flat(profile)?;
    if path.is_empty() {
        return Err(SweepError::EmptyPath);
    }

    let mut surface = Surface::with_capacity(
        path.len() * profile.len(),
        path.len() * profile.len() * 2,
    );

    for stop in path {
        let frame = stop.frame_matrix();
        let rotation: Matrix3<f64> = frame.fixed_view::<3, 3>(0, 0).into();

        for sample in profile {
            surface.vertices.push(frame.transform_point(&sample.position));
            surface.normals.push(-(rotation * sample.normal));
        }
    }

    surface.faces = grid_faces(path.len(), profile.len(), true);

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curve_eval::eval_circle;
    use nalgebra::{Point3, Vector3};

    fn square_profile() -> Vec<CurvePoint> {
        // Four corners of a flat square, outward-facing normals negated so
        // the builder's sign flip restores them.
        let corners = [
            (0.2, 0.2),
            (-0.2, 0.2),
            (-0.2, -0.2),
            (0.2, -0.2),
        ];
        corners
            .iter()
            .map(|&(x, y)| {
                let inward = Vector3::new(-x, -y, 0.0).normalize();
                CurvePoint::new(
                    Point3::new(x, y, 0.0),
                    Vector3::new(-y, x, 0.0).normalize(),
                    inward,
                    Vector3::z(),
                )
            })
            .collect()
    }

    #[test]
    fn test_counts_and_validity() {
        let profile = square_profile();
        let path = eval_circle(2.0, 10).expect("path");
        let surface = sweep(&profile, &path).expect("surface");

        assert_eq!(surface.vertex_count(), path.len() * profile.len());
        assert_eq!(surface.face_count(), path.len() * profile.len() * 2);
        assert!(surface.validate().is_ok());
    }

    #[test]
    fn test_first_ring_sits_in_first_frame() {
        let profile = square_profile();
        let path = eval_circle(2.0, 8).expect("path");
        let surface = sweep(&profile, &path).expect("surface");

        // Every first-ring vertex must be within the profile's extent of the
        // first path sample.
        let center = path[0].position;
        for vertex in surface.vertices.iter().take(profile.len()) {
            assert!((vertex - center).norm() < 0.3);
        }
    }

    #[test]
    fn test_torus_vertices_near_path_radius() {
        // Sweeping a small square around a radius-2 circle keeps every
        // vertex within the tube extent of that radius, measured in-plane.
        let profile = square_profile();
        let path = eval_circle(2.0, 12).expect("path");
        let surface = sweep(&profile, &path).expect("surface");

        for vertex in &surface.vertices {
            let ring_distance = (vertex.x * vertex.x + vertex.y * vertex.y).sqrt();
            assert!((ring_distance - 2.0).abs() < 0.3 + 1e-9);
        }
    }

    #[test]
    fn test_normals_unit_length() {
        let profile = square_profile();
        let path = eval_circle(2.0, 6).expect("path");
        let surface = sweep(&profile, &path).expect("surface");

        for normal in &surface.normals {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_path_rejected() {
        let profile = square_profile();
        assert_eq!(sweep(&profile, &[]), Err(SweepError::EmptyPath));
    }

    #[test]
    fn test_non_planar_profile_rejected() {
        let mut profile = square_profile();
        profile[0].tangent = Vector3::z();
        let path = eval_circle(1.0, 6).expect("path");
        assert!(matches!(
            sweep(&profile, &path),
            Err(SweepError::NonPlanarProfile { index: 0 })
        ));
    }
}
