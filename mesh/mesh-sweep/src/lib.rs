//! Swept triangle surfaces from framed profile curves.
//!
//! Two constructions over [`curve_eval::CurvePoint`] sequences:
//!
//! - [`revolve`] - Surface of revolution: spin a flat profile about the
//!   Y axis. Open at the profile ends (a line profile gives an uncapped
//!   cylinder).
//! - [`sweep`] - Generalized cylinder: carry a flat profile along a framed
//!   path, re-expressing the profile in each path sample's frame. Closed
//!   around both the path and the profile (a tube).
//!
//! Both require the profile to lie in the `z = 0` plane (positions,
//! tangents, and normals alike); a non-planar profile aborts the build.
//!
//! # Example
//!
//! ```
//! use curve_eval::eval_circle;
//! use mesh_sweep::sweep;
//!
//! // A small circle swept along a big circle: a torus.
//! let profile = eval_circle(0.25, 12).unwrap();
//! let path = eval_circle(2.0, 24).unwrap();
//!
//! let torus = sweep(&profile, &path).unwrap();
//! assert_eq!(torus.vertex_count(), path.len() * profile.len());
//! assert!(torus.validate().is_ok());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

mod error;
mod faces;
mod profile;
mod revolve;
mod sweep;

pub use error::SweepError;
pub use faces::grid_faces;
pub use revolve::revolve;
pub use sweep::sweep;

/// Result type for surface construction.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use curve_eval::eval_circle;

    #[test]
    fn test_revolved_circle_profile_is_closed_and_valid() {
        // A circle profile in z=0 revolved about Y sweeps a sphere-like shell.
        let profile = eval_circle(1.0, 16).expect("profile");
        let surface = revolve(&profile, 24).expect("surface");

        assert_eq!(surface.vertex_count(), 24 * profile.len());
        assert!(surface.validate().is_ok());
    }

    #[test]
    fn test_torus_face_count() {
        let profile = eval_circle(0.5, 8).expect("profile");
        let path = eval_circle(3.0, 16).expect("path");
        let torus = sweep(&profile, &path).expect("torus");

        // Closed in both directions: two triangles per grid cell.
        assert_eq!(torus.face_count(), path.len() * profile.len() * 2);
    }
}
