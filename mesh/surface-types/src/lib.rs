//! Triangle surface type for swept-surface generation.
//!
//! [`Surface`] is the interchange type between the mesh builders
//! (`mesh-sweep`) and the OBJ writer (`mesh-obj`): vertex positions, an
//! index-aligned per-vertex normal array, and triangle faces indexing both.
//!
//! # Conventions
//!
//! - Faces use counter-clockwise winding viewed from outside; normals point
//!   outward.
//! - Vertices and normals are index-aligned: `normals[i]` belongs to
//!   `vertices[i]`, and a face index addresses both arrays at once.
//! - A `Surface` is treated as immutable once a builder returns it. The
//!   index invariant is established by construction; [`Surface::validate`]
//!   exists for untrusted input, it is not run on every access.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by [`Surface::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// A face references a vertex index beyond the vertex array.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        /// Offending face position.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Number of vertices actually present.
        vertex_count: usize,
    },

    /// The normal array is not aligned with the vertex array.
    #[error("normal count {normal_count} does not match vertex count {vertex_count}")]
    MisalignedNormals {
        /// Number of normals present.
        normal_count: usize,
        /// Number of vertices present.
        vertex_count: usize,
    },
}

/// An indexed triangle surface with per-vertex normals.
///
/// # Example
///
/// ```
/// use surface_types::Surface;
/// use nalgebra::{Point3, Vector3};
///
/// let mut surface = Surface::new();
/// surface.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// surface.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// surface.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// surface.normals.extend(std::iter::repeat(Vector3::z()).take(3));
/// surface.faces.push([0, 1, 2]);
///
/// assert_eq!(surface.vertex_count(), 3);
/// assert!(surface.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Per-vertex normals, index-aligned with `vertices`.
    pub normals: Vec<Vector3<f64>>,
    /// Triangle faces as indices into `vertices`/`normals`, CCW from outside.
    pub faces: Vec<[u32; 3]>,
}

impl Surface {
    /// Create an empty surface.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a surface with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a surface from its parts.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        vertices: Vec<Point3<f64>>,
        normals: Vec<Vector3<f64>>,
        faces: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the surface has no geometry at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Check the structural invariants: aligned normals, in-range indices.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.normals.len() != self.vertices.len() {
            return Err(SurfaceError::MisalignedNormals {
                normal_count: self.normals.len(),
                vertex_count: self.vertices.len(),
            });
        }
        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= self.vertices.len() {
                    return Err(SurfaceError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Surface {
        Surface::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Vector3::z(); 3],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_counts() {
        let surface = triangle();
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.face_count(), 1);
        assert!(!surface.is_empty());
        assert!(Surface::new().is_empty());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut surface = triangle();
        surface.faces.push([0, 1, 3]);
        assert_eq!(
            surface.validate(),
            Err(SurfaceError::IndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_validate_rejects_misaligned_normals() {
        let mut surface = triangle();
        surface.normals.pop();
        assert!(matches!(
            surface.validate(),
            Err(SurfaceError::MisalignedNormals { .. })
        ));
    }
}
