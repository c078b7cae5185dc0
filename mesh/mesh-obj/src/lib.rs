//! Wavefront OBJ subset I/O for swept surfaces and skinning meshes.
//!
//! The formats here are fixed, externally defined contracts:
//!
//! - **Reading** ([`parse_obj`], [`load_obj`]): `v x y z` vertex lines and
//!   `f i j k` triangle lines with 1-based indices. Whitespace is free-form;
//!   any other line type (`vn`, `vt`, comments, groups, ...) is skipped.
//! - **Writing** ([`write_obj`], [`save_obj`]): `v` and `vn` lines for every
//!   vertex, a single dummy `vt  0 0 0`, then faces as
//!   `f a/1/a b/1/b c/1/c`: texture index pinned at 1, normal index equal
//!   to the vertex index. Standard OBJ consumers accept this shape as-is.
//!
//! Writing a [`Surface`] and re-reading it preserves the vertex count and
//! the face topology exactly (indices only shift by the 1-based convention).
//!
//! # Example
//!
//! ```
//! use mesh_obj::parse_obj;
//!
//! let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//! let mesh = parse_obj(source.as_bytes()).unwrap();
//! assert_eq!(mesh.positions.len(), 3);
//! assert_eq!(mesh.faces, vec![[0, 1, 2]]);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod read;
mod write;

pub use error::{ObjError, ObjResult};
pub use read::{load_obj, parse_obj, ObjMesh};
pub use write::{save_obj, write_obj};

#[cfg(test)]
mod round_trip_tests {
    use super::*;
    use nalgebra::{Point3, Vector3};
    use surface_types::Surface;

    #[test]
    fn test_written_surface_reads_back_identically() {
        let surface = Surface::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.5, 0.0, 0.25),
                Point3::new(0.0, 2.0, -0.5),
                Point3::new(1.0, 1.0, 1.0),
            ],
            vec![Vector3::z(); 4],
            vec![[0, 1, 2], [2, 1, 3]],
        );

        let mut buffer = Vec::new();
        write_obj(&surface, &mut buffer).expect("write");
        let mesh = parse_obj(buffer.as_slice()).expect("parse");

        assert_eq!(mesh.positions.len(), surface.vertex_count());
        assert_eq!(mesh.faces, surface.faces);
        for (read, written) in mesh.positions.iter().zip(&surface.vertices) {
            assert!((read - written).norm() < 1e-12);
        }
    }
}
