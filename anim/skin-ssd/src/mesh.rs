//! Skinned mesh and the linear blend skinning update.

use nalgebra::{Matrix4, Point3};
use rayon::prelude::*;

use mesh_obj::ObjMesh;

use crate::error::{SkinError, SkinResult};
use crate::skeleton::Skeleton;

/// Per-vertex attachment: sparse `(joint index, weight)` pairs.
///
/// Weights for a vertex are assumed to sum to 1; the format does not enforce
/// it and neither does the skinning pass.
pub type Attachments = Vec<Vec<(usize, f64)>>;

/// A triangle mesh deformed by a [`Skeleton`].
///
/// `bind_vertices` is the rest pose, immutable after load;
/// `current_vertices` is recomputed by every [`Self::update`] call and
/// starts out equal to the bind pose. Faces never change.
#[derive(Debug, Clone, Default)]
pub struct SkinnedMesh {
    /// Rest-pose vertex positions.
    pub bind_vertices: Vec<Point3<f64>>,
    /// Deformed vertex positions for the current skeleton pose.
    pub current_vertices: Vec<Point3<f64>>,
    /// Triangle faces (0-based indices into the vertex arrays).
    pub faces: Vec<[u32; 3]>,
    attachments: Attachments,
}

impl SkinnedMesh {
    /// Wrap loaded OBJ geometry as an unattached skinned mesh.
    #[must_use]
    pub fn from_obj(mesh: ObjMesh) -> Self {
        let current = mesh.positions.clone();
        let attachments = vec![Vec::new(); mesh.positions.len()];
        Self {
            bind_vertices: mesh.positions,
            current_vertices: current,
            faces: mesh.faces,
            attachments,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.bind_vertices.len()
    }

    /// The per-vertex attachments.
    #[must_use]
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    /// Install per-vertex joint weights.
    ///
    /// There must be one attachment row per vertex, and every joint index
    /// must be valid for a skeleton with `joint_count` joints.
    pub fn set_attachments(
        &mut self,
        attachments: Attachments,
        joint_count: usize,
    ) -> SkinResult<()> {
        if attachments.len() != self.bind_vertices.len() {
            return Err(SkinError::IndexOutOfRange {
                index: attachments.len(),
                count: self.bind_vertices.len(),
            });
        }
        for row in &attachments {
            for &(joint, _) in row {
                if joint >= joint_count {
                    return Err(SkinError::IndexOutOfRange {
                        index: joint,
                        count: joint_count,
                    });
                }
            }
        }
        self.attachments = attachments;
        Ok(())
    }

    /// Recompute `current_vertices` from the skeleton's current pose.
    ///
    /// Standard linear blend skinning: for each vertex the per-joint
    /// matrices `current_to_world * bind_world_to_joint` are blended by the
    /// attachment weights into a single 4x4, which then transforms the bind
    /// vertex once. The per-vertex work is a pure map and runs in parallel.
    ///
    /// Vertices with no attachments keep their bind position. Requires
    /// [`Skeleton::compute_bind_transforms`] to have run.
    pub fn update(&mut self, skeleton: &Skeleton) -> SkinResult<()> {
        if !skeleton.bind_computed() {
            return Err(SkinError::BindNotComputed);
        }

        let skinning: Vec<Matrix4<f64>> = skeleton
            .joints()
            .map(|joint| joint.current_to_world() * joint.bind_world_to_joint())
            .collect();

        for row in &self.attachments {
            for &(joint, _) in row {
                if joint >= skinning.len() {
                    return Err(SkinError::IndexOutOfRange {
                        index: joint,
                        count: skinning.len(),
                    });
                }
            }
        }

        self.current_vertices = self
            .bind_vertices
            .par_iter()
            .zip(self.attachments.par_iter())
            .map(|(vertex, row)| {
                if row.is_empty() {
                    return *vertex;
                }
                let mut blended = Matrix4::zeros();
                for &(joint, weight) in row {
                    blended += skinning[joint] * weight;
                }
                let skinned = blended * vertex.to_homogeneous();
                Point3::from_homogeneous(skinned).unwrap_or(*vertex)
            })
            .collect();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    fn two_bone_skeleton() -> Skeleton {
        let mut skeleton = Skeleton::from_offsets(&[
            (Vector3::zeros(), None),
            (Vector3::new(0.0, 1.0, 0.0), Some(0)),
        ])
        .expect("skeleton");
        skeleton.compute_bind_transforms().expect("bind");
        skeleton
    }

    fn strip_mesh() -> SkinnedMesh {
        let mesh = ObjMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            faces: vec![[0, 1, 2]],
        };
        SkinnedMesh::from_obj(mesh)
    }

    #[test]
    fn test_zero_pose_reproduces_bind_pose() {
        let mut skeleton = two_bone_skeleton();
        let mut mesh = strip_mesh();
        mesh.set_attachments(
            vec![
                vec![(0, 1.0)],
                vec![(0, 0.5), (1, 0.5)],
                vec![(1, 1.0)],
            ],
            skeleton.joint_count(),
        )
        .expect("attach");

        skeleton.set_joint_pose(0, 0.0, 0.0, 0.0).expect("pose");
        skeleton.set_joint_pose(1, 0.0, 0.0, 0.0).expect("pose");
        skeleton.update_world_transforms();
        mesh.update(&skeleton).expect("skin");

        for (current, bind) in mesh.current_vertices.iter().zip(&mesh.bind_vertices) {
            assert_relative_eq!(current.coords, bind.coords, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fully_attached_vertex_follows_joint() {
        let mut skeleton = two_bone_skeleton();
        let mut mesh = strip_mesh();
        mesh.set_attachments(
            vec![vec![(0, 1.0)], vec![(1, 1.0)], vec![(1, 1.0)]],
            skeleton.joint_count(),
        )
        .expect("attach");

        // Rotate the root; everything attached downstream swings with it.
        skeleton
            .set_joint_pose(0, 0.0, 0.0, FRAC_PI_2)
            .expect("pose");
        skeleton.update_world_transforms();
        mesh.update(&skeleton).expect("skin");

        assert_relative_eq!(
            mesh.current_vertices[2],
            Point3::new(-2.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_blend_is_matrix_blend_not_point_blend() {
        let mut skeleton = two_bone_skeleton();
        let mut mesh = strip_mesh();
        mesh.set_attachments(
            vec![
                vec![(0, 1.0)],
                vec![(0, 0.5), (1, 0.5)],
                vec![(1, 1.0)],
            ],
            skeleton.joint_count(),
        )
        .expect("attach");

        skeleton
            .set_joint_pose(1, 0.0, 0.0, FRAC_PI_2)
            .expect("pose");
        skeleton.update_world_transforms();
        mesh.update(&skeleton).expect("skin");

        // Vertex 1 sits at the posed joint's origin: both matrices map it to
        // itself, so the half/half blend leaves it in place.
        assert_relative_eq!(
            mesh.current_vertices[1],
            Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );

        // Vertex 2 is fully attached to the rotated joint: its +Y offset
        // from the joint swings onto -X.
        assert_relative_eq!(
            mesh.current_vertices[2],
            Point3::new(-1.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_attachment_validation() {
        let skeleton = two_bone_skeleton();
        let mut mesh = strip_mesh();

        // Wrong row count.
        assert!(mesh
            .set_attachments(vec![vec![(0, 1.0)]], skeleton.joint_count())
            .is_err());

        // Joint index beyond the skeleton.
        assert!(mesh
            .set_attachments(
                vec![vec![(5, 1.0)], vec![(0, 1.0)], vec![(0, 1.0)]],
                skeleton.joint_count(),
            )
            .is_err());
    }

    #[test]
    fn test_unattached_vertices_stay_at_bind() {
        let mut skeleton = two_bone_skeleton();
        let mut mesh = strip_mesh();
        // Only the last vertex is attached.
        mesh.set_attachments(
            vec![Vec::new(), Vec::new(), vec![(1, 1.0)]],
            skeleton.joint_count(),
        )
        .expect("attach");

        skeleton
            .set_joint_pose(0, 0.0, 0.0, FRAC_PI_2)
            .expect("pose");
        skeleton.update_world_transforms();
        mesh.update(&skeleton).expect("skin");

        assert_relative_eq!(
            mesh.current_vertices[0],
            mesh.bind_vertices[0],
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mesh.current_vertices[1],
            mesh.bind_vertices[1],
            epsilon = 1e-12
        );
    }
}
