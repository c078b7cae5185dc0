//! Text-format loaders: skeleton files, attachment files, whole models.
//!
//! Both formats are fixed, externally defined:
//!
//! - **Skeleton**: one joint per line, `tx ty tz parentIndex`, with `-1`
//!   marking the root; joints appear after their parent.
//! - **Attachments**: one line per mesh vertex carrying one weight per
//!   joint, whitespace-separated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::Vector3;
use tracing::debug;

use mesh_obj::load_obj;

use crate::error::{SkinError, SkinResult};
use crate::mesh::{Attachments, SkinnedMesh};
use crate::skeleton::Skeleton;

/// Parse a skeleton file from a reader.
///
/// Blank lines are skipped. Each joint line must carry exactly four fields;
/// any parent index other than `-1` must name an earlier joint.
pub fn parse_skeleton<R: BufRead>(reader: R) -> SkinResult<Skeleton> {
    let mut offsets: Vec<(Vector3<f64>, Option<usize>)> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = number + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 4 {
            return Err(SkinError::invalid_content(
                line_number,
                format!("expected `tx ty tz parent`, got {} fields", tokens.len()),
            ));
        }

        let tx: f64 = tokens[0].parse()?;
        let ty: f64 = tokens[1].parse()?;
        let tz: f64 = tokens[2].parse()?;
        let parent: i64 = tokens[3].parse()?;

        let parent = match parent {
            -1 => None,
            p if p >= 0 => Some(p as usize),
            p => {
                return Err(SkinError::invalid_content(
                    line_number,
                    format!("parent index {p} is neither -1 nor a joint index"),
                ));
            }
        };

        offsets.push((Vector3::new(tx, ty, tz), parent));
    }

    let skeleton = Skeleton::from_offsets(&offsets)?;
    debug!(joints = skeleton.joint_count(), "parsed skeleton");
    Ok(skeleton)
}

/// Load a skeleton file from disk.
pub fn load_skeleton<P: AsRef<Path>>(path: P) -> SkinResult<Skeleton> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SkinError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    parse_skeleton(BufReader::new(file))
}

/// Parse an attachment file: one row per vertex, one weight per joint.
///
/// Rows must carry exactly `joint_count` weights; zero weights are dropped
/// from the sparse result. Blank lines are skipped.
pub fn parse_attachments<R: BufRead>(reader: R, joint_count: usize) -> SkinResult<Attachments> {
    let mut attachments = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = number + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != joint_count {
            return Err(SkinError::invalid_content(
                line_number,
                format!(
                    "expected {joint_count} weights, got {}",
                    tokens.len()
                ),
            ));
        }

        let mut row = Vec::new();
        for (joint, token) in tokens.iter().enumerate() {
            let weight: f64 = token.parse()?;
            if weight != 0.0 {
                row.push((joint, weight));
            }
        }
        attachments.push(row);
    }

    Ok(attachments)
}

/// Load an attachment file from disk.
pub fn load_attachments<P: AsRef<Path>>(path: P, joint_count: usize) -> SkinResult<Attachments> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SkinError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    parse_attachments(BufReader::new(file), joint_count)
}

/// A skeleton and its skinned mesh, loaded and bound together.
#[derive(Debug, Clone)]
pub struct SkinnedModel {
    /// The joint hierarchy, bind transforms already computed.
    pub skeleton: Skeleton,
    /// The attached mesh, current vertices initialized to the bind pose.
    pub mesh: SkinnedMesh,
}

impl SkinnedModel {
    /// Load skeleton, mesh, and attachments from their three files and wire
    /// them together: bind transforms computed, attachments validated,
    /// world transforms and skin refreshed once.
    ///
    /// Any missing or malformed file aborts the whole load; no partial
    /// model is returned.
    pub fn load<P: AsRef<Path>>(
        skeleton_path: P,
        mesh_path: P,
        attachments_path: P,
    ) -> SkinResult<Self> {
        let mut skeleton = load_skeleton(skeleton_path)?;
        let mut mesh = SkinnedMesh::from_obj(load_obj(mesh_path)?);
        let attachments = load_attachments(attachments_path, skeleton.joint_count())?;

        mesh.set_attachments(attachments, skeleton.joint_count())?;
        skeleton.compute_bind_transforms()?;
        skeleton.update_world_transforms();
        mesh.update(&skeleton)?;

        Ok(Self { skeleton, mesh })
    }

    /// Pose one joint and refresh the mesh.
    pub fn pose_joint(
        &mut self,
        joint: usize,
        euler_x: f64,
        euler_y: f64,
        euler_z: f64,
    ) -> SkinResult<()> {
        self.skeleton
            .set_joint_pose(joint, euler_x, euler_y, euler_z)?;
        self.skeleton.update_world_transforms();
        self.mesh.update(&self.skeleton)
    }
}
