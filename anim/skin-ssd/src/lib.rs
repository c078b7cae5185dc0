//! Skeletal subspace deformation (linear blend skinning).
//!
//! This crate drives a triangle mesh from a joint hierarchy:
//!
//! - [`Skeleton`] - Index-arena joint tree with rest-pose ("bind") and
//!   current-pose world transforms
//! - [`SkinnedMesh`] - Bind/current vertex buffers plus per-vertex joint
//!   weights, deformed by standard linear blend skinning
//! - [`SkinnedModel`] - The two wired together from the fixed skeleton /
//!   mesh / attachment text formats
//!
//! # Lifecycle
//!
//! 1. Load or construct the skeleton (ancestors before descendants).
//! 2. [`Skeleton::compute_bind_transforms`], exactly once; stores each
//!    joint's inverse bind matrix.
//! 3. Per pose change: [`Skeleton::set_joint_pose`] (Euler X·Y·Z on top of
//!    the rest-pose local transform), then
//!    [`Skeleton::update_world_transforms`], then [`SkinnedMesh::update`].
//!
//! Posing with all-zero angles reproduces the bind pose exactly.
//!
//! # Example
//!
//! ```
//! use skin_ssd::Skeleton;
//! use nalgebra::Vector3;
//!
//! let mut skeleton = Skeleton::from_offsets(&[
//!     (Vector3::zeros(), None),
//!     (Vector3::new(0.0, 1.0, 0.0), Some(0)),
//! ]).unwrap();
//!
//! skeleton.compute_bind_transforms().unwrap();
//! skeleton.set_joint_pose(0, 0.0, 0.0, 0.3).unwrap();
//! skeleton.update_world_transforms();
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod error;
mod loader;
mod mesh;
mod skeleton;

pub use error::{SkinError, SkinResult};
pub use loader::{
    load_attachments, load_skeleton, parse_attachments, parse_skeleton, SkinnedModel,
};
pub use mesh::{Attachments, SkinnedMesh};
pub use skeleton::{Joint, Skeleton};
