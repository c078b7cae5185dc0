//! Joint hierarchy as an index-based arena.
//!
//! Joints live in a flat `Vec` with ancestors stored before descendants
//! (validated at construction), so world transforms resolve in a single
//! forward pass; there is no matrix stack and no pointer-chasing tree.

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

use crate::error::{SkinError, SkinResult};

/// One joint in the arena.
#[derive(Debug, Clone)]
pub struct Joint {
    /// Local transform as loaded (the rest pose), never mutated after
    /// construction.
    rest_local: Matrix4<f64>,
    /// Current local transform relative to the parent; replaced by pose
    /// updates.
    local: Matrix4<f64>,
    /// Inverse of the accumulated rest-pose world transform. Identity until
    /// [`Skeleton::compute_bind_transforms`] runs, fixed afterwards.
    bind_world_to_joint: Matrix4<f64>,
    /// Accumulated world transform for the current pose.
    current_to_world: Matrix4<f64>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Joint {
    /// Parent arena index (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Arena indices of this joint's children.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// The joint's current world transform.
    #[must_use]
    pub fn current_to_world(&self) -> &Matrix4<f64> {
        &self.current_to_world
    }

    /// The bind-pose world-to-joint transform (inverse bind matrix).
    #[must_use]
    pub fn bind_world_to_joint(&self) -> &Matrix4<f64> {
        &self.bind_world_to_joint
    }
}

/// A joint hierarchy with bind-pose and current-pose world transforms.
///
/// Lifecycle: construct ([`Self::from_locals`] or the file loader), call
/// [`Self::compute_bind_transforms`] exactly once, then alternate
/// [`Self::set_joint_pose`] and [`Self::update_world_transforms`] as the
/// pose changes.
#[derive(Debug, Clone)]
pub struct Skeleton {
    joints: Vec<Joint>,
    root: usize,
    bind_computed: bool,
}

impl Skeleton {
    /// Build a hierarchy from per-joint local transforms and parent indices.
    ///
    /// Requires exactly one root (`None` parent) and every other joint's
    /// parent to appear earlier in the slice.
    pub fn from_locals(locals: Vec<(Matrix4<f64>, Option<usize>)>) -> SkinResult<Self> {
        let mut joints: Vec<Joint> = Vec::with_capacity(locals.len());
        let mut root = None;

        for (index, (local, parent)) in locals.into_iter().enumerate() {
            match parent {
                None => {
                    if root.is_some() {
                        return Err(SkinError::MultipleRoots { joint: index });
                    }
                    root = Some(index);
                }
                Some(p) => {
                    if p >= index {
                        return Err(SkinError::ParentAfterChild { joint: index });
                    }
                    joints[p].children.push(index);
                }
            }
            joints.push(Joint {
                rest_local: local,
                local,
                bind_world_to_joint: Matrix4::identity(),
                current_to_world: Matrix4::identity(),
                parent,
                children: Vec::new(),
            });
        }

        let root = root.ok_or(SkinError::MissingRoot)?;
        Ok(Self {
            joints,
            root,
            bind_computed: false,
        })
    }

    /// Build a hierarchy from translation offsets, the skeleton-file model:
    /// each joint is a pure translation relative to its parent.
    pub fn from_offsets(offsets: &[(Vector3<f64>, Option<usize>)]) -> SkinResult<Self> {
        let locals = offsets
            .iter()
            .map(|&(offset, parent)| (Matrix4::new_translation(&offset), parent))
            .collect();
        Self::from_locals(locals)
    }

    /// Number of joints in the hierarchy.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Arena index of the root joint.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Access a joint by arena index.
    pub fn joint(&self, index: usize) -> SkinResult<&Joint> {
        self.joints.get(index).ok_or(SkinError::IndexOutOfRange {
            index,
            count: self.joints.len(),
        })
    }

    /// Iterate over the joints in arena (ancestors-first) order.
    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.iter()
    }

    /// The current world-space position of a joint.
    pub fn world_position(&self, index: usize) -> SkinResult<Point3<f64>> {
        let joint = self.joint(index)?;
        let t = joint.current_to_world.column(3);
        Ok(Point3::new(t[0], t[1], t[2]))
    }

    /// Compute the bind-pose world transforms and their inverses.
    ///
    /// One-time pass over the rest pose: `world = parent.world * local` with
    /// the root's local transform already in world space. Must run exactly
    /// once, after construction and before any posing.
    ///
    /// # Errors
    ///
    /// [`SkinError::SingularTransform`] if any accumulated world transform
    /// cannot be inverted (a degenerate rest pose);
    /// [`SkinError::BindAlreadyComputed`] on a second call.
    pub fn compute_bind_transforms(&mut self) -> SkinResult<()> {
        if self.bind_computed {
            return Err(SkinError::BindAlreadyComputed);
        }

        for index in 0..self.joints.len() {
            let world = match self.joints[index].parent {
                Some(p) => self.joints[p].current_to_world * self.joints[index].local,
                None => self.joints[index].local,
            };
            let inverse = world
                .try_inverse()
                .ok_or(SkinError::SingularTransform { joint: index })?;
            self.joints[index].current_to_world = world;
            self.joints[index].bind_world_to_joint = inverse;
        }

        self.bind_computed = true;
        Ok(())
    }

    /// Replace a joint's local transform with a posed one.
    ///
    /// The pose is Euler angles (radians) applied in X, then Y, then Z order
    /// on top of the *rest* local transform:
    /// `local = rest_local * Rx * Ry * Rz`. Descendants are not touched;
    /// call [`Self::update_world_transforms`] to propagate.
    pub fn set_joint_pose(
        &mut self,
        index: usize,
        euler_x: f64,
        euler_y: f64,
        euler_z: f64,
    ) -> SkinResult<()> {
        if !self.bind_computed {
            return Err(SkinError::BindNotComputed);
        }
        if index >= self.joints.len() {
            return Err(SkinError::IndexOutOfRange {
                index,
                count: self.joints.len(),
            });
        }

        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), euler_x).to_homogeneous();
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), euler_y).to_homogeneous();
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), euler_z).to_homogeneous();

        self.joints[index].local = self.joints[index].rest_local * rx * ry * rz;
        Ok(())
    }

    /// Recompute every joint's current world transform, top-down.
    ///
    /// Ancestors precede descendants in the arena, so one forward pass
    /// threads the accumulated transform through the whole tree.
    pub fn update_world_transforms(&mut self) {
        for index in 0..self.joints.len() {
            let world = match self.joints[index].parent {
                Some(p) => self.joints[p].current_to_world * self.joints[index].local,
                None => self.joints[index].local,
            };
            self.joints[index].current_to_world = world;
        }
    }

    /// Restore every joint to its rest-pose local transform and refresh the
    /// world transforms.
    pub fn reset_pose(&mut self) {
        for joint in &mut self.joints {
            joint.local = joint.rest_local;
        }
        self.update_world_transforms();
    }

    /// Whether [`Self::compute_bind_transforms`] has run.
    #[must_use]
    pub fn bind_computed(&self) -> bool {
        self.bind_computed
    }
}
