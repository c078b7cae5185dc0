//! System state and derivative vectors.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The continuous state of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleState {
    /// Position.
    pub position: Point3<f64>,
    /// Velocity.
    pub velocity: Vector3<f64>,
}

impl ParticleState {
    /// Create a particle state.
    #[must_use]
    pub fn new(position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// A particle at rest at the given position.
    #[must_use]
    pub fn at_rest(position: Point3<f64>) -> Self {
        Self::new(position, Vector3::zeros())
    }
}

/// The time derivative of one particle's state.
///
/// `d_position` is the particle's velocity; `d_velocity` its acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateDerivative {
    /// Derivative of position.
    pub d_position: Vector3<f64>,
    /// Derivative of velocity.
    pub d_velocity: Vector3<f64>,
}

impl StateDerivative {
    /// Create a derivative from its components.
    #[must_use]
    pub fn new(d_position: Vector3<f64>, d_velocity: Vector3<f64>) -> Self {
        Self {
            d_position,
            d_velocity,
        }
    }

    /// The zero derivative, used for pinned particles.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }
}

/// The full system state: one `(position, velocity)` pair per particle,
/// index-aligned with particle creation order.
///
/// That pairing and ordering is the contract the integrators rely on; a
/// derivative vector produced by
/// [`ParticleSystem::eval_derivative`](crate::ParticleSystem::eval_derivative)
/// is aligned the same way.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemState {
    /// Per-particle states, creation order.
    pub particles: Vec<ParticleState>,
}

impl SystemState {
    /// Create a state from per-particle entries.
    #[must_use]
    pub fn new(particles: Vec<ParticleState>) -> Self {
        Self { particles }
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the state holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Position of particle `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Point3<f64> {
        self.particles[index].position
    }

    /// Velocity of particle `index`.
    #[must_use]
    pub fn velocity(&self, index: usize) -> Vector3<f64> {
        self.particles[index].velocity
    }

    /// `self + h * derivative`, element-wise.
    ///
    /// The derivative vector must be index-aligned with the state.
    #[must_use]
    pub fn advanced(&self, derivative: &[StateDerivative], h: f64) -> Self {
        debug_assert_eq!(self.particles.len(), derivative.len());
        let particles = self
            .particles
            .iter()
            .zip(derivative)
            .map(|(p, d)| ParticleState {
                position: p.position + d.d_position * h,
                velocity: p.velocity + d.d_velocity * h,
            })
            .collect();
        Self { particles }
    }
}
