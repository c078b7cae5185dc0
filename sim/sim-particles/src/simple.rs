//! A trivial rotational system for smoke-testing integrators.

use nalgebra::{Point3, Vector3};

use crate::state::{ParticleState, StateDerivative, SystemState};
use crate::ParticleSystem;

/// One particle circling the origin in the `z = 0` plane.
///
/// The derivative drives the position directly
/// (`d_position = (-y, x, 0)`), so the exact solution is uniform circular
/// motion and any integrator's radial drift is easy to read off.
#[derive(Debug, Clone)]
pub struct SimpleSystem {
    state: SystemState,
}

impl SimpleSystem {
    /// Create the system with the particle at `(1, 0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_start(Point3::new(1.0, 0.0, 0.0))
    }

    /// Create the system with the particle at a chosen start position.
    #[must_use]
    pub fn with_start(position: Point3<f64>) -> Self {
        Self {
            state: SystemState::new(vec![ParticleState::at_rest(position)]),
        }
    }
}

impl Default for SimpleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem for SimpleSystem {
    fn state(&self) -> &SystemState {
        &self.state
    }

    fn set_state(&mut self, state: SystemState) {
        self.state = state;
    }

    fn eval_derivative(&self, state: &SystemState) -> Vec<StateDerivative> {
        state
            .particles
            .iter()
            .map(|p| {
                StateDerivative::new(
                    Vector3::new(-p.position.y, p.position.x, 0.0),
                    Vector3::zeros(),
                )
            })
            .collect()
    }
}
