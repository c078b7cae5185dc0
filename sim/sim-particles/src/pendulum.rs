//! A pendulum chain of spring-linked particles.

use nalgebra::{Point3, Vector3};

use crate::config::PendulumConfig;
use crate::error::SimResult;
use crate::state::{ParticleState, StateDerivative, SystemState};
use crate::topology::SpringTopology;
use crate::ParticleSystem;

/// A chain of particles laid out along +X, linked by springs, with the
/// first particle pinned as the anchor.
///
/// Free particles feel gravity along -Y, viscous drag, and their incident
/// spring forces.
#[derive(Debug, Clone)]
pub struct PendulumSystem {
    config: PendulumConfig,
    topology: SpringTopology,
    state: SystemState,
}

impl PendulumSystem {
    /// Build the chain described by `config`.
    pub fn new(config: PendulumConfig) -> SimResult<Self> {
        let mut topology = SpringTopology::new();
        let mut particles = Vec::with_capacity(config.particle_count);

        for i in 0..config.particle_count {
            particles.push(ParticleState::at_rest(Point3::new(
                config.spacing * i as f64,
                0.0,
                0.0,
            )));
            let index = topology.add_particle(config.mass)?;
            if i > 0 {
                topology.add_spring(index - 1, index, config.rest_length, config.stiffness)?;
            }
        }

        Ok(Self {
            config,
            topology,
            state: SystemState::new(particles),
        })
    }

    /// The system's configuration.
    #[must_use]
    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    /// The fixed particle/spring topology.
    #[must_use]
    pub fn topology(&self) -> &SpringTopology {
        &self.topology
    }

    /// Whether `index` is the pinned anchor.
    #[must_use]
    pub fn is_pinned(&self, index: usize) -> bool {
        index == 0
    }
}

impl ParticleSystem for PendulumSystem {
    fn state(&self) -> &SystemState {
        &self.state
    }

    fn set_state(&mut self, state: SystemState) {
        self.state = state;
    }

    fn eval_derivative(&self, state: &SystemState) -> Vec<StateDerivative> {
        let mut derivative = Vec::with_capacity(state.len());

        for index in 0..state.len() {
            if self.is_pinned(index) {
                derivative.push(StateDerivative::zero());
                continue;
            }

            let mass = self.topology.mass(index).unwrap_or(self.config.mass);
            let velocity = state.velocity(index);

            let mut force = Vector3::new(0.0, -mass * self.config.gravity, 0.0);
            force -= self.config.drag * velocity;
            force += self
                .topology
                .spring_force_on(index, state)
                .unwrap_or_else(|_| Vector3::zeros());

            derivative.push(StateDerivative::new(velocity, force / mass));
        }

        derivative
    }
}
