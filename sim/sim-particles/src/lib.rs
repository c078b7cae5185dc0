//! Mass-spring particle simulation with pluggable explicit integrators.
//!
//! This crate provides:
//!
//! - **State** ([`SystemState`], [`StateDerivative`]): the ordered
//!   `(position, velocity)` pair per particle that integrators advance
//! - **Topology** ([`SpringTopology`], [`Spring`]): fixed masses and
//!   Hookean springs, at most one per unordered particle pair
//! - **Systems** ([`SimpleSystem`], [`PendulumSystem`], [`ClothSystem`]):
//!   concrete dynamical systems behind the [`ParticleSystem`] trait
//! - **Integrators** ([`ForwardEuler`], [`Trapezoidal`], [`RungeKutta4`]):
//!   explicit steppers generic over any `ParticleSystem`
//!
//! # Quick Start
//!
//! ```
//! use sim_particles::{
//!     ClothConfig, ClothSystem, Integrator, ParticleSystem, RungeKutta4,
//! };
//!
//! let mut cloth = ClothSystem::new(ClothConfig::default()).unwrap();
//!
//! // Simulate one second at 25 Hz.
//! for _ in 0..25 {
//!     RungeKutta4::step(&mut cloth, 0.04);
//! }
//!
//! assert_eq!(cloth.state().len(), cloth.rows() * cloth.cols());
//! ```
//!
//! # Purity contract
//!
//! [`ParticleSystem::eval_derivative`] is a pure function of the state it is
//! handed; integrators probe it at trial states that are never committed.
//! Committing happens through [`ParticleSystem::set_state`], exactly once
//! per step; system-specific post-step corrections (cloth collision, swing
//! reversal) hang off that single mutation point.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions
)]

mod cloth;
mod config;
mod error;
mod integrators;
mod pendulum;
mod simple;
mod state;
mod topology;

pub use cloth::ClothSystem;
pub use config::{ClothConfig, PendulumConfig, SphereObstacle, SwingConfig};
pub use error::{SimError, SimResult};
pub use integrators::{
    step_with_method, ForwardEuler, IntegrationMethod, Integrator, RungeKutta4, Trapezoidal,
};
pub use pendulum::PendulumSystem;
pub use simple::SimpleSystem;
pub use state::{ParticleState, StateDerivative, SystemState};
pub use topology::{Particle, Spring, SpringTopology};

/// A dynamical system of particles advanced by explicit integrators.
///
/// The state is the full ordered sequence of `(position, velocity)` pairs,
/// one per particle, index-aligned with particle creation order; derivative
/// vectors returned by [`Self::eval_derivative`] follow the same alignment.
pub trait ParticleSystem {
    /// The current committed state.
    fn state(&self) -> &SystemState;

    /// Commit a new state. Called exactly once per integrator step.
    fn set_state(&mut self, state: SystemState);

    /// Evaluate the time derivative of an arbitrary state.
    ///
    /// Must be pure over `state`: integrators call this on trial states
    /// that are never committed.
    fn eval_derivative(&self, state: &SystemState) -> Vec<StateDerivative>;
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_every_builtin_system_steps_under_every_method() {
        let methods = [
            IntegrationMethod::ForwardEuler,
            IntegrationMethod::Trapezoidal,
            IntegrationMethod::RungeKutta4,
        ];

        for method in methods {
            let mut simple = SimpleSystem::new();
            let mut pendulum = PendulumSystem::new(PendulumConfig::default()).expect("pendulum");
            let mut cloth = ClothSystem::new(
                ClothConfig::default().with_size(0.5, 0.5).with_spacing(0.25),
            )
            .expect("cloth");

            for _ in 0..10 {
                step_with_method(method, &mut simple, 0.01);
                step_with_method(method, &mut pendulum, 0.01);
                step_with_method(method, &mut cloth, 0.01);
            }

            // States stay finite and aligned.
            for system in [simple.state(), pendulum.state(), cloth.state()] {
                for particle in &system.particles {
                    assert!(particle.position.coords.iter().all(|c| c.is_finite()));
                    assert!(particle.velocity.iter().all(|c| c.is_finite()));
                }
            }
        }
    }
}
