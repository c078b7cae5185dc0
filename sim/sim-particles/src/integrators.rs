//! Explicit time integrators over particle systems.
//!
//! Every integrator consumes
//! [`ParticleSystem::eval_derivative`](crate::ParticleSystem::eval_derivative)
//! as a black box and commits the result with a single
//! [`set_state`](crate::ParticleSystem::set_state) call per step (the cloth
//! system hangs its post-step collision hook on that contract).
//!
//! # Methods
//!
//! - [`ForwardEuler`]: first order, cheapest, conditionally stable; the
//!   baseline, least accurate.
//! - [`Trapezoidal`]: Heun's predictor-corrector, second order.
//! - [`RungeKutta4`]: classical RK4, fourth order; the recommended default
//!   for stiff spring systems at moderate step sizes.

use crate::state::StateDerivative;
use crate::ParticleSystem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for explicit integration methods.
pub trait Integrator {
    /// Advance the system by one step of size `h`.
    fn step<S: ParticleSystem + ?Sized>(system: &mut S, h: f64);
}

/// Integration method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegrationMethod {
    /// First-order explicit Euler.
    ForwardEuler,
    /// Second-order trapezoidal rule (Heun's method).
    Trapezoidal,
    /// Classical fourth-order Runge-Kutta.
    #[default]
    RungeKutta4,
}

/// Dispatch to the appropriate integrator based on the method enum.
pub fn step_with_method<S: ParticleSystem + ?Sized>(
    method: IntegrationMethod,
    system: &mut S,
    h: f64,
) {
    match method {
        IntegrationMethod::ForwardEuler => ForwardEuler::step(system, h),
        IntegrationMethod::Trapezoidal => Trapezoidal::step(system, h),
        IntegrationMethod::RungeKutta4 => RungeKutta4::step(system, h),
    }
}

/// Forward Euler integration (first order).
///
/// ```text
/// x(t+h) = x(t) + h * f(x(t))
/// ```
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<S: ParticleSystem + ?Sized>(system: &mut S, h: f64) {
        let state = system.state().clone();
        let f = system.eval_derivative(&state);
        system.set_state(state.advanced(&f, h));
    }
}

/// Trapezoidal rule (Heun's method, second order).
///
/// ```text
/// k0 = f(x)
/// k1 = f(x + h * k0)
/// x(t+h) = x(t) + h/2 * (k0 + k1)
/// ```
pub struct Trapezoidal;

impl Integrator for Trapezoidal {
    fn step<S: ParticleSystem + ?Sized>(system: &mut S, h: f64) {
        let state = system.state().clone();
        let k0 = system.eval_derivative(&state);
        let predictor = state.advanced(&k0, h);
        let k1 = system.eval_derivative(&predictor);

        let combined: Vec<StateDerivative> = k0
            .iter()
            .zip(&k1)
            .map(|(a, b)| StateDerivative::new(
                a.d_position + b.d_position,
                a.d_velocity + b.d_velocity,
            ))
            .collect();
        system.set_state(state.advanced(&combined, 0.5 * h));
    }
}

/// Classical fourth-order Runge-Kutta.
///
/// ```text
/// k1 = f(x)
/// k2 = f(x + h/2 * k1)
/// k3 = f(x + h/2 * k2)
/// k4 = f(x + h * k3)
/// x(t+h) = x(t) + h/6 * (k1 + 2*k2 + 2*k3 + k4)
/// ```
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn step<S: ParticleSystem + ?Sized>(system: &mut S, h: f64) {
        let state = system.state().clone();
        let k1 = system.eval_derivative(&state);
        let k2 = system.eval_derivative(&state.advanced(&k1, 0.5 * h));
        let k3 = system.eval_derivative(&state.advanced(&k2, 0.5 * h));
        let k4 = system.eval_derivative(&state.advanced(&k3, h));

        let combined: Vec<StateDerivative> = k1
            .iter()
            .zip(&k2)
            .zip(&k3)
            .zip(&k4)
            .map(|(((a, b), c), d)| {
                StateDerivative::new(
                    a.d_position + 2.0 * b.d_position + 2.0 * c.d_position + d.d_position,
                    a.d_velocity + 2.0 * b.d_velocity + 2.0 * c.d_velocity + d.d_velocity,
                )
            })
            .collect();
        system.set_state(state.advanced(&combined, h / 6.0));
    }
}
