//! A rectangular cloth grid with structural, shear, and flex springs.

use nalgebra::{Point3, Vector3};
use tracing::warn;

use crate::config::ClothConfig;
use crate::error::{SimError, SimResult};
use crate::state::{ParticleState, StateDerivative, SystemState};
use crate::topology::SpringTopology;
use crate::ParticleSystem;

/// A hanging cloth: `rows x cols` particles in the x-z plane, two pinned
/// corners, three spring families.
///
/// - **Structural** springs connect 4-neighbors at rest length `spacing`.
/// - **Shear** springs connect diagonal neighbors at `sqrt(2) * spacing`.
/// - **Flex** springs connect particles two cells apart along each axis at
///   `2 * spacing`, resisting bending.
///
/// The corners `(0, 0)` and `(0, cols-1)` are pinned. Optionally the pinned
/// particles swing along X between configured bounds, and a sphere obstacle
/// reprojects penetrating particles after each committed step (a positional
/// correction only; velocities are left untouched).
#[derive(Debug, Clone)]
pub struct ClothSystem {
    config: ClothConfig,
    rows: usize,
    cols: usize,
    topology: SpringTopology,
    state: SystemState,
    pinned: Vec<usize>,
    swing_direction: f64,
    swing_rest_x: f64,
}

impl ClothSystem {
    /// Build the grid described by `config`.
    pub fn new(config: ClothConfig) -> SimResult<Self> {
        if config.spacing <= 0.0 || !config.spacing.is_finite() {
            return Err(SimError::InvalidConfig {
                name: "spacing",
                value: config.spacing,
            });
        }

        let rows = (config.height / config.spacing) as usize + 1;
        let cols = (config.width / config.spacing) as usize + 1;

        let mut topology = SpringTopology::new();
        let mut particles = Vec::with_capacity(rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                particles.push(ParticleState::at_rest(Point3::new(
                    config.spacing * j as f64,
                    0.0,
                    config.spacing * i as f64,
                )));
                topology.add_particle(config.mass)?;
            }
        }

        let structural_len = config.spacing;
        let shear_len = std::f64::consts::SQRT_2 * config.spacing;
        let flex_len = 2.0 * config.spacing;
        let index = |i: usize, j: usize| i * cols + j;

        for i in 0..rows {
            for j in 0..cols {
                // Structural springs to the previous row/column.
                if i > 0 {
                    add_or_warn(
                        &mut topology,
                        index(i - 1, j),
                        index(i, j),
                        structural_len,
                        config.structural_stiffness,
                    )?;
                }
                if j > 0 {
                    add_or_warn(
                        &mut topology,
                        index(i, j - 1),
                        index(i, j),
                        structural_len,
                        config.structural_stiffness,
                    )?;
                }

                // Shear springs across both cell diagonals.
                if i > 0 && j > 0 {
                    add_or_warn(
                        &mut topology,
                        index(i - 1, j - 1),
                        index(i, j),
                        shear_len,
                        config.shear_stiffness,
                    )?;
                    add_or_warn(
                        &mut topology,
                        index(i, j - 1),
                        index(i - 1, j),
                        shear_len,
                        config.shear_stiffness,
                    )?;
                }

                // Flex springs two cells back along each axis.
                if i > 1 {
                    add_or_warn(
                        &mut topology,
                        index(i - 2, j),
                        index(i, j),
                        flex_len,
                        config.flex_stiffness,
                    )?;
                }
                if j > 1 {
                    add_or_warn(
                        &mut topology,
                        index(i, j - 2),
                        index(i, j),
                        flex_len,
                        config.flex_stiffness,
                    )?;
                }
            }
        }

        let mut pinned = vec![index(0, 0)];
        if cols > 1 {
            pinned.push(index(0, cols - 1));
        }
        let swing_rest_x = particles[pinned[0]].position.x;

        Ok(Self {
            config,
            rows,
            cols,
            topology,
            state: SystemState::new(particles),
            pinned,
            swing_direction: 1.0,
            swing_rest_x,
        })
    }

    /// Grid row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid column count.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The system's configuration.
    #[must_use]
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// The fixed particle/spring topology.
    #[must_use]
    pub fn topology(&self) -> &SpringTopology {
        &self.topology
    }

    /// Flat particle index for grid cell `(row, col)`.
    pub fn grid_index(&self, row: usize, col: usize) -> SimResult<usize> {
        if row >= self.rows {
            return Err(SimError::IndexOutOfRange {
                index: row,
                count: self.rows,
            });
        }
        if col >= self.cols {
            return Err(SimError::IndexOutOfRange {
                index: col,
                count: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Whether the particle at `index` is a pinned corner.
    #[must_use]
    pub fn is_pinned(&self, index: usize) -> bool {
        self.pinned.contains(&index)
    }
}

/// Insert a spring, downgrading a duplicate to a warning.
///
/// Duplicate edges are a reported, non-fatal condition: the add is rejected
/// and topology construction continues. Everything else aborts the build.
fn add_or_warn(
    topology: &mut SpringTopology,
    a: usize,
    b: usize,
    rest_length: f64,
    stiffness: f64,
) -> SimResult<()> {
    match topology.add_spring(a, b, rest_length, stiffness) {
        Ok(_) => Ok(()),
        Err(SimError::DuplicateSpring { a, b }) => {
            warn!(a, b, "duplicate spring rejected");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

impl ParticleSystem for ClothSystem {
    fn state(&self) -> &SystemState {
        &self.state
    }

    /// Commit a new state.
    ///
    /// Integrators call this exactly once per step, so the post-integration
    /// corrections live here: sphere penetration is fixed by radial
    /// reprojection (velocity untouched), and the swing direction reverses
    /// when the pinned corners reach their bounds.
    fn set_state(&mut self, mut state: SystemState) {
        if let Some(obstacle) = self.config.obstacle {
            for particle in &mut state.particles {
                if obstacle.contains(&particle.position) {
                    particle.position = obstacle.reproject(&particle.position);
                }
            }
        }

        if let Some(swing) = self.config.swing {
            let offset = state.position(self.pinned[0]).x - self.swing_rest_x;
            if offset >= swing.amplitude {
                self.swing_direction = -1.0;
            } else if offset <= -swing.amplitude {
                self.swing_direction = 1.0;
            }
        }

        self.state = state;
    }

    fn eval_derivative(&self, state: &SystemState) -> Vec<StateDerivative> {
        let mut derivative = Vec::with_capacity(state.len());

        for index in 0..state.len() {
            if self.is_pinned(index) {
                let d_position = match self.config.swing {
                    Some(swing) => Vector3::new(self.swing_direction * swing.speed, 0.0, 0.0),
                    None => Vector3::zeros(),
                };
                derivative.push(StateDerivative::new(d_position, Vector3::zeros()));
                continue;
            }

            let mass = self.topology.mass(index).unwrap_or(self.config.mass);
            let velocity = state.velocity(index);

            let mut force = Vector3::new(0.0, -mass * self.config.gravity, 0.0);
            force -= self.config.drag * velocity;
            if let Some(wind) = self.config.wind {
                force += wind;
            }
            force += self
                .topology
                .spring_force_on(index, state)
                .unwrap_or_else(|_| Vector3::zeros());

            derivative.push(StateDerivative::new(velocity, force / mass));
        }

        derivative
    }
}
