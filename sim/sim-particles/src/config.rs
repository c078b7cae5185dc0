//! Configuration for the built-in particle systems.
//!
//! All simulation parameters travel in explicit config structs handed to the
//! system constructors; there is no ambient global state.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a pendulum chain.
///
/// Defaults: gravity 9.8, rest length and spacing 0.5, stiffness 50,
/// mass 1.5, drag 4, four particles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendulumConfig {
    /// Number of particles in the chain (the first is pinned).
    pub particle_count: usize,
    /// Initial spacing between consecutive particles along +X.
    pub spacing: f64,
    /// Mass per particle.
    pub mass: f64,
    /// Rest length of the connecting springs.
    pub rest_length: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Gravitational acceleration along -Y.
    pub gravity: f64,
    /// Viscous drag coefficient.
    pub drag: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            particle_count: 4,
            spacing: 0.5,
            mass: 1.5,
            rest_length: 0.5,
            stiffness: 50.0,
            gravity: 9.8,
            drag: 4.0,
        }
    }
}

impl PendulumConfig {
    /// Set the particle count.
    #[must_use]
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    /// Set the gravitational acceleration.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the drag coefficient.
    #[must_use]
    pub fn with_drag(mut self, drag: f64) -> Self {
        self.drag = drag;
        self
    }

    /// Set the spring stiffness.
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the initial particle spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the spring rest length.
    #[must_use]
    pub fn with_rest_length(mut self, rest_length: f64) -> Self {
        self.rest_length = rest_length;
        self
    }
}

/// A static sphere obstacle for cloth collision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereObstacle {
    /// Sphere center.
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
}

impl SphereObstacle {
    /// Create a sphere obstacle.
    #[must_use]
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `position` lies strictly inside the sphere.
    #[must_use]
    pub fn contains(&self, position: &Point3<f64>) -> bool {
        (position - self.center).norm() < self.radius
    }

    /// Project a position radially onto the sphere surface.
    ///
    /// The result is colinear with the center-to-position direction at
    /// exactly `radius` from the center. A position coincident with the
    /// center has no radial direction; it is pushed out along +Y.
    ///
    /// This is a positional correction only; the caller leaves the
    /// particle's velocity unmodified.
    #[must_use]
    pub fn reproject(&self, position: &Point3<f64>) -> Point3<f64> {
        let offset = position - self.center;
        match offset.try_normalize(1e-12) {
            Some(direction) => self.center + direction * self.radius,
            None => self.center + Vector3::y() * self.radius,
        }
    }
}

/// Scripted oscillation of the cloth's pinned particles along +X.
///
/// Pinned particles move at constant `speed`, reversing direction whenever
/// their displacement from the rest position reaches `amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwingConfig {
    /// Drive speed along the X axis.
    pub speed: f64,
    /// Maximum displacement from the rest position before reversing.
    pub amplitude: f64,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            amplitude: 0.5,
        }
    }
}

/// Configuration for a rectangular cloth grid.
///
/// The defaults hang stably under RK4 at step sizes around 0.01-0.04.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig {
    /// Cloth height (rows span, along +Z).
    pub height: f64,
    /// Cloth width (columns span, along +X).
    pub width: f64,
    /// Grid spacing between adjacent particles.
    pub spacing: f64,
    /// Mass per particle.
    pub mass: f64,
    /// Stiffness of structural (4-neighbor) springs.
    pub structural_stiffness: f64,
    /// Stiffness of shear (diagonal) springs.
    pub shear_stiffness: f64,
    /// Stiffness of flex (two-apart) springs.
    pub flex_stiffness: f64,
    /// Gravitational acceleration along -Y.
    pub gravity: f64,
    /// Viscous drag coefficient.
    pub drag: f64,
    /// Optional uniform wind force applied to every free particle.
    pub wind: Option<Vector3<f64>>,
    /// Optional scripted swing of the pinned particles.
    pub swing: Option<SwingConfig>,
    /// Optional sphere obstacle with positional collision response.
    pub obstacle: Option<SphereObstacle>,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            height: 2.0,
            width: 2.0,
            spacing: 0.25,
            mass: 0.2,
            structural_stiffness: 80.0,
            shear_stiffness: 40.0,
            flex_stiffness: 20.0,
            gravity: 9.8,
            drag: 0.8,
            wind: None,
            swing: None,
            obstacle: None,
        }
    }
}

impl ClothConfig {
    /// Set the grid spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the overall cloth dimensions.
    #[must_use]
    pub fn with_size(mut self, height: f64, width: f64) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Enable a uniform wind force.
    #[must_use]
    pub fn with_wind(mut self, wind: Vector3<f64>) -> Self {
        self.wind = Some(wind);
        self
    }

    /// Enable the pinned-corner swing.
    #[must_use]
    pub fn with_swing(mut self, swing: SwingConfig) -> Self {
        self.swing = Some(swing);
        self
    }

    /// Enable sphere collision.
    #[must_use]
    pub fn with_obstacle(mut self, obstacle: SphereObstacle) -> Self {
        self.obstacle = Some(obstacle);
        self
    }
}
