//! Error types for particle systems.

use thiserror::Error;

/// Result type for particle system operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while building or driving a particle system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// The unordered particle pair already carries a spring.
    ///
    /// Non-fatal by policy: the caller rejects the redundant edge, logs,
    /// and keeps building the rest of the topology.
    #[error("spring between particles {a} and {b} already exists")]
    DuplicateSpring {
        /// Lower particle index of the pair.
        a: usize,
        /// Higher particle index of the pair.
        b: usize,
    },

    /// A particle or grid index is out of range.
    #[error("index {index} out of range ({count} available)")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of valid entries.
        count: usize,
    },

    /// Particle mass must be positive and finite.
    #[error("invalid mass: {0} (must be positive and finite)")]
    InvalidMass(f64),

    /// A spring cannot connect a particle to itself.
    #[error("spring endpoints must differ (both are {0})")]
    SelfSpring(usize),

    /// A spring parameter is not positive and finite.
    #[error("invalid spring {name}: {value} (must be positive and finite)")]
    InvalidSpringParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A system configuration value is unusable.
    #[error("invalid configuration {name}: {value}")]
    InvalidConfig {
        /// Which configuration field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
