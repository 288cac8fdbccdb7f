//! Error types for the planets simulation.

use std::fmt;

use thiserror::Error;

/// Which body quantity went non-finite during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Acceleration,
    Velocity,
    Position,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Acceleration => "acceleration",
            Self::Velocity => "velocity",
            Self::Position => "position",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid radius {0}: must be finite and greater than zero")]
    InvalidRadius(f64),

    #[error("invalid mass {0}: must be finite and greater than zero")]
    InvalidMass(f64),

    #[error("invalid time step {0}: must be finite and not negative")]
    InvalidTimeStep(f64),

    #[error("non-finite {quantity} on body {index}")]
    NonFinite { index: usize, quantity: Quantity },

    #[error("source constants cover {found} bodies but the system has {expected}")]
    StaleConstants { expected: usize, found: usize },

    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
