//! Error types for configuration validation and integration.

use crate::bodies::BodyId;

/// Initial-condition field a configuration error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    Mass,
    InitialDistance,
    InitialVelocity,
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigField::Mass => "mass",
            ConfigField::InitialDistance => "initial distance",
            ConfigField::InitialVelocity => "initial velocity",
        })
    }
}

/// Rejected configuration, raised before any step executes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("configuration has no mass for the Sun")]
    MissingSun,

    #[error("gravitational constant must be positive and finite, got {0}")]
    NonPositiveGravitationalConstant(f64),

    #[error("{body} mass must be positive and finite, got {mass}")]
    NonPositiveMass { body: BodyId, mass: f64 },

    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    #[error("invalid duration: {0} (must be non-negative and finite)")]
    InvalidDuration(f64),

    #[error("{body} has no {field}")]
    MissingInitialCondition { body: BodyId, field: ConfigField },

    #[error("{body} has a {field} but no mass")]
    UnknownBody { body: BodyId, field: ConfigField },

    #[error("{body} initial distance must be positive and finite, got {distance}")]
    NonPositiveDistance { body: BodyId, distance: f64 },

    #[error("{body} initial velocity is not finite")]
    NonFiniteVelocity { body: BodyId },

    #[error("invalid orbital elements for {body}: {reason}")]
    InvalidOrbitalElements { body: BodyId, reason: &'static str },
}

/// Any failure surfaced by the simulation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("{body} reached the Sun (separation {distance} m at t = {time} s)")]
    Singularity { body: BodyId, distance: f64, time: f64 },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
