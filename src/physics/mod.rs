//! Physics core: Sun-planet gravity and the fixed-step Euler integrator.
//!
//! The force model and the integrator are plain functions over an explicit
//! [`SimulationState`](crate::state::SimulationState); nothing here keeps
//! global state, so independent runs can proceed side by side.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{
    SINGULARITY_EPSILON, gravitational_force, gravitational_parameter, potential_energy,
    separation,
};
pub use integrator::{planet_forces, step};
