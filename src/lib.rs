//! Orrery - Sun-centred N-body simulator
//!
//! Fixed-step Euler integration of the Sun with Earth and Mars, or with
//! Mercury through Pluto, under Sun-planet gravity, plus closed-form orbit
//! ellipses from published orbital elements.

pub mod bodies;
pub mod config;
pub mod diagnostics;
pub mod ellipse;
pub mod error;
pub mod history;
pub mod physics;
pub mod playback;
pub mod simulation;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::SimulationConfig;
pub use error::{ConfigurationError, Result, SimulationError};
pub use simulation::{Simulation, SimulationRun, run};
