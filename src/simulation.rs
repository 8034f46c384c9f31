//! Time-bounded simulation runner.
//!
//! Owns a [`SimulationState`] and its [`History`], steps until the
//! configured horizon and hands both back as a finished [`SimulationRun`].

use bevy::log::{debug, error, info, warn};
use bevy::prelude::Resource;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::history::History;
use crate::physics;
use crate::state::SimulationState;
use crate::types::seconds_to_days;

/// A simulation in progress.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    state: SimulationState,
    history: History,
}

impl Simulation {
    /// Validate the configuration and build the initial state.
    ///
    /// Fails before any step runs if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let state = SimulationState::from_config(&config)?;
        let history = History::with_capacity(state.body_ids(), config.expected_steps());
        Ok(Self {
            config,
            state,
            history,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the elapsed time has reached the horizon.
    pub fn is_finished(&self) -> bool {
        self.state.time >= self.config.total_duration_seconds
    }

    /// Advance by exactly one timestep, regardless of the horizon.
    pub fn step(&mut self) -> Result<()> {
        physics::step(&mut self.state, &mut self.history)
    }

    /// Step until the horizon is reached and return the finished run.
    pub fn run(mut self) -> Result<SimulationRun> {
        info!(
            "Simulating {} bodies for {:.1} days ({} steps of {} s)",
            self.state.body_count(),
            seconds_to_days(self.config.total_duration_seconds),
            self.config.expected_steps(),
            self.config.timestep_seconds,
        );

        let year = self.config.year_seconds();
        let mut next_report = year;

        while self.state.time < self.config.total_duration_seconds {
            if let Err(err) = self.step() {
                if let SimulationError::Singularity { body, distance, .. } = &err {
                    warn!("{body} came within {distance:.3e} m of the Sun");
                }
                error!("Simulation aborted at step {}: {}", self.state.step, err);
                return Err(err);
            }

            if self.state.time >= next_report {
                debug!(
                    "Year {:.0} complete ({} steps)",
                    next_report / year,
                    self.state.step
                );
                next_report += year;
            }
        }

        info!(
            "Simulation complete: {} steps, {:.1} days",
            self.state.step,
            seconds_to_days(self.state.time)
        );

        Ok(SimulationRun {
            config: self.config,
            final_state: self.state,
            history: self.history,
        })
    }
}

/// Result of a completed run. The history no longer changes.
#[derive(Resource, Clone, Debug)]
pub struct SimulationRun {
    pub config: SimulationConfig,
    pub final_state: SimulationState,
    history: History,
}

impl SimulationRun {
    /// Recorded trajectories, read-only.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of steps executed.
    pub fn step_count(&self) -> usize {
        self.history.step_count()
    }
}

/// Run a configuration to completion.
pub fn run(config: SimulationConfig) -> Result<SimulationRun> {
    Simulation::new(config)?.run()
}
