//! Mutable state of a running simulation.

use std::collections::BTreeMap;

use bevy::math::DVec3;

use crate::bodies::BodyId;
use crate::config::SimulationConfig;
use crate::error::ConfigurationError;
use crate::types::BodyState;

/// Positions, velocities and clock of every body in a run.
///
/// The Sun is kept apart from the planets so it can never be missing; the
/// set of bodies is fixed once the state is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    sun: BodyState,
    planets: BTreeMap<BodyId, BodyState>,
    /// Gravitational constant of the run (m³·kg⁻¹·s⁻²)
    pub gravitational_constant: f64,
    /// Elapsed simulation time (s)
    pub time: f64,
    /// Fixed timestep (s)
    pub timestep: f64,
    /// Number of completed steps
    pub step: usize,
}

impl SimulationState {
    /// Build the initial state: Sun at rest at the origin, each planet on the
    /// +x axis at its initial distance moving along +y.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let sun_mass = config
            .body_masses
            .get(&BodyId::Sun)
            .copied()
            .ok_or(ConfigurationError::MissingSun)?;

        let planets = config
            .planets()
            .map(|id| {
                // validate() guarantees both entries exist
                let distance = config.initial_distances.get(&id).copied().unwrap_or_default();
                let speed = config.initial_velocities.get(&id).copied().unwrap_or_default();
                let mass = config.body_masses.get(&id).copied().unwrap_or_default();
                let state = BodyState::new(
                    DVec3::new(distance, 0.0, 0.0),
                    DVec3::new(0.0, speed, 0.0),
                    mass,
                );
                (id, state)
            })
            .collect();

        Ok(Self {
            sun: BodyState::at_rest(sun_mass),
            planets,
            gravitational_constant: config.gravitational_constant,
            time: 0.0,
            timestep: config.timestep_seconds,
            step: 0,
        })
    }

    /// The Sun's state.
    pub fn sun(&self) -> &BodyState {
        &self.sun
    }

    pub(crate) fn sun_mut(&mut self) -> &mut BodyState {
        &mut self.sun
    }

    /// State of one body, `None` if it is not part of this run.
    pub fn body(&self, id: BodyId) -> Option<&BodyState> {
        if id.is_sun() {
            Some(&self.sun)
        } else {
            self.planets.get(&id)
        }
    }

    /// Planets in heliocentric order.
    pub fn planets(&self) -> impl Iterator<Item = (BodyId, &BodyState)> {
        self.planets.iter().map(|(&id, state)| (id, state))
    }

    pub(crate) fn planets_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut BodyState)> {
        self.planets.iter_mut().map(|(&id, state)| (id, state))
    }

    /// Every body, Sun first.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &BodyState)> {
        std::iter::once((BodyId::Sun, &self.sun)).chain(self.planets())
    }

    /// Identifiers of every body, Sun first.
    pub fn body_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies().map(|(id, _)| id)
    }

    /// Number of bodies including the Sun.
    pub fn body_count(&self) -> usize {
        self.planets.len() + 1
    }
}
