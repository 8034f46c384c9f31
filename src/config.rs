//! Simulation configuration and hardcoded presets.
//!
//! The physical constants, per-body initial conditions, timestep and horizon
//! of a run live in one [`SimulationConfig`]. Presets reproduce the two
//! simulated systems; tests build variants in code.

use std::collections::BTreeMap;

use bevy::prelude::Resource;

use crate::bodies::{BodyId, get_body_data};
use crate::error::{ConfigField, ConfigurationError};
use crate::types::{
    FULL_SYSTEM_YEAR_DAYS, G, SECONDS_PER_DAY, SIMULATED_YEARS, TROPICAL_YEAR_DAYS,
};

/// Configuration for a simulation run.
///
/// `initial_distances` and `initial_velocities` are keyed by planet only;
/// every planet starts on the +x axis at its distance, moving along +y.
/// The Sun always starts at the origin, at rest.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant (m³·kg⁻¹·s⁻²)
    pub gravitational_constant: f64,
    /// Mass of every body in the run, Sun included (kg)
    pub body_masses: BTreeMap<BodyId, f64>,
    /// Starting distance from the Sun per planet (m)
    pub initial_distances: BTreeMap<BodyId, f64>,
    /// Starting tangential speed per planet (m/s)
    pub initial_velocities: BTreeMap<BodyId, f64>,
    /// Fixed integration step (s). Default: 1 day.
    pub timestep_seconds: f64,
    /// Simulated horizon (s)
    pub total_duration_seconds: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::two_planet()
    }
}

impl SimulationConfig {
    /// Sun plus the given planets at aphelion with published masses and speeds.
    pub fn for_planets(planets: &[BodyId], days_per_year: f64) -> Self {
        let mut body_masses = BTreeMap::new();
        let mut initial_distances = BTreeMap::new();
        let mut initial_velocities = BTreeMap::new();

        body_masses.insert(BodyId::Sun, get_body_data(BodyId::Sun).mass);
        for &id in planets.iter().filter(|id| !id.is_sun()) {
            let data = get_body_data(id);
            body_masses.insert(id, data.mass);
            if let Some(elements) = data.elements {
                initial_distances.insert(id, elements.aphelion);
            }
            initial_velocities.insert(id, data.aphelion_velocity);
        }

        Self {
            gravitational_constant: G,
            body_masses,
            initial_distances,
            initial_velocities,
            timestep_seconds: SECONDS_PER_DAY,
            total_duration_seconds: SIMULATED_YEARS * days_per_year * SECONDS_PER_DAY,
        }
    }

    /// Sun, Earth and Mars over five tropical years.
    pub fn two_planet() -> Self {
        Self::for_planets(&[BodyId::Earth, BodyId::Mars], TROPICAL_YEAR_DAYS)
    }

    /// Sun plus Mercury through Pluto over five 365.422-day years.
    pub fn full_system() -> Self {
        Self::for_planets(BodyId::PLANETS, FULL_SYSTEM_YEAR_DAYS)
    }

    /// Sun and Earth only, for two-body checks.
    pub fn sun_earth() -> Self {
        Self::for_planets(&[BodyId::Earth], TROPICAL_YEAR_DAYS)
    }

    /// Replace the timestep, keeping the horizon.
    pub fn with_timestep(mut self, timestep_seconds: f64) -> Self {
        self.timestep_seconds = timestep_seconds;
        self
    }

    /// Replace the horizon, keeping the timestep.
    pub fn with_duration(mut self, total_duration_seconds: f64) -> Self {
        self.total_duration_seconds = total_duration_seconds;
        self
    }

    /// Planets in the run, in heliocentric order.
    pub fn planets(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.body_masses.keys().copied().filter(|id| !id.is_sun())
    }

    /// Number of steps `while t < duration { t += dt }` executes.
    ///
    /// Mirrors the accumulated-time comparison of the integration loop
    /// instead of dividing, so rounding matches the actual run.
    pub fn expected_steps(&self) -> usize {
        let mut time = 0.0;
        let mut steps = 0;
        while time < self.total_duration_seconds {
            time += self.timestep_seconds;
            steps += 1;
        }
        steps
    }

    /// Length of one simulated year: the horizon split into
    /// [`SIMULATED_YEARS`] parts, so it follows the preset's year length.
    pub fn year_seconds(&self) -> f64 {
        self.total_duration_seconds / SIMULATED_YEARS
    }

    /// Check the configuration before any step executes.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let g = self.gravitational_constant;
        if !(g.is_finite() && g > 0.0) {
            return Err(ConfigurationError::NonPositiveGravitationalConstant(g));
        }

        let dt = self.timestep_seconds;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigurationError::InvalidTimestep(dt));
        }

        let duration = self.total_duration_seconds;
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(ConfigurationError::InvalidDuration(duration));
        }

        if !self.body_masses.contains_key(&BodyId::Sun) {
            return Err(ConfigurationError::MissingSun);
        }

        for (&body, &mass) in &self.body_masses {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(ConfigurationError::NonPositiveMass { body, mass });
            }
        }

        for body in self.planets() {
            let distance = *self.initial_distances.get(&body).ok_or(
                ConfigurationError::MissingInitialCondition {
                    body,
                    field: ConfigField::InitialDistance,
                },
            )?;
            if !(distance.is_finite() && distance > 0.0) {
                return Err(ConfigurationError::NonPositiveDistance { body, distance });
            }

            let speed = *self.initial_velocities.get(&body).ok_or(
                ConfigurationError::MissingInitialCondition {
                    body,
                    field: ConfigField::InitialVelocity,
                },
            )?;
            if !speed.is_finite() {
                return Err(ConfigurationError::NonFiniteVelocity { body });
            }
        }

        // Initial conditions for bodies without a mass, or for the Sun itself,
        // would be silently ignored; reject them instead.
        let stray = |map: &BTreeMap<BodyId, f64>, field: ConfigField| {
            map.keys()
                .find(|id| id.is_sun() || !self.body_masses.contains_key(id))
                .map(|&body| ConfigurationError::UnknownBody { body, field })
        };
        if let Some(err) = stray(&self.initial_distances, ConfigField::InitialDistance) {
            return Err(err);
        }
        if let Some(err) = stray(&self.initial_velocities, ConfigField::InitialVelocity) {
            return Err(err);
        }

        Ok(())
    }
}
