//! Test utilities for the Sun-planet simulation.
//!
//! Provides fixtures for building small configurations and assertions for
//! verifying physical invariants like momentum and energy conservation.

use bevy::math::DVec3;

use crate::bodies::{BodyId, SUN_MASS, get_body_data};
use crate::config::SimulationConfig;
use crate::types::{AU_TO_METERS, G, SECONDS_PER_DAY};

/// Fixtures for creating test configurations.
pub mod fixtures {
    use super::*;

    /// Mass used for the single test planet (Earth's).
    pub fn planet_mass() -> f64 {
        get_body_data(BodyId::Earth).mass
    }

    /// Circular orbit speed at distance `r` for the Sun + test planet pair.
    ///
    /// v = sqrt(G (M + m) / r)
    pub fn circular_speed(r: f64) -> f64 {
        (G * (SUN_MASS + planet_mass()) / r).sqrt()
    }

    /// Sun and one planet (in Earth's slot) at `distance` meters with
    /// tangential `speed`, stepped once a day for `days`.
    pub fn sun_and_planet(distance: f64, speed: f64, days: f64) -> SimulationConfig {
        let mut config = SimulationConfig::sun_earth().with_duration(days * SECONDS_PER_DAY);
        config.initial_distances.insert(BodyId::Earth, distance);
        config.initial_velocities.insert(BodyId::Earth, speed);
        config
    }

    /// Sun and one planet on a circular orbit at `distance_au`.
    pub fn circular_orbit(distance_au: f64, days: f64) -> SimulationConfig {
        let r = distance_au * AU_TO_METERS;
        sun_and_planet(r, circular_speed(r), days)
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;
    use crate::diagnostics::relative_drift;

    /// Assert that total momentum changed by at most `tolerance * scale`.
    ///
    /// # Panics
    /// Panics if the change exceeds the tolerance.
    pub fn assert_momentum_conserved(initial: DVec3, current: DVec3, scale: f64, tolerance: f64) {
        let change = (current - initial).length();
        assert!(
            change <= scale * tolerance,
            "Momentum not conserved: initial={initial:?}, current={current:?}, change={change:.6e}, allowed={:.6e}",
            scale * tolerance
        );
    }

    /// Assert that energy is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative energy drift exceeds tolerance.
    pub fn assert_energy_conserved(initial_energy: f64, final_energy: f64, tolerance: f64) {
        let drift = relative_drift(initial_energy, final_energy);
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial_energy:.6e}, final={final_energy:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Orbital period of the Sun + test planet pair (Kepler's third law).
    ///
    /// T = 2π * sqrt(a³ / G(M + m))
    pub fn orbital_period(semi_major_axis: f64) -> f64 {
        use std::f64::consts::TAU;
        TAU * (semi_major_axis.powi(3) / (G * (SUN_MASS + fixtures::planet_mass()))).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SimulationState;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_fixture() {
        let config = fixtures::circular_orbit(1.0, 10.0);
        assert!(config.validate().is_ok());
        let state = SimulationState::from_config(&config).unwrap();
        let planet = state.body(BodyId::Earth).unwrap();
        assert_relative_eq!(planet.pos.x, AU_TO_METERS);
        assert_relative_eq!(planet.vel.y, fixtures::circular_speed(AU_TO_METERS));
    }

    #[test]
    fn test_earth_circular_speed() {
        // ~29.8 km/s at 1 AU
        let v = fixtures::circular_speed(AU_TO_METERS);
        assert_relative_eq!(v, 29_785.0, max_relative = 0.01);
    }

    #[test]
    fn test_orbital_period_earth() {
        let period = assertions::orbital_period(AU_TO_METERS);
        let year_seconds = 365.25 * SECONDS_PER_DAY;
        assert_relative_eq!(period, year_seconds, max_relative = 0.01);
    }
}
