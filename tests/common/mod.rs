//! Common test utilities for integration tests.

#![allow(dead_code)]

use orrery::SimulationConfig;
use orrery::bodies::{BodyId, SUN_MASS};
use orrery::diagnostics::angular_travel;
use orrery::history::History;
use orrery::types::{G, SECONDS_PER_DAY};

/// The Sun-Earth scenario from the fact sheet: aphelion 1.521e11 m,
/// 29290 m/s tangential, one-day steps.
pub fn sun_earth_days(days: f64) -> SimulationConfig {
    SimulationConfig::sun_earth().with_duration(days * SECONDS_PER_DAY)
}

/// Angle Earth has swept around the (moving) Sun over a recorded run.
pub fn earth_travel(history: &History) -> f64 {
    angular_travel(history, BodyId::Earth, 0.0).expect("Earth and Sun are tracked")
}

/// First step index at which the swept angle reaches a full turn.
pub fn first_full_turn(history: &History, body: BodyId) -> Option<usize> {
    use orrery::diagnostics::{angular_position, unwrap_angle};
    use std::f64::consts::TAU;

    let planet = history.positions(body)?;
    let sun = history.positions(BodyId::Sun)?;
    // Every planet starts on the +x axis
    let mut previous = 0.0;
    let mut travelled = 0.0;
    for (i, (&p, &s)) in planet.iter().zip(sun).enumerate() {
        let angle = angular_position(p, s);
        travelled += unwrap_angle(previous, angle);
        previous = angle;
        if travelled >= TAU {
            return Some(i);
        }
    }
    None
}

/// Orbital period from Kepler's third law for a planet of mass `m` (s).
pub fn kepler_period(semi_major_axis: f64, planet_mass: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / (G * (SUN_MASS + planet_mass))).sqrt()
}
