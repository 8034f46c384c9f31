//! Conserved quantities and orbit geometry measured on a simulation state.
//!
//! Energy here uses the same Sun-planet pair model as the force, so the
//! planet-planet potential is absent on purpose.

use std::f64::consts::{PI, TAU};

use bevy::math::DVec3;

use crate::bodies::BodyId;
use crate::history::History;
use crate::physics::{gravitational_parameter, potential_energy};
use crate::state::SimulationState;

/// Total linear momentum of the system (kg·m/s).
pub fn total_momentum(state: &SimulationState) -> DVec3 {
    state
        .bodies()
        .fold(DVec3::ZERO, |acc, (_, body)| acc + body.momentum())
}

/// Total kinetic energy, Sun included (J).
pub fn kinetic_energy(state: &SimulationState) -> f64 {
    state.bodies().map(|(_, body)| body.kinetic_energy()).sum()
}

/// Sun-planet potential energy summed over planets (J).
///
/// `None` if any planet sits on the Sun.
pub fn potential_energy_total(state: &SimulationState) -> Option<f64> {
    let sun = state.sun();
    state
        .planets()
        .map(|(_, planet)| {
            let gm = gravitational_parameter(state.gravitational_constant, planet.mass, sun.mass);
            potential_energy(planet.pos, sun.pos, gm)
        })
        .sum()
}

/// Kinetic plus potential energy (J).
pub fn total_energy(state: &SimulationState) -> Option<f64> {
    Some(kinetic_energy(state) + potential_energy_total(state)?)
}

/// Heliocentric angle `atan2(y, x)` of a planet, in `(-π, π]`.
pub fn angular_position(planet_pos: DVec3, sun_pos: DVec3) -> f64 {
    let offset = planet_pos - sun_pos;
    offset.y.atan2(offset.x)
}

/// Shortest signed difference `to - from`, wrapped into `(-π, π]`.
pub fn unwrap_angle(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI { delta - TAU } else { delta }
}

/// Angle swept around the Sun by a planet over a recorded run (rad).
///
/// Starts from `initial_angle` (the angle before the first recorded step)
/// and accumulates the unwrapped step-to-step change, so full revolutions
/// add up instead of wrapping.
pub fn angular_travel(history: &History, body: BodyId, initial_angle: f64) -> Option<f64> {
    let planet = history.positions(body)?;
    let sun = history.positions(BodyId::Sun)?;

    let mut previous = initial_angle;
    let mut travelled = 0.0;
    for (&p, &s) in planet.iter().zip(sun) {
        let angle = angular_position(p, s);
        travelled += unwrap_angle(previous, angle);
        previous = angle;
    }
    Some(travelled)
}

/// Relative change between two values, absolute when `initial` is ~0.
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial.abs() > 1e-10 {
        ((current - initial) / initial).abs()
    } else {
        (current - initial).abs()
    }
}
