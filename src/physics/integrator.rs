//! Fixed-step Euler integration of the Sun-planet system.
//!
//! Semi-implicit (symplectic) Euler: velocity is updated from the force,
//! then position from the updated velocity. The Sun moves last, driven by
//! the reaction to every planet's force in the same step.

use bevy::math::DVec3;

use super::gravity::{gravitational_force, gravitational_parameter, separation};
use crate::bodies::BodyId;
use crate::error::{Result, SimulationError};
use crate::history::History;
use crate::state::SimulationState;

/// Advance the system by one timestep and record every body's new position.
///
/// All forces are evaluated from start-of-step positions before any body
/// moves, so on a singularity error neither `state` nor `history` changes.
pub fn step(state: &mut SimulationState, history: &mut History) -> Result<()> {
    let dt = state.timestep;
    let forces = planet_forces(state)?;

    let mut sun_force = DVec3::ZERO;
    let mut samples = Vec::with_capacity(state.body_count());

    for ((id, planet), &force) in state.planets_mut().zip(&forces) {
        planet.vel += force * (dt / planet.mass);
        planet.pos += planet.vel * dt;
        samples.push((id, planet.pos));
        sun_force += force;
    }

    // Newton's third law: the Sun feels the negated sum of the planet forces
    let sun = state.sun_mut();
    sun.vel += sun_force * (-dt / sun.mass);
    sun.pos += sun.vel * dt;
    samples.push((BodyId::Sun, sun.pos));

    history.record_step(samples);
    state.time += dt;
    state.step += 1;

    Ok(())
}

/// Force on each planet from the Sun, in the state's planet order.
pub fn planet_forces(state: &SimulationState) -> Result<Vec<DVec3>> {
    let sun = state.sun();
    state
        .planets()
        .map(|(id, planet)| {
            let gm = gravitational_parameter(state.gravitational_constant, planet.mass, sun.mass);
            gravitational_force(planet.pos, sun.pos, gm).ok_or_else(|| {
                SimulationError::Singularity {
                    body: id,
                    distance: separation(planet.pos, sun.pos),
                    time: state.time,
                }
            })
        })
        .collect()
}
