//! Property-based tests for the integrator using proptest.
//!
//! These tests verify physical invariants across a range of orbits.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{gravitational_force, gravitational_parameter};
use crate::diagnostics::{relative_drift, total_energy, total_momentum};
use crate::simulation::{Simulation, run};
use crate::test_utils::{assertions, fixtures};
use crate::types::{AU_TO_METERS, SECONDS_PER_DAY};

/// Largest relative energy excursion over a run.
fn max_energy_drift(mut sim: Simulation) -> f64 {
    let initial = total_energy(sim.state()).unwrap();
    let mut worst: f64 = 0.0;
    while !sim.is_finished() {
        sim.step().unwrap();
        let current = total_energy(sim.state()).unwrap();
        worst = worst.max(relative_drift(initial, current));
    }
    worst
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Total momentum is constant: the Sun's motion comes only from
    /// reaction forces.
    #[test]
    fn prop_momentum_conservation(
        distance_au in 0.4f64..5.0,
        speed_factor in 0.7f64..1.2,
        days in 10.0f64..200.0,
    ) {
        let r = distance_au * AU_TO_METERS;
        let config = fixtures::sun_and_planet(r, fixtures::circular_speed(r) * speed_factor, days);
        let initial = crate::state::SimulationState::from_config(&config).unwrap();

        let result = run(config).unwrap();

        let scale = fixtures::planet_mass() * fixtures::circular_speed(r);
        let change = (total_momentum(&result.final_state) - total_momentum(&initial)).length();
        prop_assert!(
            change <= scale * 1e-10,
            "Momentum drifted by {:.3e} (scale {:.3e})",
            change, scale
        );
    }

    /// Energy error of the semi-implicit scheme shrinks with the timestep.
    #[test]
    fn prop_energy_drift_shrinks_with_timestep(
        distance_au in 0.7f64..3.0,
    ) {
        let coarse = fixtures::circular_orbit(distance_au, 120.0);
        let fine = coarse.clone().with_timestep(SECONDS_PER_DAY / 4.0);

        let coarse_drift = max_energy_drift(Simulation::new(coarse).unwrap());
        let fine_drift = max_energy_drift(Simulation::new(fine).unwrap());

        prop_assert!(
            fine_drift < coarse_drift,
            "Finer step should drift less: dt/4 {:.3e} vs dt {:.3e}",
            fine_drift, coarse_drift
        );
        prop_assert!(coarse_drift < 1e-2, "1-day step drift {:.3e} too large", coarse_drift);
    }

    /// Every body records one sample per executed step.
    #[test]
    fn prop_history_length_matches_steps(
        days in 0.0f64..60.0,
        timestep_hours in 1.0f64..48.0,
    ) {
        let config = fixtures::circular_orbit(1.0, days)
            .with_timestep(timestep_hours * 3600.0);
        let expected = config.expected_steps();

        let result = run(config).unwrap();

        prop_assert_eq!(result.step_count(), expected);
        prop_assert_eq!(result.final_state.step, expected);
        for id in result.history().bodies() {
            prop_assert_eq!(result.history().positions(id).unwrap().len(), expected);
        }
    }

    /// The force points at the Sun and falls off with the square of distance.
    #[test]
    fn prop_force_is_attractive_inverse_square(
        x in -1e12f64..1e12,
        y in -1e12f64..1e12,
        z in -1e11f64..1e11,
    ) {
        let offset = DVec3::new(x, y, z);
        prop_assume!(offset.length() > 1e6);

        let gm = gravitational_parameter(6.6743e-11, 5.97219e24, 1.9891e30);
        let sun = DVec3::new(3.0e8, -1.0e8, 0.0);
        let force = gravitational_force(sun + offset, sun, gm).unwrap();
        let doubled = gravitational_force(sun + offset * 2.0, sun, gm).unwrap();

        let cos = force.normalize().dot(offset.normalize());
        prop_assert!((cos + 1.0).abs() < 1e-9, "Force not toward Sun: cos = {}", cos);

        let ratio = force.length() / doubled.length();
        prop_assert!((ratio - 4.0).abs() < 1e-6, "Inverse-square ratio {}", ratio);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_energy_conserved_over_one_orbit() {
        let config = fixtures::circular_orbit(1.0, 365.0);
        let initial = crate::state::SimulationState::from_config(&config).unwrap();
        let result = run(config).unwrap();

        assertions::assert_energy_conserved(
            total_energy(&initial).unwrap(),
            total_energy(&result.final_state).unwrap(),
            1e-3,
        );
    }

    #[test]
    fn test_momentum_conserved_full_system() {
        let config = crate::config::SimulationConfig::full_system();
        let initial = crate::state::SimulationState::from_config(&config).unwrap();
        let result = run(config).unwrap();

        let p0 = total_momentum(&initial);
        assertions::assert_momentum_conserved(
            p0,
            total_momentum(&result.final_state),
            p0.length(),
            1e-10,
        );
    }
}
