//! Sun-planet gravitational force.
//!
//! Only the attraction between each planet and the Sun is modelled;
//! planets do not pull on each other.

use bevy::math::DVec3;

/// Separations below this many meters are treated as a collision with the
/// Sun's centre, where the inverse-square force is undefined.
pub const SINGULARITY_EPSILON: f64 = 1.0;

/// Product `G * m_planet * m_sun` (m³·kg·s⁻²), the numerator of Newton's law.
#[inline]
pub fn gravitational_parameter(g: f64, planet_mass: f64, sun_mass: f64) -> f64 {
    g * planet_mass * sun_mass
}

/// Distance between a planet and the Sun in meters.
#[inline]
pub fn separation(planet_pos: DVec3, sun_pos: DVec3) -> f64 {
    (planet_pos - sun_pos).length()
}

/// Force exerted by the Sun on a planet (N).
///
/// `F = -(GMm / r³) * d` with `d = planet - sun`, pointing from the planet
/// toward the Sun. `r³` is taken as `(|d|²)^1.5`.
///
/// Returns `None` when the separation is below [`SINGULARITY_EPSILON`] or
/// not finite. The reaction on the Sun is the negation of the result.
#[inline]
pub fn gravitational_force(planet_pos: DVec3, sun_pos: DVec3, gm_product: f64) -> Option<DVec3> {
    let delta = planet_pos - sun_pos;
    let r_squared = delta.length_squared();

    if !r_squared.is_finite() || r_squared < SINGULARITY_EPSILON * SINGULARITY_EPSILON {
        return None;
    }

    let r_cubed = r_squared.powf(1.5);
    Some(delta * (-gm_product / r_cubed))
}

/// Gravitational potential energy of a sun-planet pair (J).
///
/// `U = -GMm / r`. Returns `None` under the same conditions as
/// [`gravitational_force`].
pub fn potential_energy(planet_pos: DVec3, sun_pos: DVec3, gm_product: f64) -> Option<f64> {
    let r = separation(planet_pos, sun_pos);
    if !r.is_finite() || r < SINGULARITY_EPSILON {
        return None;
    }
    Some(-gm_product / r)
}
