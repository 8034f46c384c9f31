//! Core physics types and constants for the heliocentric simulation.

use bevy::math::DVec3;

// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.6743e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Tropical year in days, used for the Sun-Earth-Mars horizon.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Year length used for the full solar-system horizon.
///
/// Differs from [`TROPICAL_YEAR_DAYS`] in the third decimal. Kept as-is: it
/// changes the final step count of the full-system run (1828 vs 1827).
pub const FULL_SYSTEM_YEAR_DAYS: f64 = 365.422;

/// Number of years both presets simulate.
pub const SIMULATED_YEARS: f64 = 5.0;

/// Physical state of a body in the simulation.
/// Uses f64 (DVec3) for physics accuracy over solar system scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Position in meters (heliocentric frame at t = 0)
    pub pos: DVec3,
    /// Velocity in meters per second
    pub vel: DVec3,
    /// Mass in kilograms
    pub mass: f64,
}

impl BodyState {
    /// Create a new body state
    pub fn new(pos: DVec3, vel: DVec3, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Body at rest at the origin.
    pub fn at_rest(mass: f64) -> Self {
        Self {
            pos: DVec3::ZERO,
            vel: DVec3::ZERO,
            mass,
        }
    }

    /// Linear momentum (kg·m/s)
    pub fn momentum(&self) -> DVec3 {
        self.vel * self.mass
    }

    /// Kinetic energy (J)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Position in AU
    pub fn pos_au(&self) -> DVec3 {
        self.pos * METERS_TO_AU
    }

    /// Velocity in km/s
    pub fn vel_km_per_s(&self) -> DVec3 {
        self.vel * 0.001
    }
}

/// Convert days to seconds
pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_PER_DAY
}

/// Convert seconds to days
pub fn seconds_to_days(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY
}
