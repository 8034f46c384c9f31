//! Physical data for the Sun and the nine classical solar-system bodies.
//! Source: NASA NSSDC planetary fact sheets.

use std::fmt;

/// Identifier for bodies in the simulation.
///
/// Ordered heliocentrically so maps keyed by `BodyId` iterate Sun first,
/// then Mercury outwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyId {
    /// All bodies orbiting the Sun (not including the Sun itself)
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    /// Whether this is the Sun
    pub fn is_sun(&self) -> bool {
        matches!(self, BodyId::Sun)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Published orbital elements of a body (meters, dimensionless eccentricity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub aphelion: f64,
    pub perihelion: f64,
    pub eccentricity: f64,
}

/// Static data for a body.
#[derive(Clone, Copy, Debug)]
pub struct BodyData {
    pub id: BodyId,
    pub mass: f64, // kg
    /// Orbital elements, `None` for the Sun.
    pub elements: Option<OrbitalElements>,
    /// Orbital speed at aphelion (m/s), zero for the Sun.
    pub aphelion_velocity: f64,
}

/// Sun's mass in kg.
pub const SUN_MASS: f64 = 1.9891e30;

const fn planet(
    id: BodyId,
    mass: f64,
    semi_major_axis: f64,
    aphelion: f64,
    perihelion: f64,
    eccentricity: f64,
    aphelion_velocity: f64,
) -> BodyData {
    BodyData {
        id,
        mass,
        elements: Some(OrbitalElements {
            semi_major_axis,
            aphelion,
            perihelion,
            eccentricity,
        }),
        aphelion_velocity,
    }
}

/// Get physical and orbital data for a body.
pub fn get_body_data(id: BodyId) -> BodyData {
    match id {
        BodyId::Sun => BodyData {
            id,
            mass: SUN_MASS,
            elements: None,
            aphelion_velocity: 0.0,
        },
        BodyId::Mercury => planet(id, 3.3010e23, 5.7909e10, 6.9818e10, 4.6e10, 0.2056, 3.866e4),
        BodyId::Venus => planet(id, 4.8673e24, 1.0821e11, 1.08941e11, 1.0748e11, 0.0068, 3.478e4),
        BodyId::Earth => planet(id, 5.97219e24, 1.49598e11, 1.521e11, 1.47095e11, 0.0167, 2.929e4),
        BodyId::Mars => planet(id, 6.4169e23, 2.27956e11, 2.49261e11, 2.0665e11, 0.0935, 2.197e4),
        BodyId::Jupiter => {
            planet(id, 1.89813e27, 7.78479e11, 8.16363e11, 7.40595e11, 0.0487, 1.244e4)
        }
        BodyId::Saturn => planet(id, 5.6832e26, 1.43204e12, 1.50653e12, 1.35755e12, 0.052, 9.14e3),
        BodyId::Uranus => planet(id, 8.6881e25, 2.86704e12, 3.00139e12, 2.7327e12, 0.0469, 6.49e3),
        BodyId::Neptune => {
            planet(id, 1.02409e26, 4.51495e12, 4.55886e12, 4.47105e12, 0.0097, 5.37e3)
        }
        BodyId::Pluto => {
            planet(id, 1.303e22, 5.869656e12, 7.304326e12, 4.434987e12, 0.2444, 3.71e3)
        }
    }
}
