//! Idealized Keplerian ellipses from published orbital elements.
//!
//! Independent of the integrator: curves are closed-form and carry no time.
//!
//! The semi-minor axis is estimated two ways and averaged:
//! - geometric mean of aphelion and perihelion: `b = sqrt(Q * q)`
//! - from the eccentricity: `b = a * sqrt(1 - e²)`
//!
//! Published elements are rounded independently, so the two estimates differ
//! slightly; the average is a smoothing choice, not an identity.
//!
//! Centre-origin radius at angle θ:
//! `r(θ) = a b / sqrt((a sin θ)² + (b cos θ)²)`, then `x = r cos θ`,
//! `y = r sin θ`.

use std::f64::consts::TAU;

use bevy::math::DVec2;
use wide::f64x4;

use crate::bodies::{BodyId, OrbitalElements, get_body_data};
use crate::error::{ConfigurationError, Result};

/// Spacing of the angle grid in radians.
pub const ANGLE_STEP: f64 = 0.01;

/// Orbit curve of one body.
#[derive(Clone, Debug)]
pub struct OrbitCurve {
    pub body: BodyId,
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// Averaged semi-minor axis in meters
    pub semi_minor_axis: f64,
    /// Angle of each sample in radians
    pub theta: Vec<f64>,
    /// Radius of each sample in meters
    pub radius: Vec<f64>,
    /// Cartesian points in meters, same order as `theta`
    pub points: Vec<DVec2>,
}

impl OrbitCurve {
    /// Polar samples `(θ, r)` in grid order.
    pub fn polar(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.theta.iter().copied().zip(self.radius.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Semi-minor axis as the geometric mean of aphelion and perihelion.
pub fn semi_minor_from_apsides(aphelion: f64, perihelion: f64) -> f64 {
    (aphelion * perihelion).sqrt()
}

/// Semi-minor axis from semi-major axis and eccentricity.
pub fn semi_minor_from_eccentricity(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Average of the two semi-minor axis estimates.
pub fn semi_minor_axis(elements: &OrbitalElements) -> f64 {
    let from_apsides = semi_minor_from_apsides(elements.aphelion, elements.perihelion);
    let from_eccentricity =
        semi_minor_from_eccentricity(elements.semi_major_axis, elements.eccentricity);
    (from_apsides + from_eccentricity) / 2.0
}

/// Evenly spaced angles `0, ANGLE_STEP, ... < 2π` (629 samples).
pub fn angle_grid() -> Vec<f64> {
    let count = (TAU / ANGLE_STEP).ceil() as usize;
    (0..count).map(|i| i as f64 * ANGLE_STEP).collect()
}

/// Centre-origin ellipse radius at angle `theta`.
#[inline]
pub fn radius_at(semi_major_axis: f64, semi_minor_axis: f64, theta: f64) -> f64 {
    let (sin, cos) = theta.sin_cos();
    let a_sin = semi_major_axis * sin;
    let b_cos = semi_minor_axis * cos;
    semi_major_axis * semi_minor_axis / (a_sin * a_sin + b_cos * b_cos).sqrt()
}

/// Focus-origin (Sun-centred) radius at true anomaly `theta`.
///
/// `r = a(1 - e²) / (1 + e cos θ)`: perihelion `a(1 - e)` at 0, aphelion
/// `a(1 + e)` at π.
#[inline]
pub fn focal_radius(semi_major_axis: f64, eccentricity: f64, theta: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * theta.cos())
}

/// Radii for a whole angle grid, four angles per SIMD lane group.
pub fn radii(semi_major_axis: f64, semi_minor_axis: f64, theta: &[f64]) -> Vec<f64> {
    let a = f64x4::splat(semi_major_axis);
    let b = f64x4::splat(semi_minor_axis);
    let ab = a * b;

    let mut out = Vec::with_capacity(theta.len());
    let mut chunks = theta.chunks_exact(4);
    for chunk in &mut chunks {
        let t = f64x4::new([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let (sin, cos) = t.sin_cos();
        let a_sin = a * sin;
        let b_cos = b * cos;
        let r = ab / (a_sin * a_sin + b_cos * b_cos).sqrt();
        out.extend_from_slice(&r.to_array());
    }
    out.extend(
        chunks
            .remainder()
            .iter()
            .map(|&t| radius_at(semi_major_axis, semi_minor_axis, t)),
    );
    out
}

fn validate(body: BodyId, elements: &OrbitalElements) -> std::result::Result<(), ConfigurationError> {
    let invalid = |reason: &'static str| ConfigurationError::InvalidOrbitalElements { body, reason };

    if !(elements.semi_major_axis.is_finite() && elements.semi_major_axis > 0.0) {
        return Err(invalid("semi-major axis must be positive"));
    }
    if !(elements.perihelion.is_finite() && elements.perihelion > 0.0) {
        return Err(invalid("perihelion must be positive"));
    }
    if !(elements.aphelion.is_finite() && elements.aphelion >= elements.perihelion) {
        return Err(invalid("aphelion must not be below perihelion"));
    }
    if !(0.0..1.0).contains(&elements.eccentricity) {
        return Err(invalid("eccentricity must be in [0, 1)"));
    }
    Ok(())
}

/// Sample the orbit of one body over the standard angle grid.
pub fn orbit_curve(body: BodyId, elements: &OrbitalElements) -> Result<OrbitCurve> {
    validate(body, elements)?;

    let a = elements.semi_major_axis;
    let b = semi_minor_axis(elements);
    let theta = angle_grid();
    let radius = radii(a, b, &theta);
    let points = theta
        .iter()
        .zip(&radius)
        .map(|(&t, &r)| {
            let (sin, cos) = t.sin_cos();
            DVec2::new(r * cos, r * sin)
        })
        .collect();

    Ok(OrbitCurve {
        body,
        semi_major_axis: a,
        semi_minor_axis: b,
        theta,
        radius,
        points,
    })
}

/// Orbit curves of all nine bodies, Mercury outwards.
pub fn solar_system_curves() -> Result<Vec<OrbitCurve>> {
    BodyId::PLANETS
        .iter()
        .filter_map(|&id| get_body_data(id).elements.map(|elements| (id, elements)))
        .map(|(id, elements)| orbit_curve(id, &elements))
        .collect()
}
