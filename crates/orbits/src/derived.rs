//! Scalar quantities derived from the orbital elements.
//!
//! The geometry sweep only needs `a` and `e`. The period and speeds below
//! additionally need the central body's gravitational parameter `μ = G·M`.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::elements::OrbitalElements;

/// Closest approach: `a(1 - e)`.
#[inline]
pub fn periapsis_radius(semi_major_axis_m: f64, eccentricity: f64) -> f64 {
    semi_major_axis_m * (1.0 - eccentricity)
}

/// Farthest distance: `a(1 + e)`.
#[inline]
pub fn apoapsis_radius(semi_major_axis_m: f64, eccentricity: f64) -> f64 {
    semi_major_axis_m * (1.0 + eccentricity)
}

/// Semi-latus rectum `p = a(1 - e²)`, the radius at `θ = ±π/2`.
#[inline]
pub fn semi_latus_rectum(semi_major_axis_m: f64, eccentricity: f64) -> f64 {
    semi_major_axis_m * (1.0 - eccentricity * eccentricity)
}

/// Semi-minor axis `b = a√(1 - e²)`.
#[inline]
pub fn semi_minor_axis(semi_major_axis_m: f64, eccentricity: f64) -> f64 {
    semi_major_axis_m * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Kepler's third law: `T = 2π √(a³/μ)` in seconds.
pub fn orbital_period(semi_major_axis_m: f64, mu_m3_s2: f64) -> f64 {
    TAU * (semi_major_axis_m.powi(3) / mu_m3_s2).sqrt()
}

/// Vis-viva equation: speed at radius `r` on an orbit of semi-major axis `a`.
pub fn vis_viva_speed(radius_m: f64, semi_major_axis_m: f64, mu_m3_s2: f64) -> f64 {
    (mu_m3_s2 * (2.0 / radius_m - 1.0 / semi_major_axis_m)).sqrt()
}

/// Characteristic numbers of one orbit, as written to JSON summaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSummary {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    pub samples: usize,
    pub periapsis_m: f64,
    pub apoapsis_m: f64,
    pub semi_minor_axis_m: f64,
    pub semi_latus_rectum_m: f64,
    pub mu_m3_s2: f64,
    pub period_s: f64,
    pub periapsis_speed_m_s: f64,
    pub apoapsis_speed_m_s: f64,
}

impl OrbitSummary {
    pub fn from_elements(elements: &OrbitalElements, mu_m3_s2: f64) -> Self {
        let a = elements.semi_major_axis_m;
        let e = elements.eccentricity;
        let periapsis_m = periapsis_radius(a, e);
        let apoapsis_m = apoapsis_radius(a, e);
        Self {
            semi_major_axis_m: a,
            eccentricity: e,
            samples: elements.samples,
            periapsis_m,
            apoapsis_m,
            semi_minor_axis_m: semi_minor_axis(a, e),
            semi_latus_rectum_m: semi_latus_rectum(a, e),
            mu_m3_s2,
            period_s: orbital_period(a, mu_m3_s2),
            periapsis_speed_m_s: vis_viva_speed(periapsis_m, a, mu_m3_s2),
            apoapsis_speed_m_s: vis_viva_speed(apoapsis_m, a, mu_m3_s2),
        }
    }
}
