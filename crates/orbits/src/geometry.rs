//! Orbit geometry from the conic-section polar equation.
//!
//! The central body sits at the origin and periapsis lies on the +x axis at
//! `θ = 0`. The angular sweep covers the closed interval `[0, 2π]`, so the
//! first and last samples coincide.

use std::f64::consts::TAU;

use kepler_core::constants::DEFAULT_SAMPLES;
use serde::Serialize;
use tracing::debug;

/// One sampled point of the orbit in the orbital plane (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitPoint {
    /// True anomaly of the sample (rad).
    pub theta_rad: f64,
    pub x_m: f64,
    pub y_m: f64,
}

impl OrbitPoint {
    /// Distance from the central body.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x_m.hypot(self.y_m)
    }
}

/// Axis-aligned extent of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Grow the box so that it contains `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Ordered samples tracing one full revolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrbitPath {
    points: Vec<OrbitPoint>,
}

impl OrbitPath {
    /// Build a path from pre-computed `(x, y)` pairs, e.g. sequences handed
    /// over by another producer. The angle of each point is recovered with
    /// `atan2` and wrapped into `[0, 2π)`.
    ///
    /// Pairs are formed up to the shorter of the two slices; extra values in
    /// the longer one are ignored.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x_m, &y_m)| OrbitPoint {
                theta_rad: y_m.atan2(x_m).rem_euclid(TAU),
                x_m,
                y_m,
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[OrbitPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&OrbitPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&OrbitPoint> {
        self.points.last()
    }

    /// x-coordinates in sample order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x_m).collect()
    }

    /// y-coordinates in sample order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y_m).collect()
    }

    /// Radius of every sample in order.
    pub fn radii(&self) -> Vec<f64> {
        self.points.iter().map(OrbitPoint::radius).collect()
    }

    /// Split into the x and y coordinate sequences.
    pub fn into_xy(self) -> (Vec<f64>, Vec<f64>) {
        self.points.into_iter().map(|p| (p.x_m, p.y_m)).unzip()
    }

    /// Closest sample to the central body.
    pub fn min_radius(&self) -> Option<&OrbitPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.radius().total_cmp(&b.radius()))
    }

    /// Farthest sample from the central body.
    pub fn max_radius(&self) -> Option<&OrbitPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.radius().total_cmp(&b.radius()))
    }

    /// Extent of the finite samples, `None` when there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut finite = self
            .points
            .iter()
            .filter(|p| p.x_m.is_finite() && p.y_m.is_finite());
        let first = finite.next()?;
        let mut bounds = Bounds {
            x_min: first.x_m,
            x_max: first.x_m,
            y_min: first.y_m,
            y_max: first.y_m,
        };
        for p in finite {
            bounds.include(p.x_m, p.y_m);
        }
        Some(bounds)
    }
}

/// `n` evenly spaced angles over `[0, 2π]`, both endpoints included.
///
/// The final angle is exactly `2π` rather than `(n - 1) * step`, which can
/// drift by an ulp.
pub fn sample_angles(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = TAU / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { TAU } else { i as f64 * step })
                .collect()
        }
    }
}

/// Orbital radius at true anomaly `theta_rad`: `a(1 - e²) / (1 + e cos θ)`.
#[inline]
pub fn radius_at(semi_major_axis_m: f64, eccentricity: f64, theta_rad: f64) -> f64 {
    semi_major_axis_m * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * theta_rad.cos())
}

/// Sample a closed Keplerian orbit.
///
/// Preconditions: `a > 0`, `0 <= e < 1`, `n >= 2`. They are not checked here;
/// `e >= 1` makes the denominator vanish or change sign and yields infinite or
/// negative radii. Use [`crate::OrbitalElements::try_new`] to validate input.
pub fn kepler_orbit(semi_major_axis_m: f64, eccentricity: f64, n: usize) -> OrbitPath {
    debug!(
        a = semi_major_axis_m,
        e = eccentricity,
        samples = n,
        "sampling orbit"
    );
    let points = sample_angles(n)
        .into_iter()
        .map(|theta_rad| {
            let r = radius_at(semi_major_axis_m, eccentricity, theta_rad);
            let (sin, cos) = theta_rad.sin_cos();
            OrbitPoint {
                theta_rad,
                x_m: r * cos,
                y_m: r * sin,
            }
        })
        .collect();
    OrbitPath { points }
}

/// [`kepler_orbit`] with the default sample count.
pub fn kepler_orbit_default(semi_major_axis_m: f64, eccentricity: f64) -> OrbitPath {
    kepler_orbit(semi_major_axis_m, eccentricity, DEFAULT_SAMPLES)
}
