//! Orbital element inputs for the geometry sweep.

use kepler_core::constants::{AU_M, DEFAULT_SAMPLES, EARTH_ECCENTRICITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::geometry::{OrbitPath, kepler_orbit};

/// Eccentricities above this still produce a closed ellipse but the sweep
/// resolution near periapsis gets coarse.
const HIGH_ECCENTRICITY: f64 = 0.99;

/// Shape and sampling parameters of a single closed orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (m).
    pub semi_major_axis_m: f64,
    /// Eccentricity, `0 <= e < 1` for a closed ellipse.
    pub eccentricity: f64,
    /// Number of points sampled along the revolution.
    pub samples: usize,
}

/// Rejections produced by [`OrbitalElements::try_new`].
#[derive(Debug, Error, PartialEq)]
pub enum ElementsError {
    #[error("semi-major axis must be positive and finite, got {0}")]
    InvalidSemiMajorAxis(f64),
    #[error("eccentricity must lie in [0, 1) for a closed orbit, got {0}")]
    EccentricityOutOfRange(f64),
    #[error("at least two samples are required to close the orbit, got {0}")]
    TooFewSamples(usize),
}

impl OrbitalElements {
    /// Build elements without checking preconditions.
    pub const fn new(semi_major_axis_m: f64, eccentricity: f64, samples: usize) -> Self {
        Self {
            semi_major_axis_m,
            eccentricity,
            samples,
        }
    }

    /// Build elements, rejecting values outside the closed-ellipse domain.
    pub fn try_new(
        semi_major_axis_m: f64,
        eccentricity: f64,
        samples: usize,
    ) -> Result<Self, ElementsError> {
        if !(semi_major_axis_m.is_finite() && semi_major_axis_m > 0.0) {
            return Err(ElementsError::InvalidSemiMajorAxis(semi_major_axis_m));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(eccentricity));
        }
        if samples < 2 {
            return Err(ElementsError::TooFewSamples(samples));
        }
        if eccentricity > HIGH_ECCENTRICITY {
            warn!("e = {eccentricity} is close to 1; periapsis will be sparsely sampled");
        }
        Ok(Self::new(semi_major_axis_m, eccentricity, samples))
    }

    /// The Earth's heliocentric orbit at the default sampling.
    pub const fn earth() -> Self {
        Self::new(AU_M, EARTH_ECCENTRICITY, DEFAULT_SAMPLES)
    }

    /// Same elements with a different sample count.
    pub fn with_samples(self, samples: usize) -> Self {
        Self { samples, ..self }
    }

    /// Evaluate the orbit geometry for these elements.
    pub fn orbit_path(&self) -> OrbitPath {
        kepler_orbit(self.semi_major_axis_m, self.eccentricity, self.samples)
    }
}
