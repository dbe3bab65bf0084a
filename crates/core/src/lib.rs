//! Physical constants and unit helpers shared across the orbit plotter crates.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Mass of the Sun (kg).
    pub const M_SUN: f64 = 1.989e30;
    /// Gravitational parameter of the Sun, `G * M_SUN` (m³/s²).
    pub const MU_SUN: f64 = G * M_SUN;
    /// Metres per astronomical unit, rounded to four significant digits.
    pub const AU_M: f64 = 1.496e11;
    /// Orbital eccentricity of the Earth.
    pub const EARTH_ECCENTRICITY: f64 = 0.0167;
    /// Default number of samples along a rendered orbit.
    pub const DEFAULT_SAMPLES: usize = 1000;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_M, SECONDS_PER_DAY};

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AU_M
    }

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}
