//! Closed-form Keplerian orbit helpers.
//!
//! The geometry is a pure evaluation of the conic-section polar equation over a
//! closed angular sweep; nothing here integrates or propagates state in time.

pub mod derived;
pub mod elements;
pub mod geometry;

pub use derived::OrbitSummary;
pub use elements::{ElementsError, OrbitalElements};
pub use geometry::{Bounds, OrbitPath, OrbitPoint, kepler_orbit, kepler_orbit_default, radius_at};
