//! Static Keplerian orbit geometry and plotting.
//!
//! The library re-exports the workspace crates so front-ends only need a
//! single dependency: sample the orbit with [`orbits::kepler_orbit`], then
//! hand the path to [`render::render_orbit`].

pub use kepler_config as config;
pub use kepler_core::{constants, units};
pub use kepler_export as export;
pub use kepler_orbits as orbits;
pub use kepler_render as render;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
