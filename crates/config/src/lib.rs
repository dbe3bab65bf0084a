//! Configuration models and loaders for orbit plots.

use std::fs::File;
use std::path::{Path, PathBuf};

use kepler_core::constants::{DEFAULT_SAMPLES, G, M_SUN};
use kepler_core::units::au_to_m;
use kepler_orbits::{ElementsError, OrbitalElements};
use serde::Deserialize;
use thiserror::Error;

/// One orbit to plot, as described in a manifest.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrbitConfig {
    pub name: String,
    /// Semi-major axis in metres. Exactly one of this and
    /// `semi_major_axis_au` must be given.
    #[serde(default)]
    pub semi_major_axis_m: Option<f64>,
    #[serde(default)]
    pub semi_major_axis_au: Option<f64>,
    pub eccentricity: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_central_body")]
    pub central_body: String,
    #[serde(default = "default_central_mass")]
    pub central_mass_kg: f64,
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Canvas settings for the rendered figure.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Fraction of the data span added as blank margin around the orbit.
    pub padding_fraction: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            padding_fraction: 0.05,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("orbit '{0}' needs semi_major_axis_m or semi_major_axis_au")]
    MissingSemiMajorAxis(String),
    #[error("orbit '{0}' sets both semi_major_axis_m and semi_major_axis_au")]
    AmbiguousSemiMajorAxis(String),
    #[error("orbit '{name}': {source}")]
    Elements {
        name: String,
        #[source]
        source: ElementsError,
    },
    #[error("orbit '{0}' not found in configuration")]
    NotFound(String),
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_central_body() -> String {
    "Sun".to_string()
}

fn default_central_mass() -> f64 {
    M_SUN
}

impl OrbitConfig {
    /// The Earth's orbit around the Sun, used when no manifest is supplied.
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            semi_major_axis_m: None,
            semi_major_axis_au: Some(1.0),
            eccentricity: kepler_core::constants::EARTH_ECCENTRICITY,
            samples: DEFAULT_SAMPLES,
            title: None,
            central_body: default_central_body(),
            central_mass_kg: M_SUN,
            plot: PlotConfig::default(),
        }
    }

    /// Semi-major axis in metres, whichever unit the manifest used.
    pub fn semi_major_axis(&self) -> Result<f64, ConfigError> {
        match (self.semi_major_axis_m, self.semi_major_axis_au) {
            (Some(m), None) => Ok(m),
            (None, Some(au)) => Ok(au_to_m(au)),
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousSemiMajorAxis(self.name.clone())),
            (None, None) => Err(ConfigError::MissingSemiMajorAxis(self.name.clone())),
        }
    }

    /// Validated orbital elements for this record.
    pub fn elements(&self) -> Result<OrbitalElements, ConfigError> {
        let a = self.semi_major_axis()?;
        OrbitalElements::try_new(a, self.eccentricity, self.samples).map_err(|source| {
            ConfigError::Elements {
                name: self.name.clone(),
                source,
            }
        })
    }

    /// Gravitational parameter of the central body (m³/s²).
    pub fn mu(&self) -> f64 {
        G * self.central_mass_kg
    }

    /// Plot title, defaulting to "Orbit of the <name> around the <central body>".
    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            format!("Orbit of the {} around the {}", self.name, self.central_body)
        })
    }
}

/// Load orbit records from a YAML list, a single TOML file, or a directory of
/// TOML files (read in file-name order, other extensions ignored).
pub fn load_orbits<P: AsRef<Path>>(path: P) -> Result<Vec<OrbitConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        let mut manifests: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_toml(p))
            .collect();
        manifests.sort();
        manifests.iter().map(|p| read_toml_orbit(p)).collect()
    } else if is_toml(path) {
        Ok(vec![read_toml_orbit(path)?])
    } else {
        Ok(serde_yaml::from_reader(File::open(path)?)?)
    }
}

/// Case-insensitive lookup of an orbit by name.
pub fn find_orbit<'a>(orbits: &'a [OrbitConfig], name: &str) -> Result<&'a OrbitConfig, ConfigError> {
    orbits
        .iter()
        .find(|o| o.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn read_toml_orbit(path: &Path) -> Result<OrbitConfig, ConfigError> {
    Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
}
