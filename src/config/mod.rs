//! Configuration of a grid run
//!
//! The YAML input holds the molecule, the grid settings and the optional
//! post-build steps. Missing optional parameters are filled by
//! `with_defaults`.

mod args;

pub use args::Args;

use molgrid::GridConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Unit of the geometry: "angstrom" (default) or "bohr"
    pub unit: Option<String>,
    pub charge: Option<i32>,
    pub geometry: Vec<Atom>,
    #[serde(default)]
    pub grid: GridConfig,
    pub density_pruning: Option<DensityPruningParams>,
    pub screening: Option<ScreeningParams>,
}

/// Atomic position configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct Atom {
    pub element: String,
    pub coords: [f64; 3],
}

/// Post-build pruning with a promolecular density
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DensityPruningParams {
    pub enabled: Option<bool>,
    pub threshold: Option<f64>,
}

impl Default for DensityPruningParams {
    fn default() -> Self {
        DensityPruningParams {
            enabled: Some(true),
            threshold: Some(1e-7),
        }
    }
}

impl DensityPruningParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.threshold.is_none() {
            self.threshold = defaults.threshold;
        }
        self
    }
}

/// Distance screening with one spherical shell per atom
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScreeningParams {
    /// Shell radius in Bohr
    pub radius: Option<f64>,
}

impl Default for ScreeningParams {
    fn default() -> Self {
        ScreeningParams { radius: Some(8.0) }
    }
}

impl ScreeningParams {
    pub fn with_defaults(mut self) -> Self {
        if self.radius.is_none() {
            self.radius = Self::default().radius;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.unit.is_none() {
            self.unit = Some("angstrom".to_string());
        }
        if let Some(params) = self.density_pruning.take() {
            self.density_pruning = Some(params.with_defaults());
        }
        if let Some(params) = self.screening.take() {
            self.screening = Some(params.with_defaults());
        }
        self
    }

    pub fn is_bohr(&self) -> bool {
        self.unit
            .as_deref()
            .is_some_and(|u| u.eq_ignore_ascii_case("bohr") || u.eq_ignore_ascii_case("au"))
    }

    pub fn density_threshold(&self) -> Option<f64> {
        self.density_pruning
            .as_ref()
            .filter(|p| p.enabled.unwrap_or(true))
            .and_then(|p| p.threshold)
    }
}
