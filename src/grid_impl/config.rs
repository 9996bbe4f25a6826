//! Grid-affecting configuration.
//!
//! A `GridConfig` is plain data: changing it never rebuilds anything by
//! itself. `Grids::set_config` swaps it in and drops the previous snapshot.

use super::partition::{BeckeScheme, RadiiAdjust};
use crate::constants::{
    bragg_radius, sg1_radius, ALIGNMENT_UNIT, GROUP_BOX_SIZE, NELEC_ERROR_TOL,
};
use crate::prune_impl::PruneScheme;
use crate::radial_impl::RadialMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Angular resolution of a user-specified atomic grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngularSpec {
    /// One size, subject to pruning
    Uniform(usize),
    /// One size per radial shell; pruning is not applied
    PerShell(Vec<usize>),
}

/// Per-element override of the level tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomGridSpec {
    pub radial: usize,
    pub angular: AngularSpec,
}

impl AtomGridSpec {
    pub fn new(radial: usize, angular: usize) -> Self {
        AtomGridSpec {
            radial,
            angular: AngularSpec::Uniform(angular),
        }
    }
}

/// Table of atomic radii used by the radii adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomicRadii {
    #[default]
    Bragg,
    Sg1,
}

impl AtomicRadii {
    /// Radius in Bohr.
    pub fn radius(&self, charge: usize) -> f64 {
        match self {
            AtomicRadii::Bragg => bragg_radius(charge),
            AtomicRadii::Sg1 => sg1_radius(charge),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Resolution level 0..=9 for the default radial/angular tables
    pub level: usize,
    /// Per-element `(radial, angular)` overrides, keyed by symbol
    pub atom_grid: BTreeMap<String, AtomGridSpec>,
    pub radial_method: RadialMethod,
    pub prune: PruneScheme,
    pub becke_scheme: BeckeScheme,
    /// `None` switches the radii adjustment off
    pub radii_adjust: Option<RadiiAdjust>,
    /// `None` switches the table based radii adjustments off
    pub atomic_radii: Option<AtomicRadii>,
    pub alignment: usize,
    pub sort_grids: bool,
    pub box_size: f64,
    pub prune_error_tol: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            level: 3,
            atom_grid: BTreeMap::new(),
            radial_method: RadialMethod::Treutler,
            prune: PruneScheme::Nwchem,
            becke_scheme: BeckeScheme::Original,
            radii_adjust: Some(RadiiAdjust::Treutler),
            atomic_radii: Some(AtomicRadii::Bragg),
            alignment: ALIGNMENT_UNIT,
            sort_grids: true,
            box_size: GROUP_BOX_SIZE,
            prune_error_tol: NELEC_ERROR_TOL,
        }
    }
}

impl GridConfig {
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_prune(mut self, prune: PruneScheme) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_atom_grid(mut self, symbol: &str, spec: AtomGridSpec) -> Self {
        self.atom_grid.insert(symbol.to_string(), spec);
        self
    }

    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_sorting(mut self, sort_grids: bool) -> Self {
        self.sort_grids = sort_grids;
        self
    }
}
