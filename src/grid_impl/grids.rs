//! The molecular grid: assembly pipeline, snapshot and post-build pruning.

use super::atomic::{gen_atomic_grids, AtomicGridTable};
use super::config::GridConfig;
use super::grouping::arg_group_grids;
use super::padding::{pad_grids, padding_size};
use super::partition::{partition_per_atom, select_kernel};
use super::screening::{ScreenIndex, ScreeningProvider};
use crate::error::GridError;
use crate::lebedev_impl::{AngularGridTable, LebedevTable};
use crate::molecule::Molecule;
use crate::radial_impl::RadialScheme;
use nalgebra::Vector3;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owner recorded for padding points.
pub const PADDING_ATOM: i32 = -1;

/// Merged, partitioned grid of a molecule.
///
/// All four arrays have the same length. Padding points carry zero weights
/// and `PADDING_ATOM` as owner.
#[derive(Clone, Debug, Default)]
pub struct GlobalGrid {
    pub coords: Vec<Vector3<f64>>,
    pub weights: Vec<f64>,
    /// Atom whose atomic grid produced the point
    pub atm_idx: Vec<i32>,
    /// Weight before Becke partitioning
    pub quadrature_weights: Vec<f64>,
    pub screen_index: Option<ScreenIndex>,
}

impl GlobalGrid {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Σ w_i f(r_i)
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(&Vector3<f64>) -> f64 + Sync,
    {
        self.coords
            .par_iter()
            .zip(self.weights.par_iter())
            .map(|(r, &w)| w * f(r))
            .sum()
    }

    /// Number of points owned by atom `ia`.
    pub fn atom_size(&self, ia: usize) -> usize {
        self.atm_idx.iter().filter(|&&a| a == ia as i32).count()
    }

    /// Number of padding points.
    pub fn padding(&self) -> usize {
        self.atm_idx.iter().filter(|&&a| a == PADDING_ATOM).count()
    }

    /// Grid with entry `k` taken from position `perm[k]`. The screening mask
    /// is dropped since it no longer matches the point order.
    pub fn permuted(&self, perm: &[usize]) -> GlobalGrid {
        GlobalGrid {
            coords: perm.iter().map(|&i| self.coords[i]).collect(),
            weights: perm.iter().map(|&i| self.weights[i]).collect(),
            atm_idx: perm.iter().map(|&i| self.atm_idx[i]).collect(),
            quadrature_weights: perm.iter().map(|&i| self.quadrature_weights[i]).collect(),
            screen_index: None,
        }
    }

    /// Grid restricted to the entries where `keep` is true.
    pub fn retain(&self, keep: &[bool]) -> GlobalGrid {
        let idx: Vec<usize> = (0..self.len()).filter(|&i| keep[i]).collect();
        self.permuted(&idx)
    }
}

/// Outcome of `prune_by_density`.
#[derive(Clone, Debug, PartialEq)]
pub enum DensityPruning {
    /// Zero threshold; nothing to do
    Unchanged,
    /// Integrated density disagreed with the electron count
    Skipped { integrated: f64, expected: f64 },
    Pruned { dropped: usize },
}

/// Drop points whose |ρ w| is below `threshold / npoints`, then re-pad.
///
/// The density is only trusted when `Σ ρ w` is within `tol` (relative) of
/// `nelectron`; otherwise the grid is returned as is.
pub fn prune_by_density(
    grid: &GlobalGrid,
    rho: &[f64],
    threshold: f64,
    nelectron: f64,
    tol: f64,
    alignment: usize,
) -> Result<(GlobalGrid, DensityPruning), GridError> {
    if rho.len() != grid.len() {
        return Err(GridError::DensityLength {
            expected: grid.len(),
            found: rho.len(),
        });
    }
    if threshold == 0.0 {
        return Ok((grid.clone(), DensityPruning::Unchanged));
    }

    let integrated: f64 = rho.iter().zip(&grid.weights).map(|(r, w)| r * w).sum();
    if (integrated - nelectron).abs() >= tol * integrated {
        warn!(
            "Density integrates to {:.6} instead of {} electrons; grids are not pruned",
            integrated, nelectron
        );
        return Ok((
            grid.clone(),
            DensityPruning::Skipped {
                integrated,
                expected: nelectron,
            },
        ));
    }

    let cutoff = threshold / grid.len() as f64;
    let keep: Vec<bool> = rho
        .iter()
        .zip(&grid.weights)
        .map(|(r, w)| (r * w).abs() > cutoff)
        .collect();
    let pruned = grid.retain(&keep);
    let dropped = grid.len() - pruned.len();
    debug!("Drop grids {}", dropped);

    let padding = padding_size(pruned.len(), alignment);
    debug!("prune_by_density: {} padding grids", padding);
    Ok((pad_grids(pruned, alignment), DensityPruning::Pruned { dropped }))
}

/// Builder and owner of a molecule's integration grid.
///
/// Configuration changes go through `set_config`/`set_molecule`, which drop
/// the current snapshot; `build` produces a new one.
pub struct Grids {
    mol: Molecule,
    config: GridConfig,
    angular: Arc<dyn AngularGridTable>,
    screening: Option<Arc<dyn ScreeningProvider>>,
    snapshot: Option<GlobalGrid>,
}

impl Grids {
    pub fn new(mol: Molecule, config: GridConfig) -> Self {
        Grids {
            mol,
            config,
            angular: Arc::new(LebedevTable),
            screening: None,
            snapshot: None,
        }
    }

    pub fn with_angular_table(mut self, table: Arc<dyn AngularGridTable>) -> Self {
        self.angular = table;
        self.snapshot = None;
        self
    }

    /// Screening provider run after every build and density pruning.
    pub fn with_screening(mut self, provider: Arc<dyn ScreeningProvider>) -> Self {
        self.screening = Some(provider);
        self.snapshot = None;
        self
    }

    pub fn molecule(&self) -> &Molecule {
        &self.mol
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_molecule(&mut self, mol: Molecule) {
        self.mol = mol;
        self.invalidate();
    }

    /// Discard the current snapshot.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn is_built(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn grid(&self) -> Option<&GlobalGrid> {
        self.snapshot.as_ref()
    }

    /// Number of points in the current snapshot, 0 when not built.
    pub fn size(&self) -> usize {
        self.snapshot.as_ref().map_or(0, GlobalGrid::len)
    }

    pub fn dump_flags(&self) {
        let cfg = &self.config;
        info!("radial grids: {}", cfg.radial_method.name());
        info!("becke partition: {}", cfg.becke_scheme.name());
        info!("pruning grids: {:?}", cfg.prune);
        info!("grids dens level: {}", cfg.level);
        if let Some(adjust) = &cfg.radii_adjust {
            info!("atomic radii adjust function: {}", adjust.name());
            debug!("atomic_radii : {:?}", cfg.atomic_radii);
        }
        if !cfg.atom_grid.is_empty() {
            info!("User specified grid scheme {:?}", cfg.atom_grid);
        }
    }

    /// Atomic grids for the current molecule and configuration.
    pub fn gen_atomic_grids(&self) -> Result<AtomicGridTable, GridError> {
        gen_atomic_grids(
            &self.mol,
            &self.config.atom_grid,
            &self.config.radial_method,
            self.config.level,
            self.config.prune,
            self.angular.as_ref(),
        )
    }

    /// Run the full pipeline and store the result as the current snapshot.
    pub fn build(&mut self) -> Result<&GlobalGrid, GridError> {
        if self.mol.natm() == 0 {
            return Err(GridError::EmptyMolecule);
        }
        let cfg = &self.config;
        let atom_grids_tab = self.gen_atomic_grids()?;

        let kernel = select_kernel(
            &self.mol,
            cfg.radii_adjust.as_ref(),
            cfg.atomic_radii,
            &cfg.becke_scheme,
        );
        debug!("partition kernel: {}", kernel.name());

        let mut grid = GlobalGrid::default();
        for (ia, (coords, weights)) in partition_per_atom(&self.mol, &atom_grids_tab, kernel.as_ref())
            .into_iter()
            .enumerate()
        {
            let vol = &atom_grids_tab[self.mol.atom_symbol(ia)].weights;
            grid.atm_idx.extend(std::iter::repeat(ia as i32).take(vol.len()));
            grid.quadrature_weights.extend_from_slice(vol);
            grid.coords.extend(coords);
            grid.weights.extend(weights);
        }

        if cfg.sort_grids {
            let idx = arg_group_grids(&self.mol, &grid.coords, cfg.box_size);
            grid = grid.permuted(&idx);
        }

        if cfg.alignment > 1 {
            debug!("Padding {} grids", padding_size(grid.len(), cfg.alignment));
            grid = pad_grids(grid, cfg.alignment);
        }

        grid.screen_index = self
            .screening
            .as_ref()
            .map(|provider| provider.screen_index(&grid.coords));

        info!("tot grids = {}", grid.len());
        let grid: &GlobalGrid = self.snapshot.insert(grid);
        Ok(grid)
    }

    /// Build only when no snapshot is present.
    pub fn ensure_built(&mut self) -> Result<&GlobalGrid, GridError> {
        if self.snapshot.is_none() {
            self.build()?;
        }
        self.snapshot.as_ref().ok_or(GridError::EmptyMolecule)
    }

    /// Prune the current snapshot with a density sampled on its points.
    ///
    /// `rho` must follow the snapshot's point order, padding included.
    pub fn prune_by_density(
        &mut self,
        rho: &[f64],
        threshold: f64,
    ) -> Result<DensityPruning, GridError> {
        let nelectron = self.mol.nelectron();
        let tol = self.config.prune_error_tol;
        let alignment = self.config.alignment;
        let grid = self.ensure_built()?;
        let (mut pruned, outcome) =
            prune_by_density(grid, rho, threshold, nelectron, tol, alignment)?;
        if let DensityPruning::Pruned { .. } = outcome {
            pruned.screen_index = self
                .screening
                .as_ref()
                .map(|provider| provider.screen_index(&pruned.coords));
            self.snapshot = Some(pruned);
        }
        Ok(outcome)
    }
}
