//! Atom-centred grids, one per distinct element.

use super::config::{AngularSpec, AtomGridSpec};
use crate::constants::{period_index, ANG_ORDER, RADIAL_CHUNK, RAD_GRIDS};
use crate::error::GridError;
use crate::lebedev_impl::{is_lebedev_size, lebedev_npoints, AngularGridTable};
use crate::molecule::Molecule;
use crate::prune_impl::PruneScheme;
use crate::radial_impl::RadialScheme;
use itertools::Itertools;
use nalgebra::Vector3;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Points relative to the atom centre and their raw quadrature weights.
#[derive(Clone, Debug, Default)]
pub struct AtomicGrid {
    pub coords: Vec<Vector3<f64>>,
    pub weights: Vec<f64>,
}

impl AtomicGrid {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Atomic grids keyed by element symbol.
pub type AtomicGridTable = HashMap<String, AtomicGrid>;

/// Default number of radial shells for an element at a resolution level.
pub fn default_rad(charge: usize, level: usize) -> Result<usize, GridError> {
    let row = RAD_GRIDS.get(level).ok_or(GridError::InvalidLevel(level))?;
    Ok(row[period_index(charge)])
}

/// Default Lebedev point count for an element at a resolution level.
pub fn default_ang(charge: usize, level: usize) -> Result<usize, GridError> {
    let row = ANG_ORDER.get(level).ok_or(GridError::InvalidLevel(level))?;
    let order = row[period_index(charge)];
    lebedev_npoints(order).ok_or(GridError::UnsupportedAngularGrid(order))
}

/// Accept a Lebedev size as is; a Lebedev order is mapped onto its size.
pub fn snap_angular(n_ang: usize, ia: usize, symbol: &str) -> Result<usize, GridError> {
    if is_lebedev_size(n_ang) {
        return Ok(n_ang);
    }
    match lebedev_npoints(n_ang) {
        Some(snapped) => {
            warn!(
                "n_ang {} for atom {} {} is not the supported Lebedev angular grids. Set n_ang to {}",
                n_ang, ia, symbol, snapped
            );
            Ok(snapped)
        }
        None => Err(GridError::UnsupportedAngularGrid(n_ang)),
    }
}

/// Radial count and angular spec for one element, from a user override or
/// from the level tables.
pub fn resolve_atom_grid(
    mol: &Molecule,
    ia: usize,
    atom_grid: &BTreeMap<String, AtomGridSpec>,
    level: usize,
) -> Result<(usize, AngularSpec), GridError> {
    let symbol = mol.atom_symbol(ia);
    let charge = mol.atom_charge(ia);

    let Some(spec) = atom_grid.get(symbol) else {
        return Ok((
            default_rad(charge, level)?,
            AngularSpec::Uniform(default_ang(charge, level)?),
        ));
    };

    let angular = match &spec.angular {
        AngularSpec::Uniform(n_ang) => AngularSpec::Uniform(snap_angular(*n_ang, ia, symbol)?),
        AngularSpec::PerShell(angs) => {
            if angs.len() != spec.radial {
                return Err(GridError::InvalidAtomGrid {
                    symbol: symbol.to_string(),
                    reason: format!(
                        "{} angular sizes given for {} radial shells",
                        angs.len(),
                        spec.radial
                    ),
                });
            }
            let snapped = angs
                .iter()
                .map(|&n| snap_angular(n, ia, symbol))
                .collect::<Result<Vec<_>, _>>()?;
            AngularSpec::PerShell(snapped)
        }
    };
    Ok((spec.radial, angular))
}

/// Build the atomic grid of every distinct element in `mol`.
pub fn gen_atomic_grids(
    mol: &Molecule,
    atom_grid: &BTreeMap<String, AtomGridSpec>,
    radi_method: &dyn RadialScheme,
    level: usize,
    prune: PruneScheme,
    table: &dyn AngularGridTable,
) -> Result<AtomicGridTable, GridError> {
    // first atom of every element
    let representatives: Vec<usize> = (0..mol.natm())
        .unique_by(|&ia| mol.atom_symbol(ia))
        .collect();

    let grids = representatives
        .par_iter()
        .map(|&ia| {
            let symbol = mol.atom_symbol(ia);
            let charge = mol.atom_charge(ia);
            let (n_rad, angular) = resolve_atom_grid(mol, ia, atom_grid, level)?;

            let (rad, dr) = radi_method.generate(n_rad, charge, ia);
            let rad_weight: Vec<f64> = rad
                .iter()
                .zip(&dr)
                .map(|(&r, &w)| 4.0 * PI * r * r * w)
                .collect();

            let angs = match angular {
                AngularSpec::Uniform(n_ang) => prune.prune(charge, &rad, n_ang)?,
                AngularSpec::PerShell(angs) => angs,
            };
            debug!(
                "atom {} rad-grids = {}, ang-grids = {:?}",
                symbol, n_rad, angs
            );

            let grid = expand_shells(&rad, &rad_weight, &angs, table)?;
            Ok((symbol.to_string(), grid))
        })
        .collect::<Result<Vec<_>, GridError>>()?;

    Ok(grids.into_iter().collect())
}

/// Outer product of radial shells with their angular grids.
///
/// Shells are grouped by ascending angular size; within a group they are
/// expanded `RADIAL_CHUNK` shells at a time, angular point major.
pub fn expand_shells(
    rad: &[f64],
    rad_weight: &[f64],
    angs: &[usize],
    table: &dyn AngularGridTable,
) -> Result<AtomicGrid, GridError> {
    let total: usize = angs.iter().sum();
    let mut coords = Vec::with_capacity(total);
    let mut weights = Vec::with_capacity(total);

    for n in angs.iter().copied().sorted().dedup() {
        let grid = table.lookup(n)?;
        let shells: Vec<usize> = (0..angs.len()).filter(|&i| angs[i] == n).collect();
        for chunk in shells.chunks(RADIAL_CHUNK) {
            for (dir, w) in &grid {
                for &i in chunk {
                    coords.push(*dir * rad[i]);
                    weights.push(rad_weight[i] * w);
                }
            }
        }
    }
    Ok(AtomicGrid { coords, weights })
}
