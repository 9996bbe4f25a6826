//! Angular pruning: how many Lebedev points each radial shell gets.

#[cfg(test)]
mod tests;

use crate::constants::{bragg_radius, sg1_radius, DIST_EPSILON};
use crate::error::GridError;
use crate::lebedev_impl::LEBEDEV_NGRID;
use serde::{Deserialize, Serialize};

/// Region boundaries in units of the atomic radius, by element size class
/// (H-He, Li-Ne, rest).
const ALPHAS: [[f64; 4]; 3] = [
    [0.25, 0.5, 1.0, 4.5],
    [0.1667, 0.5, 0.9, 3.5],
    [0.1, 0.4, 0.8, 2.5],
];

/// SG-1 angular sizes for the five regions.
const SG1_NGRID: [usize; 5] = [6, 38, 86, 194, 86];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneScheme {
    /// Every shell uses the full angular grid.
    None,
    /// Gill, Johnson and Pople, CPL 209, 506 (1993)
    Sg1,
    #[default]
    Nwchem,
    /// Treutler and Ahlrichs, JCP 102, 346 (1995)
    Treutler,
}

impl PruneScheme {
    /// Angular point count for every radial abscissa in `rads`.
    pub fn prune(&self, charge: usize, rads: &[f64], n_ang: usize) -> Result<Vec<usize>, GridError> {
        match self {
            PruneScheme::None => Ok(vec![n_ang; rads.len()]),
            PruneScheme::Sg1 => Ok(sg1_prune(charge, rads)),
            PruneScheme::Nwchem => nwchem_prune(charge, rads, n_ang),
            PruneScheme::Treutler => Ok(treutler_prune(rads.len(), n_ang)),
        }
    }
}

/// Index (0..=4) of the region each shell falls into.
fn regions(charge: usize, rads: &[f64], r_atom: f64) -> impl Iterator<Item = usize> + '_ {
    let alphas = match charge {
        0..=2 => &ALPHAS[0],
        3..=10 => &ALPHAS[1],
        _ => &ALPHAS[2],
    };
    rads.iter()
        .map(move |&r| alphas.iter().filter(|&&a| r / r_atom > a).count())
}

pub fn sg1_prune(charge: usize, rads: &[f64]) -> Vec<usize> {
    let r_atom = sg1_radius(charge) + DIST_EPSILON;
    regions(charge, rads, r_atom)
        .map(|place| SG1_NGRID[place])
        .collect()
}

/// NWChem scheme: region sizes are picked relative to the requested `n_ang`.
pub fn nwchem_prune(charge: usize, rads: &[f64], n_ang: usize) -> Result<Vec<usize>, GridError> {
    // [38, 50, 74, 86, ...]
    let leb_ngrid = &LEBEDEV_NGRID[4..];
    let leb_l: [usize; 5] = if n_ang < 50 {
        return Ok(vec![n_ang; rads.len()]);
    } else if n_ang == 50 {
        [1, 2, 2, 2, 1]
    } else {
        let idx = leb_ngrid
            .iter()
            .position(|&n| n == n_ang)
            .ok_or(GridError::PruneAngularGrid(n_ang))?;
        [1, 3, idx - 1, idx, idx - 1]
    };

    let r_atom = bragg_radius(charge) + DIST_EPSILON;
    Ok(regions(charge, rads, r_atom)
        .map(|place| leb_ngrid[leb_l[place]])
        .collect())
}

/// Treutler-Ahlrichs: the inner third of the shells gets 14 points, the next
/// sixth 50 points and the rest the full grid.
pub fn treutler_prune(nr: usize, n_ang: usize) -> Vec<usize> {
    (0..nr)
        .map(|i| {
            if i < nr / 3 {
                14
            } else if i < nr / 2 {
                50
            } else {
                n_ang
            }
        })
        .collect()
}
