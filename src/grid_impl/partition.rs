//! Becke partitioning of overlapping atomic grids.
//!
//! Becke, JCP 88, 2547 (1988). For every atom pair (i, j) the confocal
//! coordinate `g = (r_i - r_j) / R_ij` is smoothed into a step and the cell
//! functions `0.5 (1 - g)`, `0.5 (1 + g)` are multiplied into the partition
//! values of atom i and atom j.

use super::atomic::AtomicGridTable;
use super::config::AtomicRadii;
use crate::constants::DIST_EPSILON;
use crate::molecule::Molecule;
use nalgebra::{DMatrix, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type SmoothingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;
pub type AdjustFn = Arc<dyn Fn(usize, usize, f64) -> f64 + Send + Sync>;

/// Step function applied to the confocal coordinate.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeckeScheme {
    #[default]
    Original,
    /// Stratmann, Scuseria and Frisch, CPL 257, 213 (1996)
    Stratmann,
    #[serde(skip)]
    Custom(SmoothingFn),
}

impl BeckeScheme {
    pub fn smooth(&self, g: f64) -> f64 {
        match self {
            BeckeScheme::Original => original_becke(g),
            BeckeScheme::Stratmann => stratmann(g),
            BeckeScheme::Custom(f) => f(g),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BeckeScheme::Original => "original_becke",
            BeckeScheme::Stratmann => "stratmann",
            BeckeScheme::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for BeckeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shift of the cell boundary between atoms of different size.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiiAdjust {
    /// Radii ratio built from square roots of the atomic radii
    Treutler,
    Becke,
    #[serde(skip)]
    Custom(AdjustFn),
}

impl RadiiAdjust {
    pub fn name(&self) -> &'static str {
        match self {
            RadiiAdjust::Treutler => "treutler_atomic_radii_adjust",
            RadiiAdjust::Becke => "becke_atomic_radii_adjust",
            RadiiAdjust::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for RadiiAdjust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Becke's step: `g ← (3 - g²) g / 2`, three times.
#[inline]
pub fn original_becke(g: f64) -> f64 {
    let mut g = g;
    for _ in 0..3 {
        g = (3.0 - g * g) * g * 0.5;
    }
    g
}

/// Stratmann-Scuseria-Frisch step, eq. 14 with a = 0.64.
#[inline]
pub fn stratmann(g: f64) -> f64 {
    const A: f64 = 0.64;
    if g <= -A {
        return -1.0;
    }
    if g >= A {
        return 1.0;
    }
    let ma = g / A;
    let ma2 = ma * ma;
    (1.0 / 16.0) * (ma * (35.0 + ma2 * (-35.0 + ma2 * (21.0 - 5.0 * ma2))))
}

/// `a_ij = ¼ (R_j/R_i - R_i/R_j)`, clamped to [-½, ½].
fn radii_ratio_table(rad: &[f64]) -> DMatrix<f64> {
    let n = rad.len();
    DMatrix::from_fn(n, n, |i, j| {
        (0.25 * (rad[j] / rad[i] - rad[i] / rad[j])).clamp(-0.5, 0.5)
    })
}

/// Treutler's adjustment table, using the square root of the atomic radii.
pub fn treutler_atomic_radii_adjust(mol: &Molecule, radii: AtomicRadii) -> DMatrix<f64> {
    let rad: Vec<f64> = (0..mol.natm())
        .map(|ia| radii.radius(mol.atom_charge(ia)).sqrt() + DIST_EPSILON)
        .collect();
    radii_ratio_table(&rad)
}

pub fn becke_atomic_radii_adjust(mol: &Molecule, radii: AtomicRadii) -> DMatrix<f64> {
    let rad: Vec<f64> = (0..mol.natm())
        .map(|ia| radii.radius(mol.atom_charge(ia)) + DIST_EPSILON)
        .collect();
    radii_ratio_table(&rad)
}

#[inline]
fn apply_table(table: &DMatrix<f64>, i: usize, j: usize, g: f64) -> f64 {
    g + table[(i, j)] * (1.0 - g * g)
}

/// Produces unnormalized partition values for a batch of points.
pub trait PartitionKernel: Send + Sync {
    /// Matrix of shape (atoms, points).
    fn partition(&self, points: &[Vector3<f64>]) -> DMatrix<f64>;

    fn name(&self) -> &'static str;
}

/// Fused kernel for Becke's original step with an optional table adjustment.
/// Each point is handled independently and points are spread over threads.
pub struct BulkBeckeKernel {
    atom_coords: Vec<Vector3<f64>>,
    inv_dist: DMatrix<f64>,
    radii_table: Option<DMatrix<f64>>,
}

impl BulkBeckeKernel {
    pub fn new(mol: &Molecule, radii_table: Option<DMatrix<f64>>) -> Self {
        BulkBeckeKernel {
            atom_coords: mol.coords.clone(),
            inv_dist: mol.inverse_inter_distance(),
            radii_table,
        }
    }

    fn point_partition(&self, point: &Vector3<f64>, out: &mut [f64]) {
        let natm = self.atom_coords.len();
        let dist: Vec<f64> = self.atom_coords.iter().map(|c| (point - c).norm()).collect();
        out.fill(1.0);
        for i in 0..natm {
            for j in 0..i {
                let mut g = (dist[i] - dist[j]) * self.inv_dist[(i, j)];
                if let Some(table) = &self.radii_table {
                    g = apply_table(table, i, j, g);
                }
                g = original_becke(g);
                out[i] *= 0.5 * (1.0 - g);
                out[j] *= 0.5 * (1.0 + g);
            }
        }
    }
}

impl PartitionKernel for BulkBeckeKernel {
    fn partition(&self, points: &[Vector3<f64>]) -> DMatrix<f64> {
        let natm = self.atom_coords.len();
        let mut data = vec![0.0; natm * points.len()];
        if natm > 0 {
            // column major: the values of one point are contiguous
            data.par_chunks_mut(natm)
                .zip(points.par_iter())
                .for_each(|(col, p)| self.point_partition(p, col));
        }
        DMatrix::from_vec(natm, points.len(), data)
    }

    fn name(&self) -> &'static str {
        "bulk_becke"
    }
}

/// Reference kernel for arbitrary step functions and adjustments.
pub struct PairwiseKernel {
    atom_coords: Vec<Vector3<f64>>,
    inv_dist: DMatrix<f64>,
    adjust: Option<AdjustFn>,
    scheme: BeckeScheme,
}

impl PairwiseKernel {
    pub fn new(mol: &Molecule, adjust: Option<AdjustFn>, scheme: BeckeScheme) -> Self {
        PairwiseKernel {
            atom_coords: mol.coords.clone(),
            inv_dist: mol.inverse_inter_distance(),
            adjust,
            scheme,
        }
    }
}

impl PartitionKernel for PairwiseKernel {
    fn partition(&self, points: &[Vector3<f64>]) -> DMatrix<f64> {
        let natm = self.atom_coords.len();
        let npts = points.len();
        let grid_dist = DMatrix::from_fn(natm, npts, |ia, p| (points[p] - self.atom_coords[ia]).norm());
        let mut pbecke = DMatrix::from_element(natm, npts, 1.0);

        for i in 0..natm {
            for j in 0..i {
                for p in 0..npts {
                    let mut g = (grid_dist[(i, p)] - grid_dist[(j, p)]) * self.inv_dist[(i, j)];
                    if let Some(adjust) = &self.adjust {
                        g = adjust(i, j, g);
                    }
                    g = self.scheme.smooth(g);
                    pbecke[(i, p)] *= 0.5 * (1.0 - g);
                    pbecke[(j, p)] *= 0.5 * (1.0 + g);
                }
            }
        }
        pbecke
    }

    fn name(&self) -> &'static str {
        "pairwise"
    }
}

/// Pick the kernel for a partition scheme and radii adjustment.
///
/// The fused kernel handles Becke's original step with either table based
/// adjustment or none; everything else goes through the pairwise kernel.
pub fn select_kernel(
    mol: &Molecule,
    radii_adjust: Option<&RadiiAdjust>,
    atomic_radii: Option<AtomicRadii>,
    becke_scheme: &BeckeScheme,
) -> Box<dyn PartitionKernel> {
    let table = match (radii_adjust, atomic_radii) {
        (Some(RadiiAdjust::Treutler), Some(radii)) => {
            Some(treutler_atomic_radii_adjust(mol, radii))
        }
        (Some(RadiiAdjust::Becke), Some(radii)) => Some(becke_atomic_radii_adjust(mol, radii)),
        _ => None,
    };

    match (becke_scheme, radii_adjust) {
        (BeckeScheme::Original, None | Some(RadiiAdjust::Treutler | RadiiAdjust::Becke)) => {
            Box::new(BulkBeckeKernel::new(mol, table))
        }
        (scheme, Some(RadiiAdjust::Custom(f))) => {
            Box::new(PairwiseKernel::new(mol, Some(f.clone()), scheme.clone()))
        }
        (scheme, _) => {
            let adjust = table.map(|t| -> AdjustFn {
                Arc::new(move |i: usize, j: usize, g: f64| apply_table(&t, i, j, g))
            });
            Box::new(PairwiseKernel::new(mol, adjust, scheme.clone()))
        }
    }
}

/// Absolute coordinates and partitioned weights of every atom's grid,
/// returned atom by atom.
pub fn partition_per_atom(
    mol: &Molecule,
    atom_grids_tab: &AtomicGridTable,
    kernel: &dyn PartitionKernel,
) -> Vec<(Vec<Vector3<f64>>, Vec<f64>)> {
    (0..mol.natm())
        .into_par_iter()
        .map(|ia| {
            let grid = &atom_grids_tab[mol.atom_symbol(ia)];
            let center = mol.atom_coord(ia);
            let coords: Vec<Vector3<f64>> = grid.coords.iter().map(|c| c + center).collect();
            let pbecke = kernel.partition(&coords);
            let weights = grid
                .weights
                .iter()
                .enumerate()
                .map(|(p, &vol)| {
                    let col = pbecke.column(p);
                    vol * col[ia] / col.sum()
                })
                .collect();
            (coords, weights)
        })
        .collect()
}

/// Concatenated coordinates and weights of the whole molecule.
pub fn get_partition(
    mol: &Molecule,
    atom_grids_tab: &AtomicGridTable,
    radii_adjust: Option<&RadiiAdjust>,
    atomic_radii: Option<AtomicRadii>,
    becke_scheme: &BeckeScheme,
) -> (Vec<Vector3<f64>>, Vec<f64>) {
    let kernel = select_kernel(mol, radii_adjust, atomic_radii, becke_scheme);
    let mut coords_all = Vec::new();
    let mut weights_all = Vec::new();
    for (coords, weights) in partition_per_atom(mol, atom_grids_tab, kernel.as_ref()) {
        coords_all.extend(coords);
        weights_all.extend(weights);
    }
    (coords_all, weights_all)
}
