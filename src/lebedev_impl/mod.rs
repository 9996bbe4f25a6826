//! Lebedev-Laikov quadratures on the unit sphere.
//!
//! V. I. Lebedev and D. N. Laikov, "A quadrature formula for the sphere of the
//! 131st algebraic order of accuracy", Doklady Mathematics 59, 477-481 (1999).
//!
//! Every rule is generated from a handful of octahedral orbits. Weights are
//! normalized so that each rule sums to one; callers multiply by 4πr²dr.

mod tables;
#[cfg(test)]
mod tests;

use crate::error::GridError;
use itertools::iproduct;
use nalgebra::Vector3;
use tables::RULES;

/// `(order, npoints)` for every Lebedev rule.
pub const LEBEDEV_ORDER: [(usize, usize); 33] = [
    (0, 1),
    (3, 6),
    (5, 14),
    (7, 26),
    (9, 38),
    (11, 50),
    (13, 74),
    (15, 86),
    (17, 110),
    (19, 146),
    (21, 170),
    (23, 194),
    (25, 230),
    (27, 266),
    (29, 302),
    (31, 350),
    (35, 434),
    (41, 590),
    (47, 770),
    (53, 974),
    (59, 1202),
    (65, 1454),
    (71, 1730),
    (77, 2030),
    (83, 2354),
    (89, 2702),
    (95, 3074),
    (101, 3470),
    (107, 3890),
    (113, 4334),
    (119, 4802),
    (125, 5294),
    (131, 5810),
];

/// Supported point counts in ascending order.
pub const LEBEDEV_NGRID: [usize; 33] = [
    1, 6, 14, 26, 38, 50, 74, 86, 110, 146, 170, 194, 230, 266, 302, 350, 434, 590, 770, 974,
    1202, 1454, 1730, 2030, 2354, 2702, 3074, 3470, 3890, 4334, 4802, 5294, 5810,
];

/// Number of points of the rule with the given algebraic order.
pub fn lebedev_npoints(order: usize) -> Option<usize> {
    LEBEDEV_ORDER
        .iter()
        .find(|(o, _)| *o == order)
        .map(|&(_, n)| n)
}

pub fn is_lebedev_size(npoints: usize) -> bool {
    LEBEDEV_NGRID.contains(&npoints)
}

/// Octahedral orbit generators. The trailing value of each variant is the
/// weight shared by all points of the orbit.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Orbit {
    /// (±1, 0, 0) and permutations, 6 points
    A1(f64),
    /// (0, ±1/√2, ±1/√2) and permutations, 12 points
    A2(f64),
    /// (±1/√3, ±1/√3, ±1/√3), 8 points
    A3(f64),
    /// (±a, ±a, ±b) and permutations, 24 points
    B(f64, f64),
    /// (±a, ±b, 0) and permutations, 24 points
    C(f64, f64),
    /// (±a, ±b, ±c) and permutations, 48 points
    D(f64, f64, f64),
}

impl Orbit {
    fn expand(&self, out: &mut Vec<(Vector3<f64>, f64)>) {
        match *self {
            Orbit::A1(v) => push_permuted(out, [1.0, 0.0, 0.0], v),
            Orbit::A2(v) => {
                let a = 0.5_f64.sqrt();
                push_permuted(out, [0.0, a, a], v);
            }
            Orbit::A3(v) => {
                let a = (1.0_f64 / 3.0).sqrt();
                push_permuted(out, [a, a, a], v);
            }
            Orbit::B(a, v) => {
                let b = (1.0 - 2.0 * a * a).sqrt();
                push_permuted(out, [a, a, b], v);
            }
            Orbit::C(a, v) => {
                let b = (1.0 - a * a).sqrt();
                push_permuted(out, [a, b, 0.0], v);
            }
            Orbit::D(a, b, v) => {
                let c = (1.0 - a * a - b * b).sqrt();
                push_permuted(out, [a, b, c], v);
            }
        }
    }
}

/// Push every distinct signed permutation of `base` with weight `v`.
fn push_permuted(out: &mut Vec<(Vector3<f64>, f64)>, base: [f64; 3], v: f64) {
    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let start = out.len();
    for perm in PERMUTATIONS {
        let p = [base[perm[0]], base[perm[1]], base[perm[2]]];
        for (sx, sy, sz) in iproduct!([1.0, -1.0], [1.0, -1.0], [1.0, -1.0]) {
            // a zero component only takes the + sign
            if (p[0] == 0.0 && sx < 0.0) || (p[1] == 0.0 && sy < 0.0) || (p[2] == 0.0 && sz < 0.0)
            {
                continue;
            }
            let dir = Vector3::new(sx * p[0], sy * p[1], sz * p[2]);
            if out[start..].iter().any(|(d, _)| *d == dir) {
                continue;
            }
            out.push((dir, v));
        }
    }
}

/// Source of unit-sphere quadratures, keyed by point count.
pub trait AngularGridTable: Send + Sync {
    /// Directions and weights (summing to one) of the rule with `npoints`.
    fn lookup(&self, npoints: usize) -> Result<Vec<(Vector3<f64>, f64)>, GridError>;

    /// Largest point count this table can produce.
    fn max_npoints(&self) -> usize;
}

/// Built-in table of every Lebedev rule, from 1 to 5810 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct LebedevTable;

impl LebedevTable {
    /// Point counts tabulated by this table.
    pub fn tabulated() -> Vec<usize> {
        std::iter::once(1)
            .chain(RULES.iter().map(|rule| rule.npoints))
            .collect()
    }

    /// Algebraic order of the tabulated rule with `npoints`.
    pub fn order_of(npoints: usize) -> Option<usize> {
        if npoints == 1 {
            return Some(0);
        }
        RULES
            .iter()
            .find(|rule| rule.npoints == npoints)
            .map(|rule| rule.order)
    }
}

impl AngularGridTable for LebedevTable {
    fn lookup(&self, npoints: usize) -> Result<Vec<(Vector3<f64>, f64)>, GridError> {
        if !is_lebedev_size(npoints) {
            return Err(GridError::UnsupportedAngularGrid(npoints));
        }
        if npoints == 1 {
            return Ok(vec![(Vector3::new(1.0, 0.0, 0.0), 1.0)]);
        }
        let rule = RULES
            .iter()
            .find(|rule| rule.npoints == npoints)
            .ok_or(GridError::AngularGridUnavailable(npoints))?;

        let mut grid = Vec::with_capacity(npoints);
        for orbit in rule.orbits {
            orbit.expand(&mut grid);
        }
        debug_assert_eq!(grid.len(), npoints);
        Ok(grid)
    }

    fn max_npoints(&self) -> usize {
        RULES.last().map(|rule| rule.npoints).unwrap_or(1)
    }
}
