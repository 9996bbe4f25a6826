//! Radial quadratures for atom-centred grids.
//!
//! Each scheme maps a shell count to abscissas `r` (Bohr, ascending) and
//! weights `dr` such that `Σ f(r_i) dr_i ≈ ∫₀^∞ f(r) dr`.

#[cfg(test)]
mod tests;

use crate::constants::bragg_radius;
use serde::{Deserialize, Serialize};
use std::f64::consts::{LN_2, PI};
use std::fmt;
use std::sync::Arc;

/// Pluggable radial grid generator.
pub trait RadialScheme: Send + Sync {
    fn generate(&self, n: usize, charge: usize, atom_index: usize) -> (Vec<f64>, Vec<f64>);

    fn name(&self) -> &str;
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialMethod {
    /// Treutler-Ahlrichs M4, JCP 102, 346 (1995)
    #[default]
    Treutler,
    /// Pérez-Jordá, San-Fabián and Moscardó, PRA 45, 6424 (1992)
    GaussChebyshev,
    /// Mura and Knowles, JCP 104, 9848 (1996)
    MuraKnowles,
    /// Delley, J. Comput. Chem. 17, 1152 (1996)
    Delley,
    /// Becke, JCP 88, 2547 (1988)
    Becke,
    #[serde(skip)]
    Custom(Arc<dyn RadialScheme>),
}

impl fmt::Debug for RadialMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RadialScheme for RadialMethod {
    fn generate(&self, n: usize, charge: usize, atom_index: usize) -> (Vec<f64>, Vec<f64>) {
        match self {
            RadialMethod::Treutler => treutler_ahlrichs(n),
            RadialMethod::GaussChebyshev => gauss_chebyshev(n),
            RadialMethod::MuraKnowles => mura_knowles(n, charge),
            RadialMethod::Delley => delley(n),
            RadialMethod::Becke => becke(n, charge),
            RadialMethod::Custom(scheme) => scheme.generate(n, charge, atom_index),
        }
    }

    fn name(&self) -> &str {
        match self {
            RadialMethod::Treutler => "treutler",
            RadialMethod::GaussChebyshev => "gauss_chebyshev",
            RadialMethod::MuraKnowles => "mura_knowles",
            RadialMethod::Delley => "delley",
            RadialMethod::Becke => "becke",
            RadialMethod::Custom(scheme) => scheme.name(),
        }
    }
}

/// Treutler-Ahlrichs M4 mapping of Gauss-Chebyshev (second kind) nodes.
pub fn treutler_ahlrichs(n: usize) -> (Vec<f64>, Vec<f64>) {
    let step = PI / (n + 1) as f64;
    let ln2 = 1.0 / LN_2;
    let mut r = Vec::with_capacity(n);
    let mut dr = Vec::with_capacity(n);
    // x runs from +1 towards -1, so walk the nodes backwards to get ascending r
    for i in (0..n).rev() {
        let theta = (i + 1) as f64 * step;
        let x = theta.cos();
        let log_term = ((1.0 - x) / 2.0).ln();
        let xi = (1.0 + x).powf(0.6);
        r.push(-ln2 * xi * log_term);
        dr.push(step * theta.sin() * ln2 * xi * (-0.6 / (1.0 + x) * log_term + 1.0 / (1.0 - x)));
    }
    (r, dr)
}

pub fn gauss_chebyshev(n: usize) -> (Vec<f64>, Vec<f64>) {
    let ln2 = 1.0 / LN_2;
    let fac = 16.0 / 3.0 / (n + 1) as f64;
    let x1: Vec<f64> = (1..=n).map(|i| i as f64 * PI / (n + 1) as f64).collect();
    let raw: Vec<f64> = x1
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            (n as f64 - 1.0 - 2.0 * i as f64) / (n + 1) as f64
                + (1.0 + 2.0 / 3.0 * x.sin().powi(2)) * (2.0 * x).sin() / PI
        })
        .collect();
    // antisymmetrize to remove rounding asymmetry between mirrored nodes
    let xi: Vec<f64> = (0..n).map(|i| (raw[i] - raw[n - 1 - i]) / 2.0).collect();

    let r = xi.iter().map(|&v| 1.0 - (1.0 + v).ln() * ln2).collect();
    let dr = x1
        .iter()
        .zip(&xi)
        .map(|(&x, &v)| fac * x.sin().powi(4) * ln2 / (1.0 + v))
        .collect();
    (r, dr)
}

pub fn mura_knowles(n: usize, charge: usize) -> (Vec<f64>, Vec<f64>) {
    let far = match charge {
        3 | 4 | 11 | 12 | 19 | 20 => 7.0,
        _ => 5.2,
    };
    (0..n)
        .map(|i| {
            let x = (i as f64 + 0.5) / n as f64;
            let x3 = x * x * x;
            (-far * (1.0 - x3).ln(), far * 3.0 * x * x / ((1.0 - x3) * n as f64))
        })
        .unzip()
}

pub fn delley(n: usize) -> (Vec<f64>, Vec<f64>) {
    let r_outer = 12.0;
    let step = 1.0 / (n + 1) as f64;
    let rfac = r_outer / (1.0 - (n as f64 * step).powi(2)).ln();
    (1..=n)
        .map(|i| {
            let t = i as f64 * step;
            (
                rfac * (1.0 - t * t).ln(),
                rfac * (-2.0 * i as f64 * step * step) / (1.0 - t * t),
            )
        })
        .unzip()
}

/// Becke's mapping `r = rm (1+t)/(1-t)` of Gauss-Chebyshev nodes.
pub fn becke(n: usize, charge: usize) -> (Vec<f64>, Vec<f64>) {
    let rm = if charge == 1 {
        bragg_radius(charge)
    } else {
        bragg_radius(charge) * 0.5
    };
    // t descends with i; iterate in reverse for ascending r
    (1..=n)
        .rev()
        .map(|i| {
            let t = (PI * (2 * i - 1) as f64 / (2 * n) as f64).cos();
            let w = PI / n as f64 * (1.0 - t * t).sqrt();
            ((1.0 + t) / (1.0 - t) * rm, w * 2.0 / (1.0 - t).powi(2) * rm)
        })
        .unzip()
}
