//! Read-only molecular geometry consumed by the grid builders.

use crate::constants::{BOHR, DIST_EPSILON};
use nalgebra::{DMatrix, Vector3};
use periodic_table_on_an_enum::Element;

/// Atoms with Cartesian centres in Bohr.
#[derive(Clone, Debug)]
pub struct Molecule {
    pub elements: Vec<Element>,
    pub coords: Vec<Vector3<f64>>,
    pub charge: i32,
}

impl Molecule {
    /// Build a molecule from centres given in Bohr.
    ///
    /// # Panics
    ///
    /// Panics if `elements` and `coords` differ in length.
    pub fn new(elements: Vec<Element>, coords: Vec<Vector3<f64>>) -> Self {
        assert_eq!(
            elements.len(),
            coords.len(),
            "every atom needs exactly one centre"
        );
        Molecule {
            elements,
            coords,
            charge: 0,
        }
    }

    /// Build a molecule from centres given in Angstrom.
    ///
    /// # Panics
    ///
    /// Panics if `elements` and `coords` differ in length.
    pub fn from_angstrom(elements: Vec<Element>, coords: Vec<Vector3<f64>>) -> Self {
        let coords = coords.into_iter().map(|c| c / BOHR).collect();
        Self::new(elements, coords)
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn natm(&self) -> usize {
        self.elements.len()
    }

    pub fn atom_symbol(&self, ia: usize) -> &str {
        self.elements[ia].get_symbol()
    }

    pub fn atom_charge(&self, ia: usize) -> usize {
        self.elements[ia].get_atomic_number() as usize
    }

    pub fn atom_coord(&self, ia: usize) -> Vector3<f64> {
        self.coords[ia]
    }

    /// Number of electrons: nuclear charges minus the molecular charge.
    pub fn nelectron(&self) -> f64 {
        let nuclear: usize = (0..self.natm()).map(|ia| self.atom_charge(ia)).sum();
        nuclear as f64 - self.charge as f64
    }

    /// Pairwise distances between atom centres.
    pub fn inter_distance(&self) -> DMatrix<f64> {
        let n = self.natm();
        DMatrix::from_fn(n, n, |i, j| (self.coords[i] - self.coords[j]).norm())
    }

    /// Inverse pairwise distances; coincident centres map to a large finite
    /// value instead of infinity.
    pub fn inverse_inter_distance(&self) -> DMatrix<f64> {
        self.inter_distance().map(|d| 1.0 / (d + DIST_EPSILON))
    }

    /// Distinct element symbols in order of first appearance.
    pub fn unique_symbols(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for ia in 0..self.natm() {
            let symb = self.atom_symbol(ia);
            if !seen.contains(&symb) {
                seen.push(symb);
            }
        }
        seen
    }
}
