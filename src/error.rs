use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Unsupported angular grids {0}")]
    UnsupportedAngularGrid(usize),

    #[error("Lebedev grid with {0} points is not tabulated")]
    AngularGridUnavailable(usize),

    #[error("Grid level {0} is out of range (0..=9)")]
    InvalidLevel(usize),

    #[error("Invalid grid for atom {symbol}: {reason}")]
    InvalidAtomGrid { symbol: String, reason: String },

    #[error("NWChem pruning cannot handle {0} angular points")]
    PruneAngularGrid(usize),

    #[error("Density has {found} values but the grid has {expected} points")]
    DensityLength { expected: usize, found: usize },

    #[error("Molecule contains no atoms")]
    EmptyMolecule,
}
