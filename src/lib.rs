//! Multicenter numerical integration grids for molecular DFT.
//!
//! Every atom contributes an atom-centred radial × angular quadrature. The
//! atomic grids are stitched together with Becke-type partition weights,
//! grouped into spatial boxes and padded for batched evaluation.

pub mod constants;
pub mod error;
pub mod molecule;
pub mod lebedev_impl;
pub mod radial_impl;
pub mod prune_impl;
pub mod grid_impl;

pub use error::GridError;
pub use grid_impl::{
    arg_group_grids, gen_atomic_grids, get_partition, pad_grids, padding_size, select_kernel,
    AngularSpec, AtomGridSpec, AtomicGrid, AtomicGridTable, AtomicRadii, BeckeScheme,
    BulkBeckeKernel, DensityPruning, DistanceScreening, GlobalGrid, GridConfig, Grids,
    PairwiseKernel, PartitionKernel, RadiiAdjust, ScreenIndex, ScreeningProvider, ShellExtent,
    PADDING_ATOM,
};
pub use lebedev_impl::{AngularGridTable, LebedevTable, LEBEDEV_NGRID, LEBEDEV_ORDER};
pub use molecule::Molecule;
pub use prune_impl::PruneScheme;
pub use radial_impl::{RadialMethod, RadialScheme};
