//! Molecular grid assembly: atomic grids, partitioning, grouping, padding.

mod atomic;
mod config;
mod grids;
mod grouping;
mod padding;
mod partition;
mod screening;

#[cfg(test)]
mod tests;

pub use atomic::{
    default_ang, default_rad, expand_shells, gen_atomic_grids, resolve_atom_grid, snap_angular,
    AtomicGrid, AtomicGridTable,
};
pub use config::{AngularSpec, AtomGridSpec, AtomicRadii, GridConfig};
pub use grids::{prune_by_density, DensityPruning, GlobalGrid, Grids, PADDING_ATOM};
pub use grouping::{arg_group_grids, invert_permutation};
pub use padding::{pad_grids, padding_size};
pub use partition::{
    becke_atomic_radii_adjust, get_partition, original_becke, partition_per_atom, select_kernel,
    stratmann, treutler_atomic_radii_adjust, AdjustFn, BeckeScheme, BulkBeckeKernel,
    PairwiseKernel, PartitionKernel, RadiiAdjust, SmoothingFn,
};
pub use screening::{DistanceScreening, ScreenIndex, ScreeningProvider, ShellExtent};
