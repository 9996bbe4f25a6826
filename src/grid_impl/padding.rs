//! Zero-weight padding to a multiple of the evaluation block size.

use super::grids::{GlobalGrid, PADDING_ATOM};
use crate::constants::PADDING_COORD;
use nalgebra::Vector3;

/// Points needed to round `ngrids` up to a multiple of `alignment`.
pub fn padding_size(ngrids: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return 0;
    }
    ngrids.div_ceil(alignment) * alignment - ngrids
}

/// Append padding points: a fixed off-nucleus position, zero weights and the
/// `PADDING_ATOM` owner.
pub fn pad_grids(mut grid: GlobalGrid, alignment: usize) -> GlobalGrid {
    let padding = padding_size(grid.len(), alignment);
    if padding == 0 {
        return grid;
    }
    let n = grid.len() + padding;
    grid.coords.resize(n, Vector3::repeat(PADDING_COORD));
    grid.weights.resize(n, 0.0);
    grid.atm_idx.resize(n, PADDING_ATOM);
    grid.quadrature_weights.resize(n, 0.0);
    grid
}
