//! Box grouping of grid points for data locality.

use crate::constants::GROUP_BOUNDARY_PENALTY;
use crate::molecule::Molecule;
use nalgebra::Vector3;
use tracing::debug;

/// Permutation that groups `coords` by the box they fall into.
///
/// The bounding box of the atoms, widened by `GROUP_BOUNDARY_PENALTY`, is cut
/// into boxes of roughly `box_size`. Points outside the widened box land in
/// the nearest boundary layer. Boxes are visited in (x, y, z) order and the
/// original order is kept within a box.
pub fn arg_group_grids(mol: &Molecule, coords: &[Vector3<f64>], box_size: f64) -> Vec<usize> {
    if mol.natm() == 0 {
        return (0..coords.len()).collect();
    }

    let mut lower = mol.coords[0];
    let mut upper = mol.coords[0];
    for c in &mol.coords[1..] {
        lower = lower.inf(c);
        upper = upper.sup(c);
    }
    let margin = Vector3::repeat(GROUP_BOUNDARY_PENALTY);
    lower -= margin;
    upper += margin;

    let extent = upper - lower;
    let boxes = extent.map(|e| ((e / box_size).round_ties_even() as i64).max(1));
    debug!(
        "tot_boxes {}, boxes in each direction {:?}",
        (boxes.x + 2) * (boxes.y + 2) * (boxes.z + 2),
        boxes.as_slice()
    );
    let edge = Vector3::new(
        extent.x / boxes.x as f64,
        extent.y / boxes.y as f64,
        extent.z / boxes.z as f64,
    );

    let box_ids: Vec<[i64; 3]> = coords
        .iter()
        .map(|c| {
            let mut id = [0_i64; 3];
            for k in 0..3 {
                let frac = (c[k] - lower[k]) / edge[k];
                id[k] = (frac.floor() as i64).clamp(-1, boxes[k]);
            }
            id
        })
        .collect();

    let mut order: Vec<usize> = (0..coords.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| box_ids[i]);
    order
}

/// Inverse of a permutation.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; perm.len()];
    for (dst, &src) in perm.iter().enumerate() {
        inverse[src] = dst;
    }
    inverse
}
