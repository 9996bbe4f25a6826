use super::runner::atom_exponent;
use molgrid::{GlobalGrid, Molecule};
use std::f64::consts::PI;
use tracing::info;

pub fn report_grid_summary(mol: &Molecule, grid: &GlobalGrid) {
    info!("\nGrid summary:");
    for ia in 0..mol.natm() {
        info!(
            "  Atom {:>2} {:>2}: {} points",
            ia + 1,
            mol.atom_symbol(ia),
            grid.atom_size(ia)
        );
    }
    info!("  Padding points: {}", grid.padding());
    info!("  Total points: {}", grid.len());
    info!("  Total weight: {:.6e}", grid.total_weight());
    if let Some(mask) = &grid.screen_index {
        info!(
            "  Screening: {} of {} (block, shell) pairs significant",
            mask.count_significant(),
            mask.nblocks * mask.nshells
        );
    }
}

/// Integrate one normalized Gaussian per atom; the exact answer is the
/// number of atoms.
pub fn report_integration_check(mol: &Molecule, grid: &GlobalGrid) {
    let gaussians: Vec<_> = (0..mol.natm())
        .map(|ia| {
            let alpha = atom_exponent(mol, ia);
            (mol.atom_coord(ia), alpha, (alpha / PI).powf(1.5))
        })
        .collect();
    let value = grid.integrate(|r| {
        gaussians
            .iter()
            .map(|(c, alpha, norm)| norm * (-alpha * (r - c).norm_squared()).exp())
            .sum()
    });
    let exact = mol.natm() as f64;
    info!("\nIntegration check (normalized atomic Gaussians):");
    info!("  Integral: {:.12}", value);
    info!("  Exact:    {:.12}", exact);
    info!("  Error:    {:.3e}", (value - exact).abs());
}
