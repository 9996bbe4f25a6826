use crate::config::{Args, Config};
use color_eyre::eyre::{Result, WrapErr};
use molgrid::{
    DensityPruning, DistanceScreening, GlobalGrid, GridConfig, Grids, Molecule, ShellExtent,
};
use nalgebra::Vector3;
use std::f64::consts::PI;
use std::sync::Arc;
use tracing::info;

/// Grid settings from the input file with command-line overrides applied.
pub fn resolve_grid_config(args: &Args, config: &Config) -> GridConfig {
    let mut grid = config.grid.clone();
    if let Some(level) = args.level {
        info!("Overriding grid level with: {}", level);
        grid.level = level;
    }
    if let Some(prune) = args.prune {
        info!("Overriding pruning scheme with: {:?}", prune);
        grid.prune = prune.into();
    }
    if let Some(alignment) = args.alignment {
        grid.alignment = alignment;
    }
    if args.no_sort {
        grid.sort_grids = false;
    }
    grid
}

pub fn build_grids(mol: Molecule, args: &Args, config: &Config) -> Result<Grids> {
    let mut grids = Grids::new(mol.clone(), resolve_grid_config(args, config));
    if let Some(radius) = config.screening.as_ref().and_then(|s| s.radius) {
        let shells = mol
            .coords
            .iter()
            .map(|&center| ShellExtent { center, radius })
            .collect();
        grids = grids.with_screening(Arc::new(DistanceScreening::new(shells)));
    }
    grids.dump_flags();
    grids.build().wrap_err("Failed to build the molecular grid")?;
    Ok(grids)
}

/// Normalized Gaussian exponent for an atom: 1/R² with R the Bragg radius.
pub fn atom_exponent(mol: &Molecule, ia: usize) -> f64 {
    let r = molgrid::constants::bragg_radius(mol.atom_charge(ia)).max(0.5);
    1.0 / (r * r)
}

/// Σ_a Z_a (α_a/π)^{3/2} exp(-α_a |r - R_a|²), integrating to Σ Z.
pub fn promolecular_density(mol: &Molecule, grid: &GlobalGrid) -> Vec<f64> {
    let centers: Vec<(Vector3<f64>, f64, f64)> = (0..mol.natm())
        .map(|ia| {
            let alpha = atom_exponent(mol, ia);
            let norm = mol.atom_charge(ia) as f64 * (alpha / PI).powf(1.5);
            (mol.atom_coord(ia), alpha, norm)
        })
        .collect();
    grid.coords
        .iter()
        .map(|r| {
            centers
                .iter()
                .map(|(c, alpha, norm)| norm * (-alpha * (r - c).norm_squared()).exp())
                .sum()
        })
        .collect()
}

pub fn run_density_pruning(grids: &mut Grids, args: &Args, config: &Config) -> Result<()> {
    let Some(threshold) = args.density_threshold.or(config.density_threshold()) else {
        return Ok(());
    };
    let before = grids.size();
    let rho = match grids.grid() {
        Some(grid) => promolecular_density(grids.molecule(), grid),
        None => return Ok(()),
    };
    info!("\nPruning grids with density threshold {:e}", threshold);
    match grids.prune_by_density(&rho, threshold)? {
        DensityPruning::Unchanged => info!("  Threshold is zero; grid unchanged"),
        DensityPruning::Skipped {
            integrated,
            expected,
        } => info!(
            "  Skipped: density integrates to {:.6}, expected {}",
            integrated, expected
        ),
        DensityPruning::Pruned { dropped } => info!(
            "  Dropped {} points, {} -> {}",
            dropped,
            before,
            grids.size()
        ),
    }
    Ok(())
}
