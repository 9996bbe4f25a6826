//! End-to-end grid builds driven by the YAML inputs under `example/`.

use approx::assert_relative_eq;
use molgrid::{
    AngularSpec, AtomGridSpec, BeckeScheme, DensityPruning, GridConfig, Grids, Molecule,
    PruneScheme, RadialMethod,
};
use nalgebra::Vector3;
use periodic_table_on_an_enum::Element;
use std::f64::consts::PI;
use std::fs;
use std::path::PathBuf;

fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

/// Molecule and grid settings of an example input.
fn load_example(filename: &str) -> (Molecule, GridConfig) {
    let text = fs::read_to_string(example_path(filename)).unwrap();
    let doc: serde_yml::Value = serde_yml::from_str(&text).unwrap();

    let mut elements = Vec::new();
    let mut coords = Vec::new();
    for atom in doc["geometry"].as_sequence().unwrap() {
        elements.push(Element::from_symbol(atom["element"].as_str().unwrap()).unwrap());
        let xyz: Vec<f64> = atom["coords"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        coords.push(Vector3::new(xyz[0], xyz[1], xyz[2]));
    }
    let mol = match doc["unit"].as_str() {
        Some("bohr") => Molecule::new(elements, coords),
        _ => Molecule::from_angstrom(elements, coords),
    };

    let config = match doc.get("grid") {
        Some(grid) => serde_yml::from_value(grid.clone()).unwrap(),
        None => GridConfig::default(),
    };
    (mol, config)
}

/// Σ_a ∫ (1/π)^{3/2} exp(-|r - R_a|²) = natm
fn normalized_gaussians(mol: &Molecule) -> impl Fn(&Vector3<f64>) -> f64 + Sync + '_ {
    move |r| {
        mol.coords
            .iter()
            .map(|c| (-(r - c).norm_squared()).exp())
            .sum::<f64>()
            / PI.powf(1.5)
    }
}

#[test]
fn test_water_example() {
    let (mol, config) = load_example("h2o.yaml");
    assert_eq!(config.level, 3);
    assert_eq!(config.prune, PruneScheme::Nwchem);

    let mut grids = Grids::new(mol.clone(), config);
    let grid = grids.build().unwrap();
    assert_eq!(grid.len() % 8, 0);
    assert!(grid.atom_size(0) > grid.atom_size(1));
    assert_eq!(grid.atom_size(1), grid.atom_size(2));
    assert_relative_eq!(grid.integrate(normalized_gaussians(&mol)), 3.0, max_relative = 1e-6);

    let rho: Vec<f64> = grid
        .coords
        .iter()
        .map(|r| {
            let per_atom = normalized_gaussians(&mol)(r);
            per_atom * mol.nelectron() / 3.0
        })
        .collect();
    let before = grid.len();
    let outcome = grids.prune_by_density(&rho, 1e-7).unwrap();
    assert!(matches!(outcome, DensityPruning::Pruned { dropped } if dropped > 0));
    assert!(grids.size() < before);
}

#[test]
fn test_h2_stratmann_example() {
    let (mol, config) = load_example("h2_stratmann.yaml");
    assert!(config.radii_adjust.is_none());
    assert!(matches!(config.becke_scheme, BeckeScheme::Stratmann));
    assert_eq!(config.atom_grid["H"].angular, AngularSpec::Uniform(194));

    let mut grids = Grids::new(mol.clone(), config);
    let grid = grids.build().unwrap();
    assert_relative_eq!(grid.integrate(normalized_gaussians(&mol)), 2.0, max_relative = 1e-5);
}

#[test]
fn test_methane_sg1_example() {
    let (mol, config) = load_example("ch4_sg1.yaml");
    assert_eq!(config.prune, PruneScheme::Sg1);
    assert!(matches!(config.radial_method, RadialMethod::MuraKnowles));

    let mut grids = Grids::new(mol.clone(), config);
    let grid = grids.build().unwrap();
    assert_relative_eq!(grid.integrate(normalized_gaussians(&mol)), 5.0, max_relative = 1e-3);
}

#[test]
fn test_levels_refine_the_grid() {
    let (mol, _) = load_example("h2o.yaml");
    let mut sizes = Vec::new();
    for level in 0..=9 {
        let mut grids = Grids::new(mol.clone(), GridConfig::default().with_level(level));
        sizes.push(grids.build().unwrap().len());
    }
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_large_angular_overrides() {
    let (mol, _) = load_example("h2o.yaml");
    let config = GridConfig::default()
        .with_prune(PruneScheme::None)
        .with_alignment(0)
        .with_atom_grid("O", AtomGridSpec::new(75, 590))
        .with_atom_grid("H", AtomGridSpec::new(30, 5810));
    let mut grids = Grids::new(mol.clone(), config);
    let grid = grids.build().unwrap();
    assert_eq!(grid.len(), 75 * 590 + 2 * 30 * 5810);
    assert_relative_eq!(grid.integrate(normalized_gaussians(&mol)), 3.0, max_relative = 1e-3);
}

#[test]
#[should_panic(expected = "every atom needs exactly one centre")]
fn test_molecule_rejects_unpaired_coordinates() {
    Molecule::new(vec![Element::Hydrogen, Element::Hydrogen], vec![Vector3::zeros()]);
}
