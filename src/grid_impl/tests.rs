use super::*;
use crate::error::GridError;
use crate::lebedev_impl::{AngularGridTable, LebedevTable};
use crate::molecule::Molecule;
use crate::prune_impl::PruneScheme;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::{DMatrix, Vector3};
use periodic_table_on_an_enum::Element;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn hydrogen_atom() -> Molecule {
    Molecule::new(vec![Element::Hydrogen], vec![Vector3::zeros()])
}

fn h2(bond: f64) -> Molecule {
    Molecule::new(
        vec![Element::Hydrogen, Element::Hydrogen],
        vec![Vector3::zeros(), Vector3::new(0.0, 0.0, bond)],
    )
}

fn water() -> Molecule {
    Molecule::from_angstrom(
        vec![Element::Oxygen, Element::Hydrogen, Element::Hydrogen],
        vec![
            Vector3::new(0.0, 0.0, 0.1173),
            Vector3::new(0.0, 0.7572, -0.4692),
            Vector3::new(0.0, -0.7572, -0.4692),
        ],
    )
}

fn gaussian_at(centers: &[Vector3<f64>]) -> impl Fn(&Vector3<f64>) -> f64 + Sync + '_ {
    move |r| centers.iter().map(|c| (-(r - c).norm_squared()).exp()).sum()
}

#[test]
fn test_default_sizes_follow_level_tables() {
    assert_eq!(default_rad(1, 3).unwrap(), 50);
    assert_eq!(default_rad(8, 3).unwrap(), 75);
    assert_eq!(default_ang(1, 3).unwrap(), 302);
    assert_eq!(default_ang(14, 3).unwrap(), 434);
    for level in 0..9 {
        assert!(default_rad(1, level).unwrap() < default_rad(1, level + 1).unwrap());
        assert!(default_rad(1, level).unwrap() <= default_rad(26, level).unwrap());
    }
    assert_eq!(default_rad(1, 10), Err(GridError::InvalidLevel(10)));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records formatted events into a buffer.
fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}

#[test]
fn test_snap_angular() {
    let (exact, logs) = with_captured_logs(|| snap_angular(302, 0, "H"));
    assert_eq!(exact, Ok(302));
    assert!(logs.is_empty());

    // Lebedev order 29 is the 302-point rule
    let (snapped, logs) = with_captured_logs(|| snap_angular(29, 4, "O"));
    assert_eq!(snapped, Ok(302));
    assert!(logs.contains("WARN"));
    assert!(logs.contains(
        "n_ang 29 for atom 4 O is not the supported Lebedev angular grids. Set n_ang to 302"
    ));

    assert_eq!(
        snap_angular(300, 0, "H"),
        Err(GridError::UnsupportedAngularGrid(300))
    );
}

#[test]
fn test_per_shell_override_must_match_radial_count() {
    let mol = hydrogen_atom();
    let mut atom_grid = BTreeMap::new();
    atom_grid.insert(
        "H".to_string(),
        AtomGridSpec {
            radial: 3,
            angular: AngularSpec::PerShell(vec![6, 14]),
        },
    );
    let err = resolve_atom_grid(&mol, 0, &atom_grid, 3).unwrap_err();
    assert!(matches!(err, GridError::InvalidAtomGrid { .. }));

    atom_grid.insert(
        "H".to_string(),
        AtomGridSpec {
            radial: 2,
            angular: AngularSpec::PerShell(vec![6, 17]),
        },
    );
    let (n_rad, angular) = resolve_atom_grid(&mol, 0, &atom_grid, 3).unwrap();
    assert_eq!(n_rad, 2);
    assert_eq!(angular, AngularSpec::PerShell(vec![6, 110]));
}

#[test]
fn test_expand_shells_ordering_and_weights() {
    let rad = [1.0, 2.0, 3.0];
    let rad_weight = [0.5, 1.5, 2.5];
    let grid = expand_shells(&rad, &rad_weight, &[6, 14, 6], &LebedevTable).unwrap();
    assert_eq!(grid.len(), 26);

    // the two 6-point shells come first, angular point major
    assert_relative_eq!(grid.coords[0].norm(), 1.0, epsilon = 1e-14);
    assert_relative_eq!(grid.coords[1].norm(), 3.0, epsilon = 1e-14);
    assert_relative_eq!(grid.coords[2].norm(), 1.0, epsilon = 1e-14);
    for c in &grid.coords[12..] {
        assert_relative_eq!(c.norm(), 2.0, epsilon = 1e-14);
    }

    let shell_sum = |r: f64| -> f64 {
        grid.coords
            .iter()
            .zip(&grid.weights)
            .filter(|(c, _)| (c.norm() - r).abs() < 1e-10)
            .map(|(_, w)| w)
            .sum()
    };
    for (&r, &w) in rad.iter().zip(&rad_weight) {
        assert_relative_eq!(shell_sum(r), w, epsilon = 1e-12);
    }
}

#[test]
fn test_expand_shells_largest_rule() {
    let grid = expand_shells(&[2.0], &[1.0], &[5810], &LebedevTable).unwrap();
    assert_eq!(grid.len(), 5810);
    assert_relative_eq!(grid.weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    for c in &grid.coords {
        assert_relative_eq!(c.norm(), 2.0, epsilon = 1e-14);
    }
}

#[test]
fn test_atomic_grids_one_entry_per_element() {
    let mol = water();
    let config = GridConfig::default();
    let tab = gen_atomic_grids(
        &mol,
        &config.atom_grid,
        &config.radial_method,
        config.level,
        config.prune,
        &LebedevTable,
    )
    .unwrap();
    assert_eq!(tab.len(), 2);
    assert!(tab["O"].len() > tab["H"].len());
}

#[test]
fn test_user_atom_grid_without_pruning() {
    let config = GridConfig::default()
        .with_prune(PruneScheme::None)
        .with_atom_grid("H", AtomGridSpec::new(20, 110))
        .with_alignment(0);
    let mut grids = Grids::new(hydrogen_atom(), config);
    let grid = grids.build().unwrap();
    assert_eq!(grid.len(), 20 * 110);
    assert_eq!(grid.padding(), 0);
}

#[test]
fn test_stratmann_step() {
    assert_eq!(stratmann(0.7), 1.0);
    assert_eq!(stratmann(-0.64), -1.0);
    assert_abs_diff_eq!(stratmann(0.0), 0.0);
    assert_relative_eq!(stratmann(0.6399999999), 1.0, epsilon = 1e-8);
    assert_relative_eq!(stratmann(0.3), -stratmann(-0.3), epsilon = 1e-15);
}

#[test]
fn test_original_becke_step_is_odd_and_bounded() {
    for k in -10..=10 {
        let g = k as f64 / 10.0;
        let s = original_becke(g);
        assert!(s.abs() <= 1.0);
        assert_relative_eq!(s, -original_becke(-g), epsilon = 1e-15);
    }
    assert_relative_eq!(original_becke(1.0), 1.0);
}

#[test]
fn test_radii_adjust_tables() {
    let mol = water();
    let table = treutler_atomic_radii_adjust(&mol, AtomicRadii::Bragg);
    assert_abs_diff_eq!(table[(1, 2)], 0.0);
    assert_relative_eq!(table[(0, 1)], -table[(1, 0)], epsilon = 1e-14);
    let becke = becke_atomic_radii_adjust(&mol, AtomicRadii::Bragg);
    assert!(becke.iter().all(|a| a.abs() <= 0.5));
    assert!(becke[(0, 1)].abs() > table[(0, 1)].abs());
}

#[test]
fn test_bulk_and_pairwise_kernels_agree() {
    let mol = water();
    let points: Vec<Vector3<f64>> = (0..40)
        .map(|k| {
            let t = k as f64 * 0.37;
            Vector3::new(t.sin() * 1.7, (2.0 * t).cos() * 1.3, t.cos() - 0.3)
        })
        .collect();

    let plain_bulk = BulkBeckeKernel::new(&mol, None).partition(&points);
    let plain_pair = PairwiseKernel::new(&mol, None, BeckeScheme::Original).partition(&points);
    assert_relative_eq!(plain_bulk, plain_pair, epsilon = 1e-12);

    for table in [
        treutler_atomic_radii_adjust(&mol, AtomicRadii::Bragg),
        becke_atomic_radii_adjust(&mol, AtomicRadii::Sg1),
    ] {
        let shared = table.clone();
        let adjust: AdjustFn =
            Arc::new(move |i: usize, j: usize, g: f64| g + shared[(i, j)] * (1.0 - g * g));
        let bulk = BulkBeckeKernel::new(&mol, Some(table)).partition(&points);
        let pair = PairwiseKernel::new(&mol, Some(adjust), BeckeScheme::Original).partition(&points);
        assert_eq!(bulk.shape(), (3, 40));
        assert_relative_eq!(bulk, pair, epsilon = 1e-12);
    }
}

#[test]
fn test_kernel_selection() {
    let mol = h2(1.4);
    let original = BeckeScheme::Original;
    let stratmann_scheme = BeckeScheme::Stratmann;
    let treutler = RadiiAdjust::Treutler;
    let bragg = Some(AtomicRadii::Bragg);
    assert_eq!(select_kernel(&mol, None, bragg, &original).name(), "bulk_becke");
    assert_eq!(
        select_kernel(&mol, Some(&treutler), bragg, &original).name(),
        "bulk_becke"
    );
    assert_eq!(
        select_kernel(&mol, Some(&treutler), bragg, &stratmann_scheme).name(),
        "pairwise"
    );
    let custom = RadiiAdjust::Custom(Arc::new(|_: usize, _: usize, g: f64| g));
    assert_eq!(select_kernel(&mol, Some(&custom), bragg, &original).name(), "pairwise");
}

#[test]
fn test_isolated_atom_partition_is_one() {
    let mol = hydrogen_atom();
    let points = vec![Vector3::new(0.3, 0.1, -2.0), Vector3::new(5.0, 0.0, 0.0)];
    let p = BulkBeckeKernel::new(&mol, None).partition(&points);
    assert_eq!(p, DMatrix::from_element(1, 2, 1.0));
}

#[test]
fn test_partition_of_unity() {
    let mol = water();
    let config = GridConfig::default();
    let tab = gen_atomic_grids(
        &mol,
        &config.atom_grid,
        &config.radial_method,
        config.level,
        config.prune,
        &LebedevTable,
    )
    .unwrap();
    let (coords, weights) = get_partition(
        &mol,
        &tab,
        config.radii_adjust.as_ref(),
        config.atomic_radii,
        &config.becke_scheme,
    );
    let expected: usize = (0..mol.natm()).map(|ia| tab[mol.atom_symbol(ia)].len()).sum();
    assert_eq!(coords.len(), expected);
    assert_eq!(weights.len(), expected);

    // p_a / Σ_b p_b sums to one over the atoms at any point
    let kernel = select_kernel(&mol, config.radii_adjust.as_ref(), config.atomic_radii, &config.becke_scheme);
    let p = kernel.partition(&coords[..200]);
    for col in p.column_iter() {
        let normalized: f64 = col.iter().map(|v| v / col.sum()).sum();
        assert_relative_eq!(normalized, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_single_atom_gaussian() {
    let mut grids = Grids::new(hydrogen_atom(), GridConfig::default());
    let grid = grids.build().unwrap();
    let center = [Vector3::zeros()];
    let value = grid.integrate(gaussian_at(&center));
    assert_relative_eq!(value, PI.powf(1.5), max_relative = 1e-10);
}

#[test]
fn test_h2_gaussians() {
    for (bond, tol) in [(1.4, 1e-6), (20.0, 1e-5)] {
        let mol = h2(bond);
        let centers = mol.coords.clone();
        let mut grids = Grids::new(mol, GridConfig::default());
        let grid = grids.build().unwrap();
        let value = grid.integrate(gaussian_at(&centers));
        assert_relative_eq!(value, 2.0 * PI.powf(1.5), max_relative = tol);
    }
}

#[test]
fn test_water_stratmann_gaussians() {
    let mol = water();
    let centers = mol.coords.clone();
    let config = GridConfig {
        becke_scheme: BeckeScheme::Stratmann,
        ..GridConfig::default()
    };
    let mut grids = Grids::new(mol, config);
    let grid = grids.build().unwrap();
    let value = grid.integrate(gaussian_at(&centers));
    assert_relative_eq!(value, 3.0 * PI.powf(1.5), max_relative = 1e-4);
}

#[test]
fn test_grouping_is_a_permutation() {
    let mol = water();
    let config = GridConfig::default().with_sorting(false).with_alignment(0);
    let mut grids = Grids::new(mol.clone(), config);
    let coords = grids.build().unwrap().coords.clone();

    let perm = arg_group_grids(&mol, &coords, 1.2);
    let mut seen = perm.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..coords.len()).collect::<Vec<_>>());

    let inverse = invert_permutation(&perm);
    let grouped: Vec<Vector3<f64>> = perm.iter().map(|&i| coords[i]).collect();
    let restored: Vec<Vector3<f64>> = inverse.iter().map(|&k| grouped[k]).collect();
    assert_eq!(restored, coords);
}

#[test]
fn test_grouping_clamps_outlying_points() {
    let mol = hydrogen_atom();
    let coords = [
        Vector3::new(100.0, 0.0, 0.0),
        Vector3::new(-100.0, 0.0, 0.0),
        Vector3::zeros(),
    ];
    assert_eq!(arg_group_grids(&mol, &coords, 1.2), vec![1, 2, 0]);
}

#[test]
fn test_padding() {
    assert_eq!(padding_size(61, 8), 3);
    assert_eq!(padding_size(64, 8), 0);
    assert_eq!(padding_size(61, 0), 0);
    assert_eq!(padding_size(61, 1), 0);

    let grid = GlobalGrid {
        coords: vec![Vector3::new(1.0, 2.0, 3.0); 61],
        weights: vec![0.5; 61],
        atm_idx: vec![0; 61],
        quadrature_weights: vec![0.5; 61],
        screen_index: None,
    };
    let padded = pad_grids(grid, 8);
    assert_eq!(padded.len(), 64);
    assert_eq!(padded.coords[63], Vector3::repeat(1e-4));
    assert_eq!(&padded.weights[61..], &[0.0; 3]);
    assert_eq!(&padded.quadrature_weights[61..], &[0.0; 3]);
    assert_eq!(&padded.atm_idx[61..], &[PADDING_ATOM; 3]);
    assert_relative_eq!(padded.total_weight(), 30.5);

    let again = pad_grids(padded.clone(), 8);
    assert_eq!(again.len(), 64);
}

#[test]
fn test_build_snapshot_layout() {
    let mol = water();
    let mut grids = Grids::new(mol, GridConfig::default());
    assert!(!grids.is_built());
    assert_eq!(grids.size(), 0);

    let grid = grids.build().unwrap().clone();
    assert!(grids.is_built());
    assert_eq!(grid.len() % 8, 0);
    assert_eq!(grid.coords.len(), grid.len());
    assert_eq!(grid.atm_idx.len(), grid.len());
    assert_eq!(grid.quadrature_weights.len(), grid.len());
    let owned: usize = (0..3).map(|ia| grid.atom_size(ia)).sum();
    assert_eq!(owned + grid.padding(), grid.len());
    assert!(grid.screen_index.is_none());
}

#[test]
fn test_unsorted_grid_keeps_atom_order() {
    let config = GridConfig::default().with_sorting(false);
    let mut grids = Grids::new(water(), config);
    let grid = grids.build().unwrap();
    let owners: Vec<i32> = grid.atm_idx.iter().copied().filter(|&a| a != PADDING_ATOM).collect();
    assert!(owners.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(owners[0], 0);
}

#[test]
fn test_empty_molecule() {
    let mut grids = Grids::new(Molecule::new(vec![], vec![]), GridConfig::default());
    assert_eq!(grids.build().unwrap_err(), GridError::EmptyMolecule);
}

#[test]
fn test_invalidate_on_change() {
    let mut grids = Grids::new(h2(1.4), GridConfig::default());
    let n3 = grids.build().unwrap().len();
    grids.set_config(GridConfig::default().with_level(1));
    assert!(!grids.is_built());
    let n1 = grids.build().unwrap().len();
    assert!(n1 < n3);

    grids.invalidate();
    assert!(grids.grid().is_none());
    grids.set_molecule(hydrogen_atom());
    assert!(grids.ensure_built().unwrap().len() < n1);
}

#[test]
fn test_density_pruning() {
    let mol = h2(1.4);
    let centers = mol.coords.clone();
    let mut grids = Grids::new(mol, GridConfig::default());
    let before = grids.build().unwrap().clone();
    let density = |r: &Vector3<f64>| gaussian_at(&centers)(r) / PI.powf(1.5);
    let rho: Vec<f64> = before.coords.iter().map(density).collect();

    assert_eq!(grids.prune_by_density(&rho, 0.0).unwrap(), DensityPruning::Unchanged);
    assert_eq!(grids.size(), before.len());

    assert_eq!(
        grids.prune_by_density(&rho[1..], 1e-8),
        Err(GridError::DensityLength {
            expected: before.len(),
            found: before.len() - 1
        })
    );

    let zeros = vec![0.0; before.len()];
    assert!(matches!(
        grids.prune_by_density(&zeros, 1e-8).unwrap(),
        DensityPruning::Skipped { .. }
    ));
    assert_eq!(grids.size(), before.len());

    let outcome = grids.prune_by_density(&rho, 1e-8).unwrap();
    let DensityPruning::Pruned { dropped } = outcome else {
        panic!("expected pruning, got {:?}", outcome);
    };
    assert!(dropped > 0);
    let after = grids.grid().unwrap();
    assert_eq!(after.len() % 8, 0);
    assert!(after.len() < before.len());
    assert_relative_eq!(after.integrate(density), 2.0, max_relative = 1e-6);
}

#[test]
fn test_screening_mask() {
    let mol = h2(1.4);
    let shells = mol
        .coords
        .iter()
        .map(|&center| ShellExtent { center, radius: 3.0 })
        .collect();
    let mut grids = Grids::new(mol, GridConfig::default())
        .with_screening(Arc::new(DistanceScreening::new(shells)));
    let grid = grids.build().unwrap();
    let mask = grid.screen_index.as_ref().unwrap();
    assert_eq!(mask.nshells, 2);
    assert_eq!(mask.nblocks, grid.len().div_ceil(56));
    assert!(mask.count_significant() > 0);
    assert!(mask.count_significant() < mask.nblocks * mask.nshells);
}

#[test]
fn test_custom_angular_table() {
    struct OctahedronOnly;
    impl AngularGridTable for OctahedronOnly {
        fn lookup(&self, npoints: usize) -> Result<Vec<(Vector3<f64>, f64)>, GridError> {
            if npoints == 6 {
                LebedevTable.lookup(6)
            } else {
                Err(GridError::AngularGridUnavailable(npoints))
            }
        }

        fn max_npoints(&self) -> usize {
            6
        }
    }

    let config = GridConfig::default()
        .with_prune(PruneScheme::None)
        .with_atom_grid("H", AtomGridSpec::new(10, 6));
    let mut grids = Grids::new(hydrogen_atom(), config).with_angular_table(Arc::new(OctahedronOnly));
    assert_eq!(grids.build().unwrap().len(), 64);

    grids.set_config(GridConfig::default());
    assert_eq!(
        grids.build().unwrap_err(),
        GridError::AngularGridUnavailable(50)
    );
}
