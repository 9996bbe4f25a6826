use super::*;

#[test]
fn test_no_prune_is_uniform() {
    let rads = [0.1, 0.5, 1.0, 3.0];
    assert_eq!(PruneScheme::None.prune(8, &rads, 302).unwrap(), vec![302; 4]);
}

#[test]
fn test_sg1_regions_for_hydrogen() {
    // SG-1 radius of H is 1.0 Bohr
    let rads = [0.2, 0.3, 0.7, 2.0, 5.0];
    assert_eq!(sg1_prune(1, &rads), vec![6, 38, 86, 194, 86]);
}

#[test]
fn test_sg1_ignores_requested_size() {
    let rads = [0.2, 0.3, 0.7, 2.0, 5.0];
    let a = PruneScheme::Sg1.prune(1, &rads, 302).unwrap();
    let b = PruneScheme::Sg1.prune(1, &rads, 86).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sg1_beyond_argon_uses_bragg_radius() {
    let angs = sg1_prune(26, &[0.01, 100.0]);
    assert_eq!(angs, vec![6, 86]);
}

#[test]
fn test_nwchem_regions_for_hydrogen() {
    // Bragg radius of H is 0.35 Å ≈ 0.6614 Bohr
    let rads = [0.1, 0.25, 0.5, 1.0, 5.0];
    let angs = nwchem_prune(1, &rads, 302).unwrap();
    assert_eq!(angs, vec![50, 86, 266, 302, 266]);
}

#[test]
fn test_nwchem_small_grid_is_not_pruned() {
    let rads = [0.1, 1.0, 10.0];
    assert_eq!(nwchem_prune(6, &rads, 38).unwrap(), vec![38, 38, 38]);
}

#[test]
fn test_nwchem_fifty_points() {
    let rads = [0.01, 0.5, 1.0, 50.0];
    let angs = nwchem_prune(8, &rads, 50).unwrap();
    assert!(angs.iter().all(|&n| n == 50 || n == 74));
    assert_eq!(angs[0], 50);
    assert_eq!(angs[3], 50);
}

#[test]
fn test_nwchem_never_exceeds_requested_size() {
    let rads: Vec<f64> = (1..100).map(|i| i as f64 * 0.1).collect();
    for charge in [1, 6, 17, 26] {
        for n_ang in [86, 194, 302, 434] {
            let angs = nwchem_prune(charge, &rads, n_ang).unwrap();
            assert!(angs.iter().all(|&n| n <= n_ang));
            assert!(angs.contains(&n_ang));
        }
    }
}

#[test]
fn test_nwchem_rejects_unknown_size() {
    assert_eq!(
        nwchem_prune(1, &[1.0], 300).unwrap_err(),
        GridError::PruneAngularGrid(300)
    );
}

#[test]
fn test_treutler_split() {
    let angs = treutler_prune(12, 302);
    assert_eq!(&angs[..4], &[14; 4]);
    assert_eq!(&angs[4..6], &[50; 2]);
    assert_eq!(&angs[6..], &[302; 6]);
}

#[test]
fn test_zero_radius_centre_does_not_divide_by_zero() {
    let angs = PruneScheme::Nwchem.prune(0, &[0.5, 1.0], 302).unwrap();
    assert_eq!(angs, vec![266, 266]);
}
