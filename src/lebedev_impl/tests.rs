use super::*;
use approx::assert_abs_diff_eq;

fn double_factorial(n: i64) -> f64 {
    let mut acc = 1.0;
    let mut k = n;
    while k > 1 {
        acc *= k as f64;
        k -= 2;
    }
    acc
}

/// Average of x^a y^b z^c over the unit sphere.
fn sphere_monomial(a: usize, b: usize, c: usize) -> f64 {
    if a % 2 == 1 || b % 2 == 1 || c % 2 == 1 {
        return 0.0;
    }
    let (a, b, c) = (a as i64, b as i64, c as i64);
    double_factorial(a - 1) * double_factorial(b - 1) * double_factorial(c - 1)
        / double_factorial(a + b + c + 1)
}

#[test]
fn test_tabulated_sizes_are_lebedev_sizes() {
    for n in LebedevTable::tabulated() {
        assert!(is_lebedev_size(n), "{} is not a Lebedev size", n);
    }
    assert_eq!(LebedevTable.max_npoints(), 5810);
}

#[test]
fn test_every_lebedev_size_is_tabulated() {
    assert_eq!(LebedevTable::tabulated(), LEBEDEV_NGRID.to_vec());
    for (order, n) in LEBEDEV_ORDER {
        assert_eq!(LebedevTable::order_of(n), Some(order));
    }
}

#[test]
fn test_order_and_size_maps_agree() {
    for (i, &(order, n)) in LEBEDEV_ORDER.iter().enumerate() {
        assert_eq!(LEBEDEV_NGRID[i], n);
        assert_eq!(lebedev_npoints(order), Some(n));
    }
    assert_eq!(lebedev_npoints(29), Some(302));
    assert_eq!(lebedev_npoints(30), None);
}

#[test]
fn test_point_counts_and_unit_directions() {
    for n in LebedevTable::tabulated() {
        let grid = LebedevTable.lookup(n).unwrap();
        assert_eq!(grid.len(), n);
        for (dir, _) in &grid {
            assert_abs_diff_eq!(dir.norm(), 1.0, epsilon = 1e-14);
        }
        let wsum: f64 = grid.iter().map(|(_, w)| w).sum();
        assert_abs_diff_eq!(wsum, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_points_are_distinct() {
    for n in [302, 1202, 5810] {
        let grid = LebedevTable.lookup(n).unwrap();
        for i in 0..grid.len() {
            for j in 0..i {
                assert!((grid[i].0 - grid[j].0).norm() > 1e-6);
            }
        }
    }
}

#[test]
fn test_weights_positive_past_266_points() {
    for n in LebedevTable::tabulated().into_iter().filter(|&n| n > 266) {
        let grid = LebedevTable.lookup(n).unwrap();
        assert!(grid.iter().all(|&(_, w)| w > 0.0), "{} has a negative weight", n);
    }
}

#[test]
fn test_monomials_integrate_exactly_up_to_order() {
    for n in LebedevTable::tabulated().into_iter().filter(|&n| n > 1) {
        let order = LebedevTable::order_of(n).unwrap();
        let grid = LebedevTable.lookup(n).unwrap();
        // large rules only check the two highest degrees
        let lowest = if order <= 35 { 0 } else { order - 1 };
        for degree in lowest..=order {
            for a in 0..=degree {
                for b in 0..=(degree - a) {
                    let c = degree - a - b;
                    let quad: f64 = grid
                        .iter()
                        .map(|(d, w)| w * d.x.powi(a as i32) * d.y.powi(b as i32) * d.z.powi(c as i32))
                        .sum();
                    assert_abs_diff_eq!(quad, sphere_monomial(a, b, c), epsilon = 1e-12);
                }
            }
        }
    }
}

/// Legendre polynomials P_0..=P_lmax at x.
fn legendre(lmax: usize, x: f64) -> Vec<f64> {
    let mut p = vec![1.0, x];
    for l in 2..=lmax {
        let next = ((2 * l - 1) as f64 * x * p[l - 1] - (l - 1) as f64 * p[l - 2]) / l as f64;
        p.push(next);
    }
    p.truncate(lmax + 1);
    p
}

#[test]
fn test_zonal_harmonics_vanish_up_to_order() {
    // sum_i w_i P_l(n . x_i) is the l-th harmonic moment along n
    let axes = [
        Vector3::new(0.3, -0.5, 0.81).normalize(),
        Vector3::new(-0.77, 0.12, 0.4).normalize(),
    ];
    for n in LebedevTable::tabulated().into_iter().filter(|&n| n > 1) {
        let order = LebedevTable::order_of(n).unwrap();
        let grid = LebedevTable.lookup(n).unwrap();
        for axis in &axes {
            let mut moments = vec![0.0; order + 1];
            for (d, w) in &grid {
                for (l, p) in legendre(order, axis.dot(d)).into_iter().enumerate() {
                    moments[l] += w * p;
                }
            }
            assert_abs_diff_eq!(moments[0], 1.0, epsilon = 1e-12);
            for (l, m) in moments.iter().enumerate().skip(1) {
                assert!(m.abs() < 1e-12, "{} points, l = {}: {}", n, l, m);
            }
        }
    }
}

#[test]
fn test_invalid_size_is_rejected() {
    assert_eq!(
        LebedevTable.lookup(300).unwrap_err(),
        GridError::UnsupportedAngularGrid(300)
    );
}
