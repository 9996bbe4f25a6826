use super::*;
use approx::assert_relative_eq;

fn gaussian_volume(r: &[f64], dr: &[f64]) -> f64 {
    r.iter()
        .zip(dr)
        .map(|(&ri, &wi)| 4.0 * PI * ri * ri * wi * (-ri * ri).exp())
        .sum()
}

fn all_methods() -> Vec<RadialMethod> {
    vec![
        RadialMethod::Treutler,
        RadialMethod::GaussChebyshev,
        RadialMethod::MuraKnowles,
        RadialMethod::Delley,
        RadialMethod::Becke,
    ]
}

#[test]
fn test_abscissas_ascending_and_weights_positive() {
    for method in all_methods() {
        let (r, dr) = method.generate(40, 8, 0);
        assert_eq!(r.len(), 40);
        assert_eq!(dr.len(), 40);
        assert!(r.windows(2).all(|w| w[0] < w[1]), "{:?} not ascending", method);
        assert!(r.iter().all(|&x| x > 0.0));
        assert!(dr.iter().all(|&w| w > 0.0), "{:?} has negative weights", method);
    }
}

#[test]
fn test_gaussian_integral_all_schemes() {
    let exact = PI.powf(1.5);
    for method in all_methods() {
        let (r, dr) = method.generate(75, 1, 0);
        assert_relative_eq!(gaussian_volume(&r, &dr), exact, max_relative = 1e-8);
    }
}

#[test]
fn test_treutler_slater_integral() {
    // ∫ e^{-r} d³r = 8π
    let (r, dr) = treutler_ahlrichs(75);
    let val: f64 = r
        .iter()
        .zip(&dr)
        .map(|(&ri, &wi)| 4.0 * PI * ri * ri * wi * (-ri).exp())
        .sum();
    assert_relative_eq!(val, 8.0 * PI, max_relative = 1e-5);
}

#[test]
fn test_mura_knowles_alkali_extent() {
    let (r_h, _) = mura_knowles(30, 1);
    let (r_li, _) = mura_knowles(30, 3);
    assert_relative_eq!(r_li[29] / r_h[29], 7.0 / 5.2, max_relative = 1e-12);
}

#[test]
fn test_delley_outer_radius() {
    let (r, _) = delley(50);
    assert_relative_eq!(r[49], 12.0, max_relative = 1e-12);
}

struct Uniform;

impl RadialScheme for Uniform {
    fn generate(&self, n: usize, _charge: usize, _atom_index: usize) -> (Vec<f64>, Vec<f64>) {
        let h = 10.0 / n as f64;
        ((0..n).map(|i| (i as f64 + 0.5) * h).collect(), vec![h; n])
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

#[test]
fn test_custom_scheme_is_delegated() {
    let method = RadialMethod::Custom(Arc::new(Uniform));
    let (r, dr) = method.generate(4, 1, 0);
    assert_eq!(r, vec![1.25, 3.75, 6.25, 8.75]);
    assert_eq!(dr, vec![2.5; 4]);
    assert_eq!(method.name(), "uniform");
}
