//! Static tables shared by the grid builders.
//!
//! Radii are indexed by nuclear charge; index 0 is a ghost centre.

/// Bohr radius in Angstrom.
pub const BOHR: f64 = 0.52917721092;

/// Guards divisions by a zero radius or a zero inter-atomic distance.
pub const DIST_EPSILON: f64 = 1e-200;

/// Default edge length (Bohr) of the boxes used to group grid points.
pub const GROUP_BOX_SIZE: f64 = 1.2;

/// Margin (Bohr) added around the atoms when laying out the boxes.
pub const GROUP_BOUNDARY_PENALTY: f64 = 4.2;

/// Grid arrays are padded to a multiple of this many points.
pub const ALIGNMENT_UNIT: usize = 8;

/// Relative tolerance between the integrated density and the electron count
/// below which density pruning is trusted.
pub const NELEC_ERROR_TOL: f64 = 0.02;

/// Radial shells expanded together when building an atomic grid.
pub const RADIAL_CHUNK: usize = 12;

/// Coordinate used for every padding point.
pub const PADDING_COORD: f64 = 1e-4;

/// Grid points per screening block.
pub const BLKSIZE: usize = 56;

/// Last nuclear charge of each period, used to look up default grid sizes.
pub const PERIOD_BOUNDS: [usize; 7] = [2, 10, 18, 36, 54, 86, 118];

/// Radial shell counts by `[level][period]`.
#[rustfmt::skip]
pub const RAD_GRIDS: [[usize; 7]; 10] = [
    [ 10,  15,  20,  30,  35,  40,  50],
    [ 30,  40,  50,  60,  65,  70,  75],
    [ 40,  60,  65,  75,  80,  85,  90],
    [ 50,  75,  80,  90,  95, 100, 105],
    [ 60,  90,  95, 105, 110, 115, 120],
    [ 70, 105, 110, 120, 125, 130, 135],
    [ 80, 120, 125, 135, 140, 145, 150],
    [ 90, 135, 140, 150, 155, 160, 165],
    [100, 150, 155, 165, 170, 175, 180],
    [200, 200, 200, 200, 200, 200, 200],
];

/// Lebedev orders by `[level][period]`; see `LEBEDEV_ORDER` for point counts.
#[rustfmt::skip]
pub const ANG_ORDER: [[usize; 7]; 10] = [
    [11, 15, 17, 17, 17, 17, 17],
    [17, 23, 23, 23, 23, 23, 23],
    [23, 29, 29, 29, 29, 29, 29],
    [29, 29, 35, 35, 35, 35, 35],
    [35, 41, 41, 41, 41, 41, 41],
    [41, 47, 47, 47, 47, 47, 47],
    [47, 53, 53, 53, 53, 53, 53],
    [53, 59, 59, 59, 59, 59, 59],
    [59, 59, 59, 59, 59, 59, 59],
    [65, 65, 65, 65, 65, 65, 65],
];

/// Bragg-Slater radii in Angstrom, Z = 0..=91. Heavier elements use
/// `BRAGG_FALLBACK`.
#[rustfmt::skip]
const BRAGG_RADII_ANGSTROM: [f64; 92] = [
    0.00,
    0.35, 1.40,
    1.45, 1.05, 0.85, 0.70, 0.65, 0.60, 0.50, 1.50,
    1.80, 1.50, 1.25, 1.10, 1.00, 1.00, 1.00, 1.80,
    2.20, 1.80,
    1.60, 1.40, 1.35, 1.40, 1.40, 1.40, 1.35, 1.35, 1.35, 1.35,
    1.30, 1.25, 1.15, 1.15, 1.15, 1.90,
    2.35, 2.00,
    1.80, 1.55, 1.45, 1.45, 1.35, 1.30, 1.35, 1.40, 1.60, 1.55,
    1.55, 1.45, 1.45, 1.40, 1.40, 2.10,
    2.60, 2.15,
    1.95, 1.85, 1.85, 1.85, 1.85, 1.85, 1.85,
    1.80, 1.75, 1.75, 1.75, 1.75, 1.75, 1.75, 1.75,
    1.55, 1.45, 1.35, 1.35, 1.30, 1.35, 1.35, 1.35, 1.50,
    1.90, 1.80, 1.60, 1.90, 1.45, 2.10,
    1.80, 2.15,
    1.95, 1.80, 1.80,
];

const BRAGG_FALLBACK: f64 = 1.75;

/// SG-1 reference radii in Bohr for H through Ar.
#[rustfmt::skip]
const SG1_RADII: [f64; 19] = [
    0.0,
    1.0000, 0.5882,
    3.0769, 2.0513, 1.5385, 1.2308, 1.0256, 0.8791, 0.7692, 0.6838,
    4.0909, 3.1579, 2.5714, 2.1687, 1.8750, 1.6514, 1.4754, 1.3333,
];

/// Bragg-Slater radius in Bohr.
pub fn bragg_radius(charge: usize) -> f64 {
    BRAGG_RADII_ANGSTROM
        .get(charge)
        .copied()
        .unwrap_or(BRAGG_FALLBACK)
        / BOHR
}

/// SG-1 radius in Bohr. Elements past argon have no SG-1 value and use the
/// Bragg radius instead.
pub fn sg1_radius(charge: usize) -> f64 {
    match SG1_RADII.get(charge) {
        Some(&r) => r,
        None => bragg_radius(charge),
    }
}

/// Row of the periodic table (0-based) used to index `RAD_GRIDS`/`ANG_ORDER`.
pub fn period_index(charge: usize) -> usize {
    PERIOD_BOUNDS
        .iter()
        .filter(|&&bound| charge > bound)
        .count()
        .min(PERIOD_BOUNDS.len() - 1)
}
