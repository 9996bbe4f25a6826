//! Basis-shell significance masks over blocks of grid points.
//!
//! The grid builder does not interpret the mask; it only asks a provider for
//! one once the coordinates are final and keeps the result next to them.

use crate::constants::BLKSIZE;
use nalgebra::Vector3;

/// Mask of shape (blocks, shells), row major. Nonzero marks a shell that may
/// contribute on a block of `BLKSIZE` points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenIndex {
    pub nblocks: usize,
    pub nshells: usize,
    pub data: Vec<u8>,
}

impl ScreenIndex {
    pub fn get(&self, block: usize, shell: usize) -> u8 {
        self.data[block * self.nshells + shell]
    }

    /// Number of nonzero entries.
    pub fn count_significant(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

pub trait ScreeningProvider: Send + Sync {
    fn screen_index(&self, coords: &[Vector3<f64>]) -> ScreenIndex;
}

/// Centre and radius beyond which a shell is negligible.
#[derive(Clone, Copy, Debug)]
pub struct ShellExtent {
    pub center: Vector3<f64>,
    pub radius: f64,
}

/// Marks a shell significant on a block when any point of the block lies
/// within the shell's radius.
#[derive(Clone, Debug, Default)]
pub struct DistanceScreening {
    pub shells: Vec<ShellExtent>,
}

impl DistanceScreening {
    pub fn new(shells: Vec<ShellExtent>) -> Self {
        DistanceScreening { shells }
    }
}

impl ScreeningProvider for DistanceScreening {
    fn screen_index(&self, coords: &[Vector3<f64>]) -> ScreenIndex {
        let nshells = self.shells.len();
        let nblocks = coords.len().div_ceil(BLKSIZE);
        let mut data = vec![0_u8; nblocks * nshells];
        for (ib, block) in coords.chunks(BLKSIZE).enumerate() {
            for (ish, shell) in self.shells.iter().enumerate() {
                let r2 = shell.radius * shell.radius;
                if block.iter().any(|p| (p - shell.center).norm_squared() <= r2) {
                    data[ib * nshells + ish] = 1;
                }
            }
        }
        ScreenIndex {
            nblocks,
            nshells,
            data,
        }
    }
}
