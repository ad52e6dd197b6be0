//! Random population of a grid

use super::grid::{Cell, Grid};
use crate::config::Density;
use rand::Rng;

/// Overwrite every cell, making it alive with probability `density`
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid, density: Density, rng: &mut R) {
    let p = density.get();
    for cell in grid.cells_mut() {
        *cell = if rng.gen_bool(p) { Cell::Alive } else { Cell::Dead };
    }
}
