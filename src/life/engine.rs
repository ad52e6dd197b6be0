//! One-generation step of Conway's Game of Life

use super::grid::{Cell, Grid};

/// Transition table shared by both addressing modes
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Under/overpopulation, or stays dead
    }
}

/// Compute the next generation.
///
/// Neighbor counts are always read from `grid`, and the result is written
/// into a separate buffer, so no cell ever sees a partially updated field.
pub fn advance(grid: &Grid) -> Grid {
    let width = grid.width();
    let cells = grid
        .cells()
        .iter()
        .enumerate()
        .map(|(idx, &cell)| next_state(cell, grid.neighbor_count(idx / width, idx % width)))
        .collect();

    grid.with_cells(cells)
}
