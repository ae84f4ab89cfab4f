//! Conway's Game of Life on a torus.
//!
//! This is the reference for `shaders/life.wgsl`; both must agree cell for cell.

use crate::grid::GridDimensions;

/// Next state of one cell given its state and its count of alive neighbours.
///
/// Two neighbours keep the current state, three give birth (or survival),
/// anything else kills.
#[inline]
pub fn next_state(current: u32, alive_neighbors: u32) -> u32 {
    match alive_neighbors {
        2 => current,
        3 => 1,
        _ => 0,
    }
}

/// Alive cells among the eight neighbours of `(col, row)`, wrapping at every edge.
///
/// All eight offsets are counted after wrapping, so on a grid one cell wide
/// the cell itself shows up among its own neighbours.
pub fn alive_neighbors(cells: &[u32], dims: GridDimensions, col: u32, row: u32) -> u32 {
    let (cols, rows) = (i64::from(dims.cols), i64::from(dims.rows));
    let mut n = 0;
    for dy in [-1i64, 0, 1] {
        for dx in [-1i64, 0, 1] {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let x = (i64::from(col) + dx).rem_euclid(cols) as u32;
            let y = (i64::from(row) + dy).rem_euclid(rows) as u32;
            n += cells[dims.index(x, y)];
        }
    }
    n
}

/// Writes the successor of `current` into `next`.
///
/// Panics if either slice does not hold exactly `dims.cell_count()` cells.
pub fn step_into(current: &[u32], next: &mut [u32], dims: GridDimensions) {
    assert_eq!(current.len(), dims.cell_count(), "current state has wrong size");
    assert_eq!(next.len(), dims.cell_count(), "next state has wrong size");

    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let i = dims.index(col, row);
            next[i] = next_state(current[i], alive_neighbors(current, dims, col, row));
        }
    }
}

/// Successor of `current` as a new buffer.
pub fn life_step(current: &[u32], dims: GridDimensions) -> Vec<u32> {
    let mut next = vec![0; dims.cell_count()];
    step_into(current, &mut next, dims);
    next
}
