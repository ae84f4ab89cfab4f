use crate::grid::GridDimensions;

use super::rule;
use super::PingPong;

/// The automaton evaluated on the CPU over a pair of ping-ponged vectors.
///
/// Behaves exactly like the GPU store + compute pass; handy for headless runs
/// and for checking the shader.
#[derive(Debug, Clone)]
pub struct CpuLife {
    dims: GridDimensions,
    cells: PingPong<Vec<u32>>,
}

impl CpuLife {
    /// Panics if `seed` does not hold one value per cell.
    pub fn new(dims: GridDimensions, seed: Vec<u32>) -> Self {
        assert_eq!(seed.len(), dims.cell_count(), "seed has wrong size");
        let scratch = vec![0; dims.cell_count()];
        Self {
            dims,
            cells: PingPong::new(seed, scratch),
        }
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn generation(&self) -> u64 {
        self.cells.step()
    }

    pub fn current(&self) -> &[u32] {
        self.cells.current()
    }

    pub fn population(&self) -> usize {
        self.current().iter().filter(|&&c| c == 1).count()
    }

    /// One generation: read current, write next, swap.
    pub fn step(&mut self) {
        let (current, next) = self.cells.split_mut();
        rule::step_into(current, next, self.dims);
        self.cells.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider(dims: GridDimensions) -> Vec<u32> {
        let mut cells = vec![0; dims.cell_count()];
        // Moves +1 col / -1 row every four generations (row 0 at the bottom).
        for (c, r) in [(1, 4), (2, 3), (0, 2), (1, 2), (2, 2)] {
            cells[dims.index(c, r)] = 1;
        }
        cells
    }

    #[test]
    fn all_dead_stays_dead() {
        let dims = GridDimensions::new(16, 16).unwrap();
        let mut life = CpuLife::new(dims, vec![0; 256]);
        for _ in 0..25 {
            life.step();
        }
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 25);
    }

    #[test]
    fn glider_keeps_its_population_across_the_wrap() {
        let dims = GridDimensions::new(8, 8).unwrap();
        let mut life = CpuLife::new(dims, glider(dims));
        for _ in 0..64 {
            life.step();
            assert_eq!(life.population(), 5);
        }
    }

    #[test]
    fn glider_returns_home_after_full_lap() {
        // 8 cells per axis at one cell per four generations: 32 generations per lap.
        let dims = GridDimensions::new(8, 8).unwrap();
        let start = glider(dims);
        let mut life = CpuLife::new(dims, start.clone());
        for _ in 0..32 {
            life.step();
        }
        assert_eq!(life.current(), start.as_slice());
    }

    #[test]
    #[should_panic(expected = "seed has wrong size")]
    fn wrong_seed_size_panics() {
        let dims = GridDimensions::new(4, 4).unwrap();
        let _ = CpuLife::new(dims, vec![0; 3]);
    }
}
