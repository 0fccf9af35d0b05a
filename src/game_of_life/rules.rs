//! Game of Life transition rules with cell aging

use super::{Grid, LifeError};
use itertools::iproduct;

/// Advance a grid by one generation with a freshly allocated neighbor buffer
pub fn advance(grid: &mut Grid) -> Result<(), LifeError> {
    LifeEngine::new().advance(grid)
}

/// Transition engine that keeps its neighbor-count buffer between generations
#[derive(Debug, Default)]
pub struct LifeEngine {
    scratch: Vec<u8>,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evolve the grid one generation forward, in place.
    ///
    /// Every neighbor count is taken from the pre-transition grid before any
    /// cell is written. If the buffer cannot be allocated the grid is left
    /// untouched.
    pub fn advance(&mut self, grid: &mut Grid) -> Result<(), LifeError> {
        let cells = grid.cell_count();

        self.scratch.clear();
        self.scratch
            .try_reserve_exact(cells)
            .map_err(|_| LifeError::Allocation { cells })?;

        let snapshot: &Grid = grid;
        self.scratch.extend(
            iproduct!(0..snapshot.height, 0..snapshot.width)
                .map(|(row, col)| snapshot.count_neighbors(row, col)),
        );

        for (cell, &neighbors) in grid.cells_mut().iter_mut().zip(&self.scratch) {
            *cell = Self::next_state(*cell, neighbors);
        }

        Ok(())
    }

    /// Evolve the grid for multiple generations
    pub fn advance_generations(&mut self, grid: &mut Grid, generations: usize) -> Result<(), LifeError> {
        for _ in 0..generations {
            self.advance(grid)?;
        }
        Ok(())
    }

    /// Next value of a single cell given its current value and live-neighbor count.
    ///
    /// Survivors age by one, births start at one, everything else is dead.
    pub fn next_state(current: u64, neighbor_count: u8) -> u64 {
        match (current, neighbor_count) {
            (0, 3) => 1,
            (0, _) => 0,
            (age, 2) | (age, 3) => age.saturating_add(1),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liveness(grid: &Grid) -> Vec<(usize, usize)> {
        grid.living_cells()
    }

    #[test]
    fn test_isolated_cell_dies() {
        for (h, w) in [(3, 3), (4, 7), (10, 5)] {
            let mut grid = Grid::new(h, w).unwrap();
            grid.set(h / 2, w / 2, 1).unwrap();
            advance(&mut grid).unwrap();
            assert!(grid.is_empty(), "lone cell survived on {}x{}", h, w);
        }
    }

    #[test]
    fn test_still_life_block() {
        let rows = vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ];
        let mut grid = Grid::from_rows(rows).unwrap();
        let before = liveness(&grid);

        let mut engine = LifeEngine::new();
        engine.advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), before);
        assert_eq!(grid.get(1, 1), 2);

        engine.advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), before);
        assert_eq!(grid.get(2, 2), 3);
    }

    #[test]
    fn test_block_on_tight_torus() {
        // On 3x3 the wrapped dead row and column each see four block cells
        let rows = vec![vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 0]];
        let mut grid = Grid::from_rows(rows).unwrap();
        let before = liveness(&grid);

        advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), before);
    }

    #[test]
    fn test_block_on_two_wide_torus_dies() {
        // With a dimension of 2 the -1 and +1 offsets alias, doubling counts
        let mut full = Grid::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(full.count_neighbors(0, 0), 8);
        advance(&mut full).unwrap();
        assert!(full.is_empty());
    }

    #[test]
    fn test_oscillator_blinker() {
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3 {
            grid.set(2, col, 1).unwrap();
        }
        let original = liveness(&grid);

        let mut engine = LifeEngine::new();
        engine.advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(grid.get(1, 2), 1);
        assert_eq!(grid.get(2, 2), 2);
        assert_eq!(grid.get(3, 2), 1);

        engine.advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), original);
        assert_eq!(grid.get(2, 1), 1);
        assert_eq!(grid.get(2, 2), 3);
        assert_eq!(grid.get(2, 3), 1);
    }

    #[test]
    fn test_glider_translates_across_edge() {
        let mut grid = Grid::new(8, 8).unwrap();
        for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set(r, c, 1).unwrap();
        }

        // A glider moves one cell down and right every four generations
        LifeEngine::new().advance_generations(&mut grid, 4 * 8).unwrap();
        assert_eq!(
            liveness(&grid),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        for (h, w) in [(1, 1), (1, 2), (2, 2), (7, 3), (20, 20)] {
            let mut grid = Grid::new(h, w).unwrap();
            advance(&mut grid).unwrap();
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn test_rule_logic() {
        assert_eq!(LifeEngine::next_state(1, 2), 2);
        assert_eq!(LifeEngine::next_state(5, 3), 6);
        assert_eq!(LifeEngine::next_state(0, 3), 1);
        assert_eq!(LifeEngine::next_state(3, 1), 0);
        assert_eq!(LifeEngine::next_state(3, 4), 0);
        assert_eq!(LifeEngine::next_state(0, 2), 0);
        assert_eq!(LifeEngine::next_state(0, 8), 0);
        assert_eq!(LifeEngine::next_state(u64::MAX, 2), u64::MAX);
    }

    #[test]
    fn test_snapshot_semantics() {
        // An L-tromino becomes a block; writing in place without a snapshot
        // would let the first birth feed later counts
        let rows = vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ];
        let mut grid = Grid::from_rows(rows).unwrap();
        advance(&mut grid).unwrap();
        assert_eq!(liveness(&grid), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(grid.get(1, 2), 1);
        assert_eq!(grid.get(2, 2), 2);
    }

    #[test]
    fn test_engine_reuses_buffer_across_sizes() {
        let mut engine = LifeEngine::new();
        let mut big = Grid::new(10, 10).unwrap();
        engine.advance(&mut big).unwrap();

        let mut small = Grid::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        engine.advance(&mut small).unwrap();

        // A full column on a 3-wide torus is adjacent to every other cell
        assert_eq!(small.living_count(), 9);
        assert_eq!(small.get(0, 1), 2);
        assert_eq!(small.get(0, 0), 1);
    }
}
