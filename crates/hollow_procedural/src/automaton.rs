//! # Cellular Automaton
//!
//! Generalised two-radius Game of Life over the wall/floor grid.
//!
//! For each cell, walls are counted separately on the inner ring (the 8
//! cells at Chebyshev distance 1) and the outer ring (the 16 cells at
//! distance 2). Anything outside the interior counts as wall, so the border
//! pulls the cave edges solid.
//!
//! - A floor cell becomes wall if its inner count is in the birth-3 range
//!   **or** its outer count is in the birth-5 range.
//! - A wall cell stays wall if its inner count is in the survive-3 range
//!   **or** its outer count is in the survive-5 range.
//! - Every other cell ends up floor.
//!
//! Each generation reads one snapshot and writes a second buffer, then the
//! buffers swap; no update is visible within a generation.

use hollow_core::{Grid, TileState};

use crate::params::GenerationStep;

/// Offsets of the 8-cell inner ring.
#[rustfmt::skip]
const INNER_RING: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Offsets of the 16-cell outer ring.
#[rustfmt::skip]
const OUTER_RING: [(i32, i32); 16] = [
    (-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2),
    (-2, -1), (2, -1),
    (-2, 0), (2, 0),
    (-2, 1), (2, 1),
    (-2, 2), (-1, 2), (0, 2), (1, 2), (2, 2),
];

/// Applies an ordered list of [`GenerationStep`]s to a grid.
#[derive(Clone, Copy, Debug)]
pub struct CellularAutomaton<'a> {
    steps: &'a [GenerationStep],
}

impl<'a> CellularAutomaton<'a> {
    /// Creates an automaton for `steps`.
    #[must_use]
    pub const fn new(steps: &'a [GenerationStep]) -> Self {
        Self { steps }
    }

    /// Runs every step, each for its full repetition count, in order.
    ///
    /// Returns the number of generations applied. An empty step list leaves
    /// the grid untouched.
    pub fn run(&self, grid: &mut Grid) -> usize {
        if self.steps.is_empty() {
            return 0;
        }

        let mut scratch = grid.clone();
        let mut generations = 0;
        for (index, step) in self.steps.iter().enumerate() {
            for _ in 0..step.reps.max(0) {
                Self::generation(grid, &mut scratch, step);
                std::mem::swap(grid, &mut scratch);
                generations += 1;
            }
            tracing::debug!("automaton step {} applied {} times", index, step.reps.max(0));
        }
        generations
    }

    /// Computes one generation of `rule` from `current` into `next`.
    pub fn generation(current: &Grid, next: &mut Grid, rule: &GenerationStep) {
        for c in current.coords() {
            let state = if Self::becomes_wall(current, c.x, c.y, rule) {
                TileState::Wall
            } else {
                TileState::Floor
            };
            next.set(c.x, c.y, state);
        }
    }

    /// Decides the next state of one cell.
    #[must_use]
    pub fn becomes_wall(grid: &Grid, x: i32, y: i32, rule: &GenerationStep) -> bool {
        let inner = count_walls(grid, x, y, &INNER_RING);
        let outer = count_walls(grid, x, y, &OUTER_RING);

        if grid.is_wall(x, y) {
            rule.survive3().contains(inner) || rule.survive5().contains(outer)
        } else {
            rule.birth3().contains(inner) || rule.birth5().contains(outer)
        }
    }
}

/// Number of wall cells at `ring` offsets around `(x, y)`.
#[must_use]
pub fn count_walls(grid: &Grid, x: i32, y: i32, ring: &[(i32, i32)]) -> i32 {
    ring.iter()
        .filter(|&&(dx, dy)| grid.is_wall(x + dx, y + dy))
        .count() as i32
}
