//! # Topology Fix-Up
//!
//! Removes single-cell diagonal artifacts left by the automaton.
//!
//! Two patterns are repaired:
//!
//! - A wall whose diagonal neighbour is wall while both orthogonal cells
//!   flanking that diagonal are open. The two walls touch only at a corner,
//!   which pinches the floor on either side into two rooms that a walker
//!   could slip between. The wall is opened up.
//! - A floor cell with wall on all eight sides. The pocket is filled.
//!
//! Each pass scans a stable snapshot and applies its changes afterwards.
//! Passes repeat until one changes nothing, at most [`MAX_PASSES`] times.

use hollow_core::{Coord, Grid, TileState};

/// Hard limit on fix-up passes.
pub const MAX_PASSES: usize = 10;

/// Diagonal bits: NW=1, NE=2, SE=4, SW=8.
const NW: u8 = 0b0001;
const NE: u8 = 0b0010;
const SE: u8 = 0b0100;
const SW: u8 = 0b1000;

/// Orthogonal bits: N=1, E=2, S=4, W=8.
const N: u8 = 0b0001;
const E: u8 = 0b0010;
const S: u8 = 0b0100;
const W: u8 = 0b1000;

/// Each diagonal with the two orthogonal bits that flank it.
const DIAGONAL_FLANKS: [(u8, u8); 4] = [(NW, N | W), (NE, N | E), (SE, S | E), (SW, S | W)];

/// Outcome of a fix-up run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Passes scanned, including the final clean one.
    pub passes: usize,
    /// Cells rewritten across all passes.
    pub changes: usize,
    /// True if the last pass found nothing to fix.
    pub converged: bool,
}

/// Iterative corner-artifact remover.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologyFixer;

impl TopologyFixer {
    /// Runs fix-up passes until clean or [`MAX_PASSES`] is reached.
    pub fn run(grid: &mut Grid) -> FixReport {
        let mut report = FixReport::default();
        let mut pending: Vec<(Coord, TileState)> = Vec::new();

        while report.passes < MAX_PASSES {
            report.passes += 1;
            pending.clear();
            pending.extend(
                grid.coords()
                    .filter_map(|c| repair_for(grid, c.x, c.y).map(|state| (c, state))),
            );

            if pending.is_empty() {
                report.converged = true;
                break;
            }
            for &(c, state) in &pending {
                grid.set(c.x, c.y, state);
            }
            report.changes += pending.len();
        }

        tracing::debug!(
            "topology fix-up: {} passes, {} changes, converged={}",
            report.passes,
            report.changes,
            report.converged
        );
        report
    }
}

/// Diagonal and orthogonal wall masks around `(x, y)`.
#[must_use]
pub fn neighbour_masks(grid: &Grid, x: i32, y: i32) -> (u8, u8) {
    let bit = |dx: i32, dy: i32, mask: u8| if grid.is_wall(x + dx, y + dy) { mask } else { 0 };

    let diag = bit(-1, -1, NW) | bit(1, -1, NE) | bit(1, 1, SE) | bit(-1, 1, SW);
    let nsew = bit(0, -1, N) | bit(1, 0, E) | bit(0, 1, S) | bit(-1, 0, W);
    (diag, nsew)
}

/// The state `(x, y)` should be rewritten to, if it is an artifact.
#[must_use]
pub fn repair_for(grid: &Grid, x: i32, y: i32) -> Option<TileState> {
    let (diag, nsew) = neighbour_masks(grid, x, y);

    if grid.is_wall(x, y) {
        let pinched = DIAGONAL_FLANKS
            .iter()
            .any(|&(d, flanks)| diag & d != 0 && nsew & flanks == 0);
        pinched.then_some(TileState::Floor)
    } else if diag == 0b1111 && nsew == 0b1111 {
        Some(TileState::Wall)
    } else {
        None
    }
}
