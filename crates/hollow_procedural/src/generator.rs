//! # Cave Generator
//!
//! Runs the full pipeline for one cave:
//!
//! ```text
//! field fill -> automaton -> topology fix-up -> rooms -> tunnels -> smoothing
//! ```
//!
//! Every stage finishes before the next starts and mutates one owned grid.
//! Generation is a pure function of size and parameters: the same inputs
//! always give the same grid.

use hollow_core::Grid;

use crate::automaton::CellularAutomaton;
use crate::connector::RoomConnector;
use crate::error::{CaveError, CaveResult};
use crate::field::FieldSampler;
use crate::params::GenerationParams;
use crate::rooms::RoomDetector;
use crate::smoother::EdgeSmoother;
use crate::topology::TopologyFixer;

/// Per-stage counts from one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Automaton generations applied.
    pub generations: usize,
    /// Topology fix-up passes.
    pub fixer_passes: usize,
    /// Cells rewritten by the fix-up.
    pub fixer_changes: usize,
    /// Rooms found before connection.
    pub rooms: usize,
    /// Border-wall candidates considered.
    pub candidates: usize,
    /// Tunnels dug.
    pub tunnels: usize,
    /// Wall cells turned into floor by tunnelling.
    pub carved_cells: usize,
    /// Wall cells turned into decorative variants.
    pub smoothed_tiles: usize,
}

/// Validated cave generator for a fixed size and parameter set.
#[derive(Clone, Debug)]
pub struct CaveGenerator {
    /// Parameters, validated.
    params: GenerationParams,
    /// Solid grid of the target size, cloned per generation.
    blank: Grid,
}

impl CaveGenerator {
    /// Validates inputs and prepares a generator.
    ///
    /// # Errors
    ///
    /// - [`CaveError::InvalidDimensions`] if either side is zero, checked
    ///   before anything is allocated
    /// - [`CaveError::Grid`] if the grid would be too large to address
    /// - [`CaveError::InvalidParams`] from [`GenerationParams::validate`]
    pub fn new(width: usize, height: usize, params: GenerationParams) -> CaveResult<Self> {
        if width == 0 || height == 0 {
            return Err(CaveError::InvalidDimensions { width, height });
        }
        params.validate()?;
        let blank = Grid::new(width, height)?;
        Ok(Self { params, blank })
    }

    /// Interior width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.blank.width()
    }

    /// Interior height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.blank.height()
    }

    /// Parameters in use.
    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generates the cave.
    #[must_use]
    pub fn generate(&self) -> Grid {
        self.generate_with_report().0
    }

    /// Generates the cave and reports what each stage did.
    #[must_use]
    pub fn generate_with_report(&self) -> (Grid, GenerationReport) {
        let mut grid = self.blank.clone();

        FieldSampler::from_params(&self.params).fill(&mut grid);
        let generations = CellularAutomaton::new(&self.params.steps).run(&mut grid);
        let fix = TopologyFixer::run(&mut grid);
        let rooms = RoomDetector::detect(&grid);
        let connection = RoomConnector::connect(&mut grid, &rooms);
        let smoothed_tiles = EdgeSmoother::run(&mut grid);

        let report = GenerationReport {
            generations,
            fixer_passes: fix.passes,
            fixer_changes: fix.changes,
            rooms: connection.rooms,
            candidates: connection.candidates,
            tunnels: connection.tunnels,
            carved_cells: connection.carved_cells,
            smoothed_tiles,
        };

        tracing::info!(
            "generated {}x{} cave (seed {}): {} rooms joined by {} tunnels",
            grid.width(),
            grid.height(),
            self.params.seed.value(),
            report.rooms,
            report.tunnels
        );
        (grid, report)
    }
}

/// One-shot generation entry point.
///
/// # Errors
///
/// See [`CaveGenerator::new`].
pub fn generate_cave(width: usize, height: usize, params: &GenerationParams) -> CaveResult<Grid> {
    Ok(CaveGenerator::new(width, height, params.clone())?.generate())
}
