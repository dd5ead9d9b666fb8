//! # Tile Presentation
//!
//! Hands a finished cave to a tile map, one engine tile at a time.
//!
//! Each cave cell expands into a `cell_width x cell_height` block of engine
//! tiles placed relative to `origin`. The sink receives the tile state plus
//! the offset inside the block, and picks the atlas tile itself; nothing
//! here knows about atlases.

use hollow_core::{Coord, Grid, TileState};

/// Receiver of placed tiles.
pub trait TileSink {
    /// Places one engine tile at `position`.
    ///
    /// `sub_tile` is the offset of this engine tile inside its cave cell.
    fn place(&mut self, position: Coord, tile: TileState, sub_tile: Coord);
}

impl<F: FnMut(Coord, TileState, Coord)> TileSink for F {
    fn place(&mut self, position: Coord, tile: TileState, sub_tile: Coord) {
        self(position, tile, sub_tile);
    }
}

/// How cave cells map onto engine tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    /// Engine tiles per cave cell, horizontally.
    pub cell_width: i32,
    /// Engine tiles per cave cell, vertically.
    pub cell_height: i32,
    /// Engine position of cave cell `(0, 0)`.
    pub origin: Coord,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            cell_width: 1,
            cell_height: 1,
            origin: Coord::new(0, 0),
        }
    }
}

/// Sends every interior cell of `grid` to `sink`, row-major.
///
/// Returns the number of engine tiles placed. A layout with a non-positive
/// cell size places nothing.
pub fn present<S: TileSink + ?Sized>(grid: &Grid, layout: &TileLayout, sink: &mut S) -> usize {
    if layout.cell_width <= 0 || layout.cell_height <= 0 {
        return 0;
    }

    let mut placed = 0;
    for (c, tile) in grid.iter() {
        let base = Coord::new(
            layout.origin.x + c.x * layout.cell_width,
            layout.origin.y + c.y * layout.cell_height,
        );
        for sy in 0..layout.cell_height {
            for sx in 0..layout.cell_width {
                let sub_tile = Coord::new(sx, sy);
                sink.place(base + sub_tile, tile, sub_tile);
                placed += 1;
            }
        }
    }
    placed
}
