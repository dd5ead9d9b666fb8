//! # HOLLOW Core
//!
//! Grid and set primitives shared by the cave generation pipeline.
//!
//! ## Contents
//!
//! - [`Grid`]: dense tile storage wrapped in a permanent wall border
//! - [`TileState`]: floor / wall / decorative edge categories
//! - [`DisjointSets`]: keyed union-find used for room labelling and
//!   spanning-tree construction
//!
//! ## Example
//!
//! ```
//! use hollow_core::{Grid, TileState};
//!
//! let grid = Grid::filled(4, 3, TileState::Floor).unwrap();
//! // Reads past the edge never fault
//! assert_eq!(grid.get(-1, -1), TileState::Wall);
//! assert_eq!(grid.get(4, 0), TileState::Wall);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod disjoint_set;
pub mod error;
pub mod grid;
pub mod tile;

pub use disjoint_set::DisjointSets;
pub use error::{GridError, GridResult};
pub use grid::{Coord, Grid};
pub use tile::{Direction, Quadrant, SlopePart, TileState};
