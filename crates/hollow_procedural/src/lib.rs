//! # HOLLOW Procedural Generation
//!
//! Deterministic 2D cave generation from a seed and a parameter set.
//!
//! ## Pipeline
//!
//! 1. **Field**: raw random threshold or seeded Perlin/Simplex noise marks
//!    each cell wall or floor
//! 2. **Automaton**: two-radius birth/survival rules, applied step by step
//! 3. **Topology fix-up**: removes diagonal-only contacts and sealed pockets
//! 4. **Rooms**: union-find labelling of 4-connected floor
//! 5. **Tunnels**: spanning tree over rooms, cheapest walls first
//! 6. **Smoothing**: boundary walls become corner, slope and cap tiles
//!
//! ## Example
//!
//! ```
//! use hollow_procedural::{CaveGenerator, CaveSeed, GenerationParams, GenerationStep};
//!
//! let params = GenerationParams {
//!     seed: CaveSeed::new(424_242),
//!     wall_chance: 0.65,
//!     frequency: 13.7,
//!     steps: vec![GenerationStep::try_from(&[3, 4, 12, 16, 2, 5, 10, 14, 2][..]).unwrap()],
//!     ..Default::default()
//! };
//! let cave = CaveGenerator::new(32, 32, params).unwrap().generate();
//! assert!(cave.border_intact());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod automaton;
pub mod config;
pub mod connector;
pub mod error;
pub mod field;
pub mod generator;
pub mod noise;
pub mod params;
pub mod present;
pub mod random;
pub mod rooms;
pub mod smoother;
pub mod topology;

pub use automaton::CellularAutomaton;
pub use config::CaveConfig;
pub use connector::{BorderWall, ConnectionReport, RoomConnector};
pub use error::{CaveError, CaveResult};
pub use field::FieldSampler;
pub use generator::{generate_cave, CaveGenerator, GenerationReport};
pub use noise::{CaveSeed, NoiseField, PerlinNoise, SimplexNoise};
pub use params::{CountRange, GenerationParams, GenerationStep, NoiseKind};
pub use present::{present, TileLayout, TileSink};
pub use random::RandomSource;
pub use rooms::{RoomDetector, RoomId, Rooms};
pub use smoother::EdgeSmoother;
pub use topology::{FixReport, TopologyFixer};

pub use hollow_core::{Coord, Direction, Grid, Quadrant, SlopePart, TileState};
