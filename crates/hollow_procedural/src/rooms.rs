//! # Room Detection
//!
//! Labels maximal 4-connected floor regions ("rooms") with union-find.
//!
//! Room ids are dense and canonical: rooms are numbered `0..n` in the
//! row-major order of their first cell, and each room's cells are listed
//! row-major. The numbering depends only on the grid, never on hashing or
//! on which union-find node happened to become a root.

use std::collections::HashMap;

use hollow_core::{Coord, Direction, DisjointSets, Grid};

/// Canonical room identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Cell-to-room and room-to-cells mappings for one grid.
#[derive(Clone, Debug, Default)]
pub struct Rooms {
    /// Interior width of the labelled grid.
    width: usize,
    /// Room of each interior cell, row-major.
    cell_rooms: Vec<Option<RoomId>>,
    /// Cells of each room, indexed by id.
    room_cells: Vec<Vec<Coord>>,
}

impl Rooms {
    /// Number of rooms.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.room_cells.len()
    }

    /// True if the grid had no floor.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.room_cells.is_empty()
    }

    /// Room containing `c`, if it is a labelled floor cell.
    #[must_use]
    pub fn room_at(&self, c: Coord) -> Option<RoomId> {
        if c.x < 0 || c.y < 0 || c.x as usize >= self.width {
            return None;
        }
        let index = c.y as usize * self.width + c.x as usize;
        self.cell_rooms.get(index).copied().flatten()
    }

    /// Cells of `room`, row-major. Empty for unknown ids.
    #[must_use]
    pub fn cells(&self, room: RoomId) -> &[Coord] {
        self.room_cells.get(room.0).map_or(&[], Vec::as_slice)
    }

    /// Rooms in id order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &[Coord])> {
        self.room_cells
            .iter()
            .enumerate()
            .map(|(i, cells)| (RoomId(i), cells.as_slice()))
    }

    /// All room ids in order.
    pub fn ids(&self) -> impl Iterator<Item = RoomId> {
        (0..self.len()).map(RoomId)
    }
}

/// Connected-component labeller over floor cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoomDetector;

impl RoomDetector {
    /// Partitions every floor cell of `grid` into rooms.
    #[must_use]
    pub fn detect(grid: &Grid) -> Rooms {
        let floors: Vec<Coord> = grid.coords().filter(|c| grid.is_floor(c.x, c.y)).collect();

        let mut sets = DisjointSets::with_capacity(floors.len());
        for &c in &floors {
            sets.add(c);
        }
        for &c in &floors {
            for dir in Direction::ALL {
                let n = c.step(dir);
                if grid.is_floor(n.x, n.y) {
                    sets.union(&c, &n);
                }
            }
        }

        let mut rooms = Rooms {
            width: grid.width(),
            cell_rooms: vec![None; grid.width() * grid.height()],
            room_cells: Vec::new(),
        };
        let mut root_to_room: HashMap<usize, RoomId> = HashMap::new();

        for c in floors {
            let Some(root) = sets.find(&c) else { continue };
            let room = *root_to_room.entry(root).or_insert_with(|| {
                rooms.room_cells.push(Vec::new());
                RoomId(rooms.room_cells.len() - 1)
            });
            rooms.room_cells[room.0].push(c);
            rooms.cell_rooms[c.y as usize * rooms.width + c.x as usize] = Some(room);
        }

        tracing::debug!("detected {} rooms", rooms.len());
        rooms
    }
}
