//! # Room Connection
//!
//! Joins every room into one cave by tunnelling through the thinnest walls.
//!
//! 1. **Border walls**: from every floor cell of every room, walk each
//!    cardinal direction across consecutive wall cells. A walk that lands on
//!    floor of a room not yet processed records a [`BorderWall`] candidate.
//!    Rooms are processed in id order, so each pair is seen from its lower
//!    id and the candidate list has a canonical order.
//! 2. **Spanning tree**: Kruskal over candidates stably sorted by thickness,
//!    so equal walls fall back to discovery order. Stops at `rooms - 1`
//!    edges.
//! 3. **Carving**: each accepted wall is dug out cell by cell, marked
//!    [`TileState::Carved`] and then normalized to floor.
//!
//! A room graph that is not connected at the wall level yields a forest.
//! That is logged and accepted.

use hollow_core::{Coord, Direction, DisjointSets, Grid, TileState};

use crate::rooms::{RoomId, Rooms};

/// A wall segment separating two rooms along one cardinal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderWall {
    /// Floor cell on the first room's side.
    pub floor1: Coord,
    /// Floor cell on the second room's side.
    pub floor2: Coord,
    /// Direction walked from `floor1` to `floor2`.
    pub dir: Direction,
    /// Room owning `floor1`.
    pub room1: RoomId,
    /// Room owning `floor2`.
    pub room2: RoomId,
    /// Wall cells between the two floor cells.
    pub thickness: usize,
}

impl BorderWall {
    /// The wall cells a tunnel through this segment replaces, in walk order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let dir = self.dir;
        std::iter::successors(Some(self.floor1.step(dir)), move |c| Some(c.step(dir)))
            .take(self.thickness)
    }
}

/// Counts from one connection run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Rooms before connection.
    pub rooms: usize,
    /// Border-wall candidates found.
    pub candidates: usize,
    /// Tunnels dug (spanning tree edges).
    pub tunnels: usize,
    /// Wall cells turned into floor.
    pub carved_cells: usize,
}

/// Spanning-tree room joiner.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoomConnector;

impl RoomConnector {
    /// Detects candidates, picks the spanning tree and carves it into `grid`.
    pub fn connect(grid: &mut Grid, rooms: &Rooms) -> ConnectionReport {
        let candidates = detect_border_walls(grid, rooms);
        let tree = minimum_spanning_tree(&candidates, rooms.len());
        let carved_cells = carve(grid, &tree);

        let wanted = rooms.len().saturating_sub(1);
        if tree.len() < wanted {
            tracing::warn!(
                "room graph is not connected: {} of {} tunnels possible",
                tree.len(),
                wanted
            );
        }
        tracing::debug!(
            "connected {} rooms: {} candidates, {} tunnels, {} cells carved",
            rooms.len(),
            candidates.len(),
            tree.len(),
            carved_cells
        );

        ConnectionReport {
            rooms: rooms.len(),
            candidates: candidates.len(),
            tunnels: tree.len(),
            carved_cells,
        }
    }
}

/// Finds every border-wall candidate between distinct rooms.
#[must_use]
pub fn detect_border_walls(grid: &Grid, rooms: &Rooms) -> Vec<BorderWall> {
    let mut processed = vec![false; rooms.len()];
    let mut candidates = Vec::new();

    for (room1, cells) in rooms.iter() {
        processed[room1.0] = true;

        for &floor1 in cells {
            for dir in Direction::ALL {
                let Some((floor2, thickness)) = walk_wall(grid, floor1, dir) else {
                    continue;
                };
                let Some(room2) = rooms.room_at(floor2) else {
                    continue;
                };
                if room2 == room1 || processed[room2.0] {
                    continue;
                }
                candidates.push(BorderWall {
                    floor1,
                    floor2,
                    dir,
                    room1,
                    room2,
                    thickness,
                });
            }
        }
    }
    candidates
}

/// Crosses the wall run starting next to `from`.
///
/// Returns the floor cell reached and the number of walls crossed, or `None`
/// if there is no wall to cross or the walk leaves the interior.
fn walk_wall(grid: &Grid, from: Coord, dir: Direction) -> Option<(Coord, usize)> {
    let mut pos = from.step(dir);
    let mut thickness = 0;
    while grid.contains(pos.x, pos.y) && grid.at(pos) == TileState::Wall {
        thickness += 1;
        pos = pos.step(dir);
    }
    (thickness > 0 && grid.contains(pos.x, pos.y) && grid.at(pos) == TileState::Floor)
        .then_some((pos, thickness))
}

/// Kruskal's algorithm over `candidates` for `room_count` rooms.
///
/// Thinner walls win; equal thickness keeps candidate order.
#[must_use]
pub fn minimum_spanning_tree(candidates: &[BorderWall], room_count: usize) -> Vec<BorderWall> {
    let wanted = room_count.saturating_sub(1);
    let mut sorted = candidates.to_vec();
    sorted.sort_by_key(|wall| wall.thickness);

    let mut components = DisjointSets::with_capacity(room_count);
    for id in 0..room_count {
        components.add(RoomId(id));
    }

    let mut tree = Vec::with_capacity(wanted);
    for wall in sorted {
        if tree.len() == wanted {
            break;
        }
        if components.union(&wall.room1, &wall.room2) {
            tree.push(wall);
        }
    }
    tree
}

/// Digs every wall of `tree`. Returns the number of cells opened.
pub fn carve(grid: &mut Grid, tree: &[BorderWall]) -> usize {
    for wall in tree {
        for c in wall.cells() {
            grid.set(c.x, c.y, TileState::Carved);
        }
    }
    grid.replace_all(TileState::Carved, TileState::Floor)
}
