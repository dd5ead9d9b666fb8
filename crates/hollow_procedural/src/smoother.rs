//! # Edge Smoothing
//!
//! Reclassifies wall cells on the floor boundary into decorative variants.
//!
//! Only the open/solid pattern of the orthogonal neighbours matters (the
//! border and anything out of range are solid):
//!
//! | open sides         | result                                     |
//! |--------------------|--------------------------------------------|
//! | all four           | [`TileState::Single`]                      |
//! | three              | [`TileState::EndCap`] towards the free tip |
//! | two, adjacent      | corner: shallow tip, steep tip or 45°      |
//! | one                | base of a neighbouring slope, if any       |
//! | anything else      | unchanged                                  |
//!
//! A corner first tries to pair with its horizontal neighbour on the solid
//! side (a shallow slope), then with its vertical one (a steep slope). The
//! partner must be a wall open only on the matching side. When two corners
//! want the same partner, the east one wins a shallow pairing and the north
//! one wins a steep pairing.
//!
//! Only cells that are exactly [`TileState::Wall`] are touched and the
//! classification never looks at what a solid cell currently holds, so
//! running the smoother on its own output changes nothing.

use hollow_core::{Coord, Direction, Grid, Quadrant, SlopePart, TileState};

/// Boundary-wall classifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeSmoother;

impl EdgeSmoother {
    /// Smooths `grid` in place. Returns the number of cells reclassified.
    pub fn run(grid: &mut Grid) -> usize {
        let changes: Vec<(Coord, TileState)> = grid
            .coords()
            .filter_map(|c| classify(grid, c).map(|state| (c, state)))
            .collect();

        for &(c, state) in &changes {
            grid.set(c.x, c.y, state);
        }
        tracing::debug!("smoothed {} edge tiles", changes.len());
        changes.len()
    }
}

/// Decorative state for `c`, or `None` if it stays as it is.
#[must_use]
pub fn classify(grid: &Grid, c: Coord) -> Option<TileState> {
    if grid.at(c) != TileState::Wall {
        return None;
    }
    let open = open_sides(grid, c);

    match open.len() {
        4 => Some(TileState::Single),
        3 => {
            let solid = Direction::ALL.into_iter().find(|d| !open.contains(d))?;
            Some(TileState::EndCap(solid.opposite()))
        }
        2 => {
            let q = corner_quadrant(grid, c)?;
            Some(if takes_shallow(grid, c, q) {
                TileState::ShallowSlope(q, SlopePart::Tip)
            } else if takes_steep(grid, c, q) {
                TileState::SteepSlope(q, SlopePart::Tip)
            } else {
                TileState::Corner(q)
            })
        }
        1 => slope_base(grid, c, open[0]),
        _ => None,
    }
}

/// Orthogonal directions of `c` that lead onto open floor.
fn open_sides(grid: &Grid, c: Coord) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| grid.at(c.step(d)).is_open())
        .collect()
}

/// True for solid interior cells.
fn is_solid_cell(grid: &Grid, c: Coord) -> bool {
    grid.contains(c.x, c.y) && !grid.at(c).is_open()
}

/// Quadrant of a solid cell open on exactly two adjacent sides.
fn corner_quadrant(grid: &Grid, c: Coord) -> Option<Quadrant> {
    if !is_solid_cell(grid, c) {
        return None;
    }
    match open_sides(grid, c).as_slice() {
        &[a, b] => Quadrant::from_sides(a, b).or_else(|| Quadrant::from_sides(b, a)),
        _ => None,
    }
}

/// Open side of a solid cell open on exactly one side.
fn flat_side(grid: &Grid, c: Coord) -> Option<Direction> {
    if !is_solid_cell(grid, c) {
        return None;
    }
    match open_sides(grid, c).as_slice() {
        &[side] => Some(side),
        _ => None,
    }
}

/// Whether the corner at `c` forms a shallow slope with its horizontal partner.
fn takes_shallow(grid: &Grid, c: Coord, q: Quadrant) -> bool {
    let partner = c.step(q.horizontal().opposite());
    if flat_side(grid, partner) != Some(q.vertical()) {
        return false;
    }
    if q.horizontal() == Direction::East {
        return true;
    }
    // West-facing corner yields to a rival east of the partner
    corner_quadrant(grid, partner.step(Direction::East)) != Some(q.flip_horizontal())
}

/// Whether the corner at `c` forms a steep slope with its vertical partner.
fn takes_steep(grid: &Grid, c: Coord, q: Quadrant) -> bool {
    if takes_shallow(grid, c, q) {
        return false;
    }
    let partner = c.step(q.vertical().opposite());
    if flat_side(grid, partner) != Some(q.horizontal()) {
        return false;
    }
    if q.vertical() == Direction::North {
        return true;
    }
    let rival = partner.step(Direction::North);
    let rival_q = q.flip_vertical();
    !(corner_quadrant(grid, rival) == Some(rival_q) && !takes_shallow(grid, rival, rival_q))
}

/// Base half of a slope whose tip sits beside the flat cell `c`.
fn slope_base(grid: &Grid, c: Coord, side: Direction) -> Option<TileState> {
    match side {
        Direction::North | Direction::South => [Direction::East, Direction::West]
            .into_iter()
            .find_map(|h| {
                let q = Quadrant::from_sides(side, h)?;
                let tip = c.step(h);
                (corner_quadrant(grid, tip) == Some(q) && takes_shallow(grid, tip, q))
                    .then_some(TileState::ShallowSlope(q, SlopePart::Base))
            }),
        Direction::East | Direction::West => [Direction::North, Direction::South]
            .into_iter()
            .find_map(|v| {
                let q = Quadrant::from_sides(v, side)?;
                let tip = c.step(v);
                (corner_quadrant(grid, tip) == Some(q) && takes_steep(grid, tip, q))
                    .then_some(TileState::SteepSlope(q, SlopePart::Base))
            }),
    }
}
