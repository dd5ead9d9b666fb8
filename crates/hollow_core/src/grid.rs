//! # Bordered Tile Grid
//!
//! Dense storage for one cave, wrapped in a permanent one-cell wall border.
//!
//! ## Coordinate Spaces
//!
//! - **Interior**: `(0, 0)` is the first cave cell, valid range is
//!   `[0, width) x [0, height)`. Every public accessor speaks interior space.
//! - **Stored**: interior shifted by one, buffer is `(width + 2) x (height + 2)`.
//!
//! Reads anywhere outside the interior report [`TileState::Wall`]; the
//! automaton and room scans read up to two cells past the edge and rely on
//! this instead of bounds checks. Writes outside the interior are ignored, so
//! the border can never become floor.

use std::fmt;
use std::ops::Add;

use crate::error::{GridError, GridResult};
use crate::tile::{Direction, TileState};

/// Integer cell position in interior space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row (grows southwards).
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `dir`.
    #[inline]
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.offset();
        Self::new(self.x + d.x, self.y + d.y)
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Cave tile grid with a permanent solid border.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Interior width.
    width: usize,
    /// Interior height.
    height: usize,
    /// Stored cells, row-major, border included.
    cells: Vec<TileState>,
}

impl Grid {
    /// Largest stored buffer, border included, in cells (8192 x 8192).
    pub const MAX_CELLS: usize = 1 << 26;

    /// Creates a grid whose interior is solid wall.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if either side is zero and
    /// [`GridError::TooLarge`] if the bordered buffer would exceed
    /// [`Grid::MAX_CELLS`]. Both are checked before anything is allocated.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        Self::filled(width, height, TileState::Wall)
    }

    /// Creates a grid whose interior is uniformly `state`.
    ///
    /// The border is wall regardless of `state`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`].
    pub fn filled(width: usize, height: usize, state: TileState) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let too_large = GridError::TooLarge { width, height };

        // Interior coordinates are i32, leave room for reads past the border.
        let limit = (i32::MAX - 4) as usize;
        if width > limit || height > limit {
            return Err(too_large);
        }
        let stored = (width + 2)
            .checked_mul(height + 2)
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or_else(|| too_large.clone())?;
        stored
            .checked_mul(std::mem::size_of::<TileState>())
            .filter(|&bytes| isize::try_from(bytes).is_ok())
            .ok_or_else(|| too_large.clone())?;

        let mut grid = Self {
            width,
            height,
            cells: vec![TileState::Wall; stored],
        };
        if state != TileState::Wall {
            for y in 0..height {
                for x in 0..width {
                    let index = grid.stored_index(x, y);
                    grid.cells[index] = state;
                }
            }
        }
        Ok(grid)
    }

    /// Builds a grid from textual rows (`#` wall, `.` floor, `+` carved).
    ///
    /// Handy for fixtures:
    ///
    /// ```
    /// use hollow_core::{Grid, TileState};
    ///
    /// let grid = Grid::from_rows(&["..#", "#.."]).unwrap();
    /// assert_eq!(grid.get(2, 0), TileState::Wall);
    /// assert_eq!(grid.get(1, 1), TileState::Floor);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MalformedRows`] for ragged rows or unknown glyphs,
    /// and [`GridError::EmptyDimensions`] for empty input.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut grid = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(GridError::MalformedRows(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let state = TileState::from_glyph(glyph).ok_or_else(|| {
                    GridError::MalformedRows(format!("unknown glyph {glyph:?} at ({x}, {y})"))
                })?;
                let index = grid.stored_index(x, y);
                grid.cells[index] = state;
            }
        }
        Ok(grid)
    }

    /// Interior width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Interior height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `(x, y)` lies inside the interior.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Reads a cell. Anything outside the interior reads as wall.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> TileState {
        if self.contains(x, y) {
            self.cells[self.stored_index(x as usize, y as usize)]
        } else {
            TileState::Wall
        }
    }

    /// Reads a cell by coordinate.
    #[inline]
    #[must_use]
    pub fn at(&self, c: Coord) -> TileState {
        self.get(c.x, c.y)
    }

    /// Writes an interior cell.
    ///
    /// Returns false (and leaves the grid untouched) outside the interior.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: TileState) -> bool {
        if self.contains(x, y) {
            let index = self.stored_index(x as usize, y as usize);
            self.cells[index] = state;
            true
        } else {
            false
        }
    }

    /// True if the cell is plain `Wall` (out-of-range included).
    #[inline]
    #[must_use]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == TileState::Wall
    }

    /// True if the cell is `Floor`.
    #[inline]
    #[must_use]
    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == TileState::Floor
    }

    /// Interior cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileState)> + '_ {
        self.coords().map(move |c| (c, self.at(c)))
    }

    /// Interior coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Number of interior cells in `state`.
    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }

    /// Rewrites every interior `from` cell to `to`. Returns the number changed.
    pub fn replace_all(&mut self, from: TileState, to: TileState) -> usize {
        let mut changed = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.stored_index(x, y);
                if self.cells[index] == from {
                    self.cells[index] = to;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Copies the interior out as rows, border stripped.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<TileState>> {
        (0..self.height)
            .map(|y| {
                let start = self.stored_index(0, y);
                self.cells[start..start + self.width].to_vec()
            })
            .collect()
    }

    /// Checks that every stored border cell is still wall.
    #[must_use]
    pub fn border_intact(&self) -> bool {
        let stride = self.width + 2;
        let rows = self.height + 2;
        self.cells.iter().enumerate().all(|(i, &state)| {
            let (sx, sy) = (i % stride, i / stride);
            let on_border = sx == 0 || sy == 0 || sx == stride - 1 || sy == rows - 1;
            !on_border || state == TileState::Wall
        })
    }

    /// Stored buffer index for an interior position.
    #[inline]
    const fn stored_index(&self, x: usize, y: usize) -> usize {
        (y + 1) * (self.width + 2) + (x + 1)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|t| t.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::EmptyDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_rejects_oversized_before_allocating() {
        for (width, height) in [
            (2_000_000_000, 2_000_000_000),
            (100_000, 100_000),
            (usize::MAX, 1),
            (8191, 8191),
        ] {
            assert_eq!(
                Grid::new(width, height),
                Err(GridError::TooLarge { width, height }),
                "{width}x{height} should be refused"
            );
        }
    }

    #[test]
    fn test_out_of_range_reads_wall() {
        let grid = Grid::filled(3, 2, TileState::Floor).unwrap();

        assert_eq!(grid.get(0, 0), TileState::Floor);
        assert_eq!(grid.get(-1, 0), TileState::Wall);
        assert_eq!(grid.get(3, 1), TileState::Wall);
        assert_eq!(grid.get(1, -1), TileState::Wall);
        assert_eq!(grid.get(1, 2), TileState::Wall);
        // Well past the border, still no panic
        assert_eq!(grid.get(-100, 1000), TileState::Wall);
    }

    #[test]
    fn test_border_cannot_be_written() {
        let mut grid = Grid::filled(2, 2, TileState::Floor).unwrap();

        assert!(!grid.set(-1, 0, TileState::Floor));
        assert!(!grid.set(2, 2, TileState::Floor));
        assert!(grid.set(1, 1, TileState::Wall));
        assert!(grid.border_intact());
        assert_eq!(grid.get(1, 1), TileState::Wall);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::filled(1, 1, TileState::Floor).unwrap();
        assert_eq!(grid.coords().count(), 1);
        for dy in -2..=2 {
            for dx in -2..=2 {
                if (dx, dy) != (0, 0) {
                    assert!(grid.is_wall(dx, dy));
                }
            }
        }
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = ["#..#", "...."];
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.count(TileState::Wall), 2);
        assert_eq!(grid.to_string(), "#..#\n....\n");
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(matches!(
            Grid::from_rows(&["...", ".."]),
            Err(GridError::MalformedRows(_))
        ));
        assert!(matches!(
            Grid::from_rows(&["..x"]),
            Err(GridError::MalformedRows(_))
        ));
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_replace_all() {
        let mut grid = Grid::from_rows(&["+#+", "..+"]).unwrap();
        assert_eq!(grid.replace_all(TileState::Carved, TileState::Floor), 3);
        assert_eq!(grid.count(TileState::Floor), 5);
        assert_eq!(grid.count(TileState::Carved), 0);
    }
}
