//! # Tile States
//!
//! Abstract tile categories produced by cave generation.
//!
//! These carry no atlas or pixel information. Mapping each state to a
//! concrete visual tile is the presentation layer's job; use
//! [`TileState::ALL_DECORATIVE`] to check that such a mapping is total.

use crate::grid::Coord;

/// Cardinal direction on the grid (y grows southwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards negative y.
    North,
    /// Towards positive x.
    East,
    /// Towards positive y.
    South,
    /// Towards negative x.
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step for this direction.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> Coord {
        match self {
            Self::North => Coord::new(0, -1),
            Self::East => Coord::new(1, 0),
            Self::South => Coord::new(0, 1),
            Self::West => Coord::new(-1, 0),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// The open (floor) quadrant of a sloped wall tile.
///
/// `NorthEast` means floor lies to the north and east of the tile,
/// solid rock to the south and west.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Open to the north and east.
    NorthEast,
    /// Open to the north and west.
    NorthWest,
    /// Open to the south and east.
    SouthEast,
    /// Open to the south and west.
    SouthWest,
}

impl Quadrant {
    /// All four quadrants.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The vertical open side (north or south).
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> Direction {
        match self {
            Self::NorthEast | Self::NorthWest => Direction::North,
            Self::SouthEast | Self::SouthWest => Direction::South,
        }
    }

    /// The horizontal open side (east or west).
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> Direction {
        match self {
            Self::NorthEast | Self::SouthEast => Direction::East,
            Self::NorthWest | Self::SouthWest => Direction::West,
        }
    }

    /// Quadrant open towards `vertical` and `horizontal`.
    ///
    /// `None` unless the first is north/south and the second east/west.
    #[must_use]
    pub const fn from_sides(vertical: Direction, horizontal: Direction) -> Option<Self> {
        match (vertical, horizontal) {
            (Direction::North, Direction::East) => Some(Self::NorthEast),
            (Direction::North, Direction::West) => Some(Self::NorthWest),
            (Direction::South, Direction::East) => Some(Self::SouthEast),
            (Direction::South, Direction::West) => Some(Self::SouthWest),
            _ => None,
        }
    }

    /// Mirror across the vertical axis (east and west swap).
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        match self {
            Self::NorthEast => Self::NorthWest,
            Self::NorthWest => Self::NorthEast,
            Self::SouthEast => Self::SouthWest,
            Self::SouthWest => Self::SouthEast,
        }
    }

    /// Mirror across the horizontal axis (north and south swap).
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        match self {
            Self::NorthEast => Self::SouthEast,
            Self::SouthEast => Self::NorthEast,
            Self::NorthWest => Self::SouthWest,
            Self::SouthWest => Self::NorthWest,
        }
    }
}

/// Which cell of a two-cell slope this tile is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlopePart {
    /// The corner cell, where the slope meets the floor.
    Tip,
    /// The flat-edged cell the slope runs into.
    Base,
}

/// State of a single cave cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Solid rock. Also what every border and out-of-range read reports.
    #[default]
    Wall,
    /// Walkable floor.
    Floor,
    /// Tunnel cell dug while joining rooms, normalized to `Floor` afterwards.
    Carved,
    /// 45 degree corner, one cell.
    Corner(Quadrant),
    /// Steep slope spanning two vertically stacked cells.
    SteepSlope(Quadrant, SlopePart),
    /// Shallow slope spanning two horizontally adjacent cells.
    ShallowSlope(Quadrant, SlopePart),
    /// Wall pillar with floor on all four sides.
    Single,
    /// Wall peninsula whose free tip points in the given direction.
    EndCap(Direction),
}

impl TileState {
    /// Every decorative variant the edge smoother can produce.
    pub const ALL_DECORATIVE: [Self; 25] = [
        Self::Corner(Quadrant::NorthEast),
        Self::Corner(Quadrant::NorthWest),
        Self::Corner(Quadrant::SouthEast),
        Self::Corner(Quadrant::SouthWest),
        Self::SteepSlope(Quadrant::NorthEast, SlopePart::Tip),
        Self::SteepSlope(Quadrant::NorthEast, SlopePart::Base),
        Self::SteepSlope(Quadrant::NorthWest, SlopePart::Tip),
        Self::SteepSlope(Quadrant::NorthWest, SlopePart::Base),
        Self::SteepSlope(Quadrant::SouthEast, SlopePart::Tip),
        Self::SteepSlope(Quadrant::SouthEast, SlopePart::Base),
        Self::SteepSlope(Quadrant::SouthWest, SlopePart::Tip),
        Self::SteepSlope(Quadrant::SouthWest, SlopePart::Base),
        Self::ShallowSlope(Quadrant::NorthEast, SlopePart::Tip),
        Self::ShallowSlope(Quadrant::NorthEast, SlopePart::Base),
        Self::ShallowSlope(Quadrant::NorthWest, SlopePart::Tip),
        Self::ShallowSlope(Quadrant::NorthWest, SlopePart::Base),
        Self::ShallowSlope(Quadrant::SouthEast, SlopePart::Tip),
        Self::ShallowSlope(Quadrant::SouthEast, SlopePart::Base),
        Self::ShallowSlope(Quadrant::SouthWest, SlopePart::Tip),
        Self::ShallowSlope(Quadrant::SouthWest, SlopePart::Base),
        Self::Single,
        Self::EndCap(Direction::North),
        Self::EndCap(Direction::South),
        Self::EndCap(Direction::East),
        Self::EndCap(Direction::West),
    ];

    /// Returns true for cells a walker can stand on.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Floor | Self::Carved)
    }

    /// Returns true for smoothed edge variants.
    #[inline]
    #[must_use]
    pub const fn is_decorative(self) -> bool {
        !matches!(self, Self::Wall | Self::Floor | Self::Carved)
    }

    /// Single-character rendering used by textual dumps.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Carved => '+',
            Self::Corner(Quadrant::NorthEast | Quadrant::SouthWest) => '\\',
            Self::Corner(Quadrant::NorthWest | Quadrant::SouthEast) => '/',
            Self::SteepSlope(..) => ':',
            Self::ShallowSlope(..) => '~',
            Self::Single => 'o',
            Self::EndCap(Direction::North) => '^',
            Self::EndCap(Direction::South) => 'v',
            Self::EndCap(Direction::East) => '>',
            Self::EndCap(Direction::West) => '<',
        }
    }

    /// Parses a fixture glyph. Only `#`, `.` and `+` are accepted.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            '+' => Some(Self::Carved),
            _ => None,
        }
    }
}
