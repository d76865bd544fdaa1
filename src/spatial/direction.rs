//! Direction enumeration for the 3D cell neighborhood
//!
//! Grids are modeled as 3D with depth 1 for 2D runs, so the enumeration
//! always carries six values; the vertical pair simply finds no neighbor
//! on single-layer grids.

use std::fmt;

/// One of the six axis-aligned neighbor directions
///
/// North/South move along the y axis, East/West along x, Up/Down along z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y
    North,
    /// Toward increasing y
    South,
    /// Toward increasing x
    East,
    /// Toward decreasing x
    West,
    /// Toward increasing z
    Up,
    /// Toward decreasing z
    Down,
}

impl Direction {
    /// All directions in fixed iteration order
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// The direction pointing back at the source cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Coordinate offset `[dx, dy, dz]` of the neighbor in this direction
    pub const fn offset(self) -> [i32; 3] {
        match self {
            Self::North => [0, -1, 0],
            Self::South => [0, 1, 0],
            Self::East => [1, 0, 0],
            Self::West => [-1, 0, 0],
            Self::Up => [0, 0, 1],
            Self::Down => [0, 0, -1],
        }
    }

    /// Dense index used for direction-keyed lookup tables
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
            Self::Up => 4,
            Self::Down => 5,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{name}")
    }
}
