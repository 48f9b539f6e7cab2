use std::fmt::Display;

use crate::prelude::*;

pub mod move_gen;

#[cfg(test)]
mod tests;

/// A candidate destination for the selected piece. Produced fresh on every
/// query and never persisted; `is_capture` records whether an enemy piece
/// currently occupies the destination.
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Move {
    pub to: Coord,
    pub is_capture: bool,
}

impl Move {
    #[inline(always)]
    pub const fn quiet(to: Coord) -> Self {
        Self {
            to,
            is_capture: false,
        }
    }

    #[inline(always)]
    pub const fn capture(to: Coord) -> Self {
        Self {
            to,
            is_capture: true,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_capture {
            write!(f, "{}x", self.to)
        } else {
            write!(f, "{}", self.to)
        }
    }
}

/// Ray deltas as (row, col) pairs. "North" points toward row 0, the White
/// back rank. First four are orthogonal, rest are diagonal.
pub struct Direction;
impl Direction {
    pub const NORTH: (i8, i8) = (-1, 0);
    pub const SOUTH: (i8, i8) = (1, 0);
    pub const WEST: (i8, i8) = (0, -1);
    pub const EAST: (i8, i8) = (0, 1);
    pub const NORTHEAST: (i8, i8) = (-1, 1);
    pub const SOUTHEAST: (i8, i8) = (1, 1);
    pub const SOUTHWEST: (i8, i8) = (1, -1);
    pub const NORTHWEST: (i8, i8) = (-1, -1);

    pub const ORTHO: [(i8, i8); 4] = [Self::NORTH, Self::SOUTH, Self::WEST, Self::EAST];
    pub const DIAG: [(i8, i8); 4] = [
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
        Self::NORTHWEST,
    ];
    pub const ALL: [(i8, i8); 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::WEST,
        Self::EAST,
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
        Self::NORTHWEST,
    ];
}

/// The eight fixed knight jumps, row-major.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
