use std::fmt::Display;

use crate::prelude::*;

pub mod components;
pub mod layout;


/// The single authoritative mapping from coordinates to occupying pieces.
///
/// One instance per board; constructed explicitly and handed by reference to
/// every consumer instead of living in a process-wide static. Move
/// generation only reads it; all mutation comes from the caller that owns
/// the piece entities.
///
/// Malformed coordinates are absorbed silently everywhere: an out-of-range
/// query reads as empty and an out-of-range write is a no-op. Ray casts
/// probe past the board edge as a matter of course, so this is the normal
/// degenerate case, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRegistry {
    grid: [[Option<Occupant>; NUM_FILES]; NUM_RANKS],
    initialized: bool,
}

impl Default for BoardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardRegistry {
    pub const fn new() -> Self {
        Self {
            grid: [[None; NUM_FILES]; NUM_RANKS],
            initialized: false,
        }
    }

    /// True iff both indices lie in [0, 7].
    #[inline(always)]
    pub const fn is_valid_coord(row: i8, col: i8) -> bool {
        Coord::new(row, col).is_valid()
    }

    /// Occupant of the cell, or `None` if the cell is empty or the
    /// coordinate is off the board.
    #[inline(always)]
    pub fn occupant_at(&self, coord: Coord) -> Option<Occupant> {
        if !coord.is_valid() {
            return None;
        }
        self.grid[coord.row as usize][coord.col as usize]
    }

    /// Records `occupant` at `coord`. Out-of-range coordinates are ignored.
    pub fn place(&mut self, occupant: Occupant, coord: Coord) {
        if !coord.is_valid() {
            trace!("place of {} at invalid {coord} ignored", occupant.id);
            return;
        }
        self.grid[coord.row as usize][coord.col as usize] = Some(occupant);
    }

    /// Empties the cell at `coord`. Out-of-range coordinates are ignored.
    pub fn clear(&mut self, coord: Coord) {
        if !coord.is_valid() {
            trace!("clear at invalid {coord} ignored");
            return;
        }
        self.grid[coord.row as usize][coord.col as usize] = None;
    }

    /// Moves whatever occupies `from` to `to`, clearing the old cell first
    /// so the registry never shows a piece at two coordinates. This is the
    /// explicit move event callers invoke when a piece's coordinate
    /// changes; nothing polls for position diffs.
    pub fn relocate(&mut self, from: Coord, to: Coord) {
        let Some(occupant) = self.occupant_at(from) else {
            debug!("relocate from empty or invalid {from} ignored");
            return;
        };
        debug!("relocating {} {from} -> {to}", occupant.id);
        self.clear(from);
        self.place(occupant, to);
    }

    /// One-shot snapshot of the initial position: clears the grid and
    /// records every piece at its declared coordinate. Only the first call
    /// has any effect; the registry stays latched afterwards.
    pub fn initialize_once(&mut self, pieces: &[Piece]) {
        if self.initialized {
            debug!("registry already initialized, skipping");
            return;
        }
        self.grid = [[None; NUM_FILES]; NUM_RANKS];
        for piece in pieces {
            self.place(piece.into(), piece.coord);
        }
        self.initialized = true;
        info!("registry initialized with {} pieces", pieces.len());
    }

    #[inline(always)]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Display for BoardRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "    0 1 2 3 4 5 6 7")?;
        writeln!(f, "  +-----------------+")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{row} |")?;
            for cell in cells {
                match cell {
                    Some(occ) => write!(f, " {}", occ.kind.icon(occ.color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")
    }
}
