use std::{fmt::Display, ops::Not, str::FromStr};

use miette::Context;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A single cell on the 8x8 grid, addressed as (row, column).
/// # Representation
/// Row 0 holds the White back rank, row 1 the White pawns; rows 6 and 7
/// mirror that for Black. White pawns advance toward row 0, Black toward
/// row 7 (the orientation of the original board).
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff both indices lie in [0, 7].
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.row >= 0
            && self.row < NUM_RANKS as i8
            && self.col >= 0
            && self.col < NUM_FILES as i8
    }

    /// Unchecked translation. Callers probe validity themselves, so rays
    /// may step off the board without special-casing the edges.
    #[inline(always)]
    pub const fn offset(&self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = miette::Report;

    /// Parses `"row,col"`, e.g. `"3,4"`. Range is not checked here; the
    /// registry absorbs out-of-range coordinates on its own.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .context("Coord needs a row and a column, e.g. '3,4'")?;
        let row = row
            .trim()
            .parse::<i8>()
            .into_diagnostic()
            .with_context(|| format!("invalid row: {row:?}"))?;
        let col = col
            .trim()
            .parse::<i8>()
            .into_diagnostic()
            .with_context(|| format!("invalid column: {col:?}"))?;
        Ok(Self { row, col })
    }
}

#[derive(Default, Debug, Hash, PartialEq, Eq, PartialOrd, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        self.flip()
    }
}

impl FromStr for Color {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            other => Err(miette::Error::msg(format!("unknown color: {other:?}"))),
        }
    }
}

impl Color {
    pub const COLORS: [Color; 2] = [Color::White, Color::Black];

    pub const fn flip(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta a pawn of this color advances by.
    #[inline(always)]
    pub const fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Starting row for pawns of this color.
    #[inline(always)]
    pub const fn home_rank(&self) -> i8 {
        match self {
            Color::White => WHITE_HOME_RANK,
            Color::Black => BLACK_HOME_RANK,
        }
    }
}

#[derive(Default, PartialEq, Eq, Debug, PartialOrd, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    #[default]
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            PieceKind::Pawn => write!(f, "Pawn"),
            PieceKind::Rook => write!(f, "Rook"),
            PieceKind::Knight => write!(f, "Knight"),
            PieceKind::Bishop => write!(f, "Bishop"),
            PieceKind::Queen => write!(f, "Queen"),
            PieceKind::King => write!(f, "King"),
        }
    }
}

impl FromStr for PieceKind {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pawn" | "p" => Ok(PieceKind::Pawn),
            "rook" | "r" => Ok(PieceKind::Rook),
            "knight" | "n" => Ok(PieceKind::Knight),
            "bishop" | "b" => Ok(PieceKind::Bishop),
            "queen" | "q" => Ok(PieceKind::Queen),
            "king" | "k" => Ok(PieceKind::King),
            other => Err(miette::Error::msg(format!("unknown piece kind: {other:?}"))),
        }
    }
}

impl PieceKind {
    pub const KINDS: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline(always)]
    pub const fn index(&self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Bishop, Rook and Queen extend along rays until blocked.
    #[inline(always)]
    pub const fn is_sliding(&self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    pub fn icon(&self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => '♟',
            (PieceKind::Pawn, Color::Black) => '♙',
            (PieceKind::Rook, Color::White) => '♜',
            (PieceKind::Rook, Color::Black) => '♖',
            (PieceKind::Knight, Color::White) => '♞',
            (PieceKind::Knight, Color::Black) => '♘',
            (PieceKind::Bishop, Color::White) => '♝',
            (PieceKind::Bishop, Color::Black) => '♗',
            (PieceKind::Queen, Color::White) => '♛',
            (PieceKind::Queen, Color::Black) => '♕',
            (PieceKind::King, Color::White) => '♚',
            (PieceKind::King, Color::Black) => '♔',
        }
    }
}

/// Opaque handle to a piece entity owned by the presentation layer.
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(transparent)]
pub struct PieceId(pub u32);

impl Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece entity. Kind and color are fixed for the piece's lifetime; the
/// coordinate is mutated by the owning caller, which must mirror every
/// change into the registry (clear the old cell, then place the new one).
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub coord: Coord,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color, coord: Coord) -> Self {
        Self {
            id,
            kind,
            color,
            coord,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} at {}", self.id, self.color, self.kind, self.coord)
    }
}

/// Compact per-cell record the registry stores. The registry never
/// interprets kind or color; they ride along for occupancy queries.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub struct Occupant {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

impl Occupant {
    pub fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self { id, kind, color }
    }

    #[inline(always)]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color != color
    }
}

impl From<&Piece> for Occupant {
    fn from(piece: &Piece) -> Self {
        Self::new(piece.id, piece.kind, piece.color)
    }
}
