//! Starting-position layouts.
//!
//! A layout is the declarative list of pieces handed to
//! [`BoardRegistry::initialize_once`] at startup. It can come from a TOML
//! file supplied by the caller, or from the built-in standard opening
//! placement.

use std::{collections::HashSet, path::Path};

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: Color,
    pub row: i8,
    pub col: i8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub pieces: Vec<PieceSpec>,
}

/// Back-rank file order shared by both colors.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Layout {
    /// The classic 32-piece opening placement in board orientation: White
    /// back rank on row 0, White pawns on row 1, Black pawns on row 6,
    /// Black back rank on row 7.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (color, back_row, pawn_row) in [
            (Color::White, 0, WHITE_HOME_RANK),
            (Color::Black, 7, BLACK_HOME_RANK),
        ] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                pieces.push(PieceSpec {
                    kind,
                    color,
                    row: back_row,
                    col: col as i8,
                });
            }
            for col in 0..NUM_FILES as i8 {
                pieces.push(PieceSpec {
                    kind: PieceKind::Pawn,
                    color,
                    row: pawn_row,
                    col,
                });
            }
        }
        Self { pieces }
    }

    pub fn from_toml(input: &str) -> miette::Result<Self> {
        let layout: Layout = toml::from_str(input)
            .into_diagnostic()
            .context("Parsing layout TOML")?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_path(path: impl AsRef<Path>) -> miette::Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("Reading layout file {}", path.display()))?;
        Self::from_toml(&input)
    }

    /// Layout files are caller input, so unlike the registry they do get
    /// real diagnostics: off-board or doubly-occupied coordinates are
    /// almost certainly typos worth surfacing.
    fn validate(&self) -> miette::Result<()> {
        let mut seen = HashSet::new();
        for spec in &self.pieces {
            let coord = Coord::new(spec.row, spec.col);
            miette::ensure!(
                coord.is_valid(),
                "{} {} placed off the board at {coord}",
                spec.color,
                spec.kind,
            );
            miette::ensure!(
                seen.insert((spec.row, spec.col)),
                "two pieces share {coord}",
            );
        }
        Ok(())
    }

    /// Materializes the piece entities, assigning sequential ids. The
    /// returned pieces are owned by the caller; the registry only ever
    /// holds handles to them.
    pub fn into_pieces(self) -> Vec<Piece> {
        self.pieces
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                Piece::new(
                    PieceId(i as u32),
                    spec.kind,
                    spec.color,
                    Coord::new(spec.row, spec.col),
                )
            })
            .collect()
    }
}
