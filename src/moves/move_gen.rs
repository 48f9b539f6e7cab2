//! Pseudo-legal move generation.
//!
//! Pure functions of (position, color, registry): nothing here mutates the
//! board, and every query walks at most 64 cells. Moves follow piece
//! geometry and blocking rules only; a move may still leave the mover's own
//! king in check, and filtering that out is the caller's problem (by design
//! the original board never did).

use crate::{
    moves::{Direction, KNIGHT_OFFSETS, Move},
    prelude::*,
};

/// Candidate moves for `piece` against the current occupancy, in a fixed
/// order: direction-list order outer, distance ascending inner. The order
/// carries no meaning, but it is deterministic so callers and tests can
/// rely on it.
pub fn generate_moves(piece: &Piece, board: &BoardRegistry) -> Vec<Move> {
    trace!("generating moves for {piece}");
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.coord, piece.color, board),
        PieceKind::Rook => sliding_moves(piece.coord, piece.color, &Direction::ORTHO, board),
        PieceKind::Knight => offset_moves(piece.coord, piece.color, &KNIGHT_OFFSETS, board),
        PieceKind::Bishop => sliding_moves(piece.coord, piece.color, &Direction::DIAG, board),
        PieceKind::Queen => sliding_moves(piece.coord, piece.color, &Direction::ALL, board),
        PieceKind::King => offset_moves(piece.coord, piece.color, &Direction::ALL, board),
    }
}

/// Pawn moves: single step onto an empty square, double step from the home
/// rank, diagonal captures onto enemy-occupied squares only.
///
/// The double step checks its own destination but not the square it hops
/// over, so a home-rank pawn can jump a blocker sitting directly in front
/// of it. The original board behaves this way; kept as-is rather than
/// silently corrected.
pub fn pawn_moves(coord: Coord, color: Color, board: &BoardRegistry) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    let dir = color.pawn_direction();

    let single = coord.offset(dir, 0);
    if single.is_valid() && board.occupant_at(single).is_none() {
        moves.push(Move::quiet(single));
    }

    let double = coord.offset(2 * dir, 0);
    if coord.row == color.home_rank() && double.is_valid() && board.occupant_at(double).is_none() {
        moves.push(Move::quiet(double));
    }

    for dc in [-1, 1] {
        let diag = coord.offset(dir, dc);
        if board
            .occupant_at(diag)
            .is_some_and(|occ| occ.is_enemy_of(color))
        {
            moves.push(Move::capture(diag));
        }
    }

    moves
}

/// Fixed-offset movement shared by knight and king: each on-board target is
/// included iff it is empty or holds an enemy piece.
pub fn offset_moves(
    coord: Coord,
    color: Color,
    offsets: &[(i8, i8)],
    board: &BoardRegistry,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(offsets.len());
    for &(dr, dc) in offsets {
        let to = coord.offset(dr, dc);
        if !to.is_valid() {
            continue;
        }
        match board.occupant_at(to) {
            None => moves.push(Move::quiet(to)),
            Some(occ) if occ.is_enemy_of(color) => moves.push(Move::capture(to)),
            Some(_) => {}
        }
    }
    moves
}

/// Ray-cast movement shared by bishop, rook and queen: walk each direction
/// one square at a time, collecting empties, stopping at the board edge or
/// the first occupied square (included as a capture iff enemy).
pub fn sliding_moves(
    coord: Coord,
    color: Color,
    directions: &[(i8, i8)],
    board: &BoardRegistry,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut to = coord;
        for _ in 0..MAX_RAY_LEN {
            to = to.offset(dr, dc);
            if !to.is_valid() {
                break;
            }
            match board.occupant_at(to) {
                None => moves.push(Move::quiet(to)),
                Some(occ) => {
                    if occ.is_enemy_of(color) {
                        moves.push(Move::capture(to));
                    }
                    break;
                }
            }
        }
    }
    moves
}
