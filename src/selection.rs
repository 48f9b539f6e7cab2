//! Piece selection state machine.
//!
//! At most one piece is selected at a time. The controller owns the
//! "currently selected" reference (no statics); the per-piece selected flag
//! is derived through [`SelectionController::is_selected`], so the two can
//! never disagree.

use crate::{moves::Move, prelude::*};

/// What the presentation layer should do after a selection event: render
/// highlights for the generated moves, or erase them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected { id: PieceId, moves: Vec<Move> },
    Cleared,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<PieceId>,
}

impl SelectionController {
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Handles a selection event from the input layer.
    ///
    /// Selecting the already-selected piece toggles back to no selection.
    /// Selecting a different piece while one is selected drops the old
    /// selection and takes the new one in a single observable step.
    pub fn select(&mut self, piece: &Piece, board: &BoardRegistry) -> SelectionEvent {
        if self.selected == Some(piece.id) {
            debug!("deselected {piece}");
            self.selected = None;
            return SelectionEvent::Cleared;
        }

        self.selected = Some(piece.id);
        let moves = move_gen::generate_moves(piece, board);
        debug!("selected {piece}, {} candidate moves", moves.len());
        SelectionEvent::Selected {
            id: piece.id,
            moves,
        }
    }

    /// Drops any current selection without a piece event, e.g. when the
    /// selected piece has just been moved.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[inline(always)]
    pub const fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    #[inline(always)]
    pub fn is_selected(&self, id: PieceId) -> bool {
        self.selected == Some(id)
    }
}
