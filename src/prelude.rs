pub use crate::board::{
    self, BoardRegistry,
    components::{Color, Coord, Occupant, Piece, PieceId, PieceKind},
    layout::Layout,
};
pub use crate::consts::*;
pub use crate::moves::{self, Direction, Move, move_gen};
pub use crate::selection::{SelectionController, SelectionEvent};
pub use crate::utils::{self, log::*};
pub use miette::{self, Context, IntoDiagnostic, Result};
pub use std::fmt::Display;
pub use std::str::FromStr;
pub use tracing::{Level, debug, error, info, span, trace, warn};
