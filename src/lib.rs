pub mod board;
pub mod cli;
pub mod moves;
pub mod prelude;
pub mod selection;
pub mod utils;

pub mod consts {
    pub const NUM_RANKS: usize = 8;
    pub const NUM_FILES: usize = 8;
    pub const NUM_SQUARES: usize = NUM_RANKS * NUM_FILES;

    /// Longest possible ray on an 8x8 board.
    pub const MAX_RAY_LEN: usize = 7;

    /// Pawn starting rows in board orientation (White back rank on row 0).
    pub const WHITE_HOME_RANK: i8 = 1;
    pub const BLACK_HOME_RANK: i8 = 6;
}
