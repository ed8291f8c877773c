//! Rule constants shared across the engine.

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove-clock threshold for a fifty-move-rule draw (100 half-moves).
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Number of times a position must occur for a repetition draw.
pub const REPETITION_DRAW_COUNT: usize = 3;
