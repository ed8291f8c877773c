use std::fmt;

use crate::game_state::chess_types::BoardLocation;

/// Represents all possible error types that can occur in the chess engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFenString,
    /// The provided algebraic square is invalid or could not be parsed.
    InvalidAlgebraic(String),
    /// A search or selection was requested for a position with no legal moves.
    NoLegalMoves,
    /// Attempted to build a move from a square that holds no piece.
    TryingToMoveNonExistentPiece(BoardLocation),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds => write!(f, "board location out of bounds"),
            ChessErrors::InvalidFenString => write!(f, "invalid FEN string"),
            ChessErrors::InvalidAlgebraic(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::NoLegalMoves => write!(f, "no legal moves available"),
            ChessErrors::TryingToMoveNonExistentPiece(x) => {
                write!(f, "no piece at file {} rank {}", x.0, x.1)
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
