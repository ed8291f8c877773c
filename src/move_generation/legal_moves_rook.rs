//! Rook move generation.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::Ray;
use crate::move_generation::legal_move_shared::slide_moves;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(
    game: &GameState,
    square: BoardLocation,
    pins: &[Ray],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game.register.view(square) else {
        return;
    };
    slide_moves(game, square, piece, &ORTHOGONAL_DIRECTIONS, pins, out);
}
