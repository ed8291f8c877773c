//! Queen move generation: the union of rook and bishop sliding.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::Ray;
use crate::move_generation::legal_moves_bishop::DIAGONAL_DIRECTIONS;
use crate::move_generation::legal_moves_rook::ORTHOGONAL_DIRECTIONS;
use crate::move_generation::legal_move_shared::slide_moves;

pub fn generate_queen_moves(
    game: &GameState,
    square: BoardLocation,
    pins: &[Ray],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game.register.view(square) else {
        return;
    };
    slide_moves(game, square, piece, &ORTHOGONAL_DIRECTIONS, pins, out);
    slide_moves(game, square, piece, &DIAGONAL_DIRECTIONS, pins, out);
}
