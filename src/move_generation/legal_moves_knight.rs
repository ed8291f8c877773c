//! Knight move generation.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::Ray;
use crate::move_generation::legal_move_shared::{pin_direction, quiet_or_capture};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(
    game: &GameState,
    square: BoardLocation,
    pins: &[Ray],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game.register.view(square) else {
        return;
    };
    // A knight never moves along a ray, so any pin freezes it entirely.
    if pin_direction(square, pins).is_some() {
        return;
    }
    for offset in KNIGHT_OFFSETS {
        let destination = (square.0 + offset.0, square.1 + offset.1);
        if !location_in_bounds(destination) {
            continue;
        }
        match game.register.view(destination) {
            Some(target) if target.color == piece.color => {}
            target => out.push(quiet_or_capture(piece, square, destination, target)),
        }
    }
}
