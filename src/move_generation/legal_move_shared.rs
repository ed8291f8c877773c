//! Helpers shared by the per-piece move generators.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::Ray;

/// The pin axis constraining the piece on `square`, if any.
pub fn pin_direction(square: BoardLocation, pins: &[Ray]) -> Option<(i8, i8)> {
    pins.iter()
        .find(|pin| pin.location == square)
        .map(|pin| pin.direction)
}

/// A pinned piece may only move along the pin axis, in either direction
/// (including capturing the pinning piece).
#[inline]
pub fn direction_allowed_by_pin(direction: (i8, i8), pin: Option<(i8, i8)>) -> bool {
    match pin {
        None => true,
        Some(axis) => direction == axis || direction == (-axis.0, -axis.1),
    }
}

/// Slide from `square` along each direction, stopping on and including the
/// first enemy piece and excluding the first own piece.
pub fn slide_moves(
    game: &GameState,
    square: BoardLocation,
    piece: Piece,
    directions: &[(i8, i8)],
    pins: &[Ray],
    out: &mut Vec<ChessMove>,
) {
    let pin = pin_direction(square, pins);
    for direction in directions {
        if !direction_allowed_by_pin(*direction, pin) {
            continue;
        }
        for distance in 1..8 {
            let destination = (
                square.0 + direction.0 * distance,
                square.1 + direction.1 * distance,
            );
            if !location_in_bounds(destination) {
                break;
            }
            match game.register.view(destination) {
                None => out.push(quiet_or_capture(piece, square, destination, None)),
                Some(target) if target.color != piece.color => {
                    out.push(quiet_or_capture(piece, square, destination, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Build an ordinary (non-special) move.
pub fn quiet_or_capture(
    piece: Piece,
    start: BoardLocation,
    destination: BoardLocation,
    captured: Option<Piece>,
) -> ChessMove {
    ChessMove {
        start,
        destination,
        piece_moved: piece,
        piece_captured: captured,
        is_pawn_promotion: false,
        is_en_passant: false,
        is_king_side_castle: false,
        is_queen_side_castle: false,
    }
}
