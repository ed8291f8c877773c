//! Pawn move generation: pushes, double steps, captures, en passant, and
//! promotion flagging.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{move_board_location, BoardLocation, Color, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{scan_pins_and_checks, Ray};
use crate::move_generation::legal_move_shared::{direction_allowed_by_pin, pin_direction};

pub fn generate_pawn_moves(
    game: &mut GameState,
    square: BoardLocation,
    pins: &[Ray],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game.register.view(square) else {
        return;
    };
    let color = piece.color;
    let forward = color.forward();
    let pin = pin_direction(square, pins);

    if let Ok(one_step) = move_board_location(square, 0, forward) {
        if game.register.view(one_step).is_none()
            && direction_allowed_by_pin((0, forward), pin)
        {
            out.push(pawn_move(piece, square, one_step, None));
            if square.1 == color.pawn_start_rank() {
                if let Ok(two_steps) = move_board_location(square, 0, 2 * forward) {
                    if game.register.view(two_steps).is_none() {
                        out.push(pawn_move(piece, square, two_steps, None));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Ok(destination) = move_board_location(square, d_file, forward) else {
            continue;
        };
        if !direction_allowed_by_pin((d_file, forward), pin) {
            continue;
        }
        match game.register.view(destination) {
            Some(target) if target.color != color => {
                out.push(pawn_move(piece, square, destination, Some(target)));
            }
            None if game.en_passant_target == Some(destination) => {
                if en_passant_is_safe(game, color, square, destination) {
                    let victim = game.register.view((destination.0, square.1));
                    out.push(ChessMove {
                        start: square,
                        destination,
                        piece_moved: piece,
                        piece_captured: victim,
                        is_pawn_promotion: false,
                        is_en_passant: true,
                        is_king_side_castle: false,
                        is_queen_side_castle: false,
                    });
                }
            }
            _ => {}
        }
    }
}

fn pawn_move(
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
        is_pawn_promotion: destination.1 == piece.color.promotion_rank(),
        is_en_passant: false,
        is_king_side_castle: false,
        is_queen_side_castle: false,
    }
}

/// En passant removes two pawns from one rank in a single move, which the
/// pin scan cannot see. Lift both pawns off the board, place the capturer on
/// its destination, re-scan the king, then restore the squares exactly.
fn en_passant_is_safe(
    game: &mut GameState,
    color: Color,
    start: BoardLocation,
    destination: BoardLocation,
) -> bool {
    let victim_square = (destination.0, start.1);
    let moving = game.register.take(start);
    let victim = game.register.take(victim_square);
    game.register.put(destination, moving);

    let king = game.king_location(color);
    let safe = !scan_pins_and_checks(&game.register, color, king).in_check;

    game.register.put(destination, None);
    game.register.put(victim_square, victim);
    game.register.put(start, moving);
    safe
}
