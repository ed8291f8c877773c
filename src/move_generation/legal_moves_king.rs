//! King move generation, including castling.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{
    location_in_bounds, BoardLocation, Color, Piece, PieceKind,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::scan_pins_and_checks;
use crate::move_generation::legal_move_shared::quiet_or_capture;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Single-square king steps, filtered for safety by re-scanning from each
/// candidate destination. The scan treats the king's own square as
/// transparent, so a slider currently held off by the king is still seen
/// when the king retreats along its ray.
pub fn generate_king_moves(game: &GameState, square: BoardLocation, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.register.view(square) else {
        return;
    };
    for offset in KING_OFFSETS {
        let destination = (square.0 + offset.0, square.1 + offset.1);
        if !location_in_bounds(destination) {
            continue;
        }
        let target = game.register.view(destination);
        if let Some(target) = target {
            if target.color == piece.color {
                continue;
            }
        }
        if scan_pins_and_checks(&game.register, piece.color, destination).in_check {
            continue;
        }
        out.push(quiet_or_capture(piece, square, destination, target));
    }
}

/// Castling moves. The caller guarantees the king is not currently in
/// check; this checks rights, rook presence, empty lanes, and that the
/// king never crosses an attacked square.
pub fn generate_castle_moves(game: &GameState, color: Color, out: &mut Vec<ChessMove>) {
    let home = color.home_rank();
    let king_square = (4, home);
    let king = match game.register.view(king_square) {
        Some(piece) if piece.color == color && piece.kind == PieceKind::King => piece,
        _ => return,
    };

    if game.castle_rights.king_side(color)
        && rook_at(game, (7, home), color)
        && game.register.view((5, home)).is_none()
        && game.register.view((6, home)).is_none()
        && !scan_pins_and_checks(&game.register, color, (5, home)).in_check
        && !scan_pins_and_checks(&game.register, color, (6, home)).in_check
    {
        out.push(castle_move(king, king_square, (6, home), true));
    }

    if game.castle_rights.queen_side(color)
        && rook_at(game, (0, home), color)
        && game.register.view((1, home)).is_none()
        && game.register.view((2, home)).is_none()
        && game.register.view((3, home)).is_none()
        && !scan_pins_and_checks(&game.register, color, (3, home)).in_check
        && !scan_pins_and_checks(&game.register, color, (2, home)).in_check
    {
        out.push(castle_move(king, king_square, (2, home), false));
    }
}

fn rook_at(game: &GameState, square: BoardLocation, color: Color) -> bool {
    matches!(
        game.register.view(square),
        Some(piece) if piece.color == color && piece.kind == PieceKind::Rook
    )
}

fn castle_move(
    piece: Piece,
    start: BoardLocation,
    destination: BoardLocation,
    king_side: bool,
) -> ChessMove {
    ChessMove {
        start,
        destination,
        piece_moved: piece,
        piece_captured: None,
        is_pawn_promotion: false,
        is_en_passant: false,
        is_king_side_castle: king_side,
        is_queen_side_castle: !king_side,
    }
}
