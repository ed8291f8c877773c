//! Full legal move generation and game termination detection.
//!
//! One pin/check scan per position drives everything: double check restricts
//! the reply to king moves, single check filters piece moves down to blocks
//! and captures of the checker, and the quiet case appends castling.

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{scan_pins_and_checks, Ray};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Terminal (or not) status of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    DrawByFiftyMoveRule,
    DrawByRepetition,
}

/// All legal moves for the side to move, in row-major board order (rank
/// zero upward, file zero rightward) with castles appended last.
pub fn generate_legal_moves(game: &mut GameState) -> Vec<ChessMove> {
    let color = game.side_to_move;
    let king = game.king_location(color);
    let scan = scan_pins_and_checks(&game.register, color, king);

    let mut moves = Vec::with_capacity(48);
    if scan.checks.len() >= 2 {
        // Only the king can answer a double check.
        generate_king_moves(game, king, &mut moves);
        return moves;
    }

    for rank in 0..8 {
        for file in 0..8 {
            let square = (file, rank);
            let Some(piece) = game.register.view(square) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game, square, &scan.pins, &mut moves),
                PieceKind::Knight => generate_knight_moves(game, square, &scan.pins, &mut moves),
                PieceKind::Bishop => generate_bishop_moves(game, square, &scan.pins, &mut moves),
                PieceKind::Rook => generate_rook_moves(game, square, &scan.pins, &mut moves),
                PieceKind::Queen => generate_queen_moves(game, square, &scan.pins, &mut moves),
                PieceKind::King => generate_king_moves(game, square, &mut moves),
            }
        }
    }

    if scan.in_check {
        let blocking = blocking_squares(king, &scan.checks[0]);
        moves.retain(|mv| {
            mv.piece_moved.kind == PieceKind::King
                || mv.is_en_passant
                || blocking.contains(&mv.destination)
        });
    } else {
        generate_castle_moves(game, color, &mut moves);
    }
    moves
}

/// Squares that resolve a single check when occupied: the checker's square,
/// plus every square between a sliding checker and the king.
fn blocking_squares(king: BoardLocation, check: &Ray) -> Vec<BoardLocation> {
    let mut squares = Vec::with_capacity(7);
    if matches!(
        check.direction,
        (-2, -1) | (-2, 1) | (-1, -2) | (-1, 2) | (1, -2) | (1, 2) | (2, -1) | (2, 1)
    ) {
        squares.push(check.location);
        return squares;
    }
    for distance in 1..8 {
        let square = (
            king.0 + check.direction.0 * distance,
            king.1 + check.direction.1 * distance,
        );
        squares.push(square);
        if square == check.location {
            break;
        }
    }
    squares
}

/// Classify the position: mate or stalemate when the side to move has no
/// legal reply, then the draw rules, otherwise ongoing.
pub fn determine_game_result(game: &mut GameState) -> GameResult {
    let color = game.side_to_move;
    if generate_legal_moves(game).is_empty() {
        let king = game.king_location(color);
        return if scan_pins_and_checks(&game.register, color, king).in_check {
            GameResult::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameResult::Stalemate
        };
    }
    if game.is_fifty_move_draw() {
        return GameResult::DrawByFiftyMoveRule;
    }
    if game.is_threefold_repetition() {
        return GameResult::DrawByRepetition;
    }
    GameResult::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn twenty_moves_from_the_starting_position() {
        let mut game = GameState::new_game();
        assert_eq!(generate_legal_moves(&mut game).len(), 20);
    }

    #[test]
    fn four_hundred_positions_after_one_move_each() {
        let mut game = GameState::new_game();
        let mut total = 0;
        for mv in generate_legal_moves(&mut game) {
            game.make_move(mv, None);
            total += generate_legal_moves(&mut game).len();
            game.undo_move();
        }
        assert_eq!(total, 400);
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn pinned_piece_moves_are_filtered_out() {
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1")
            .expect("pin FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(!moves.is_empty());
        assert!(!moves.iter().any(|m| m.start == (4, 1)));
    }

    #[test]
    fn single_check_allows_blocks_captures_and_king_moves() {
        // Rook check along the e-file; the bishop can interpose on e2 or
        // the knight can capture on e8.
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/3B2N1/8/4K3 w - - 0 1")
            .expect("single check FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(moves
            .iter()
            .any(|m| m.start == (3, 2) && m.destination == (4, 1)));
        assert!(moves
            .iter()
            .any(|m| m.start == (6, 2) && m.destination == (4, 3)));
        for mv in &moves {
            assert!(
                mv.piece_moved.kind == PieceKind::King || mv.destination.0 == 4,
                "{:?} neither escapes nor addresses the e-file check",
                mv
            );
        }
    }

    #[test]
    fn double_check_restricts_replies_to_king_moves() {
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/5n2/8/R3K3 w - - 0 1")
            .expect("double check FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.piece_moved.kind == PieceKind::King));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("fool's mate FEN should parse");
        assert!(generate_legal_moves(&mut game).is_empty());
        assert_eq!(
            determine_game_result(&mut game),
            GameResult::Checkmate {
                winner: Color::Dark
            }
        );
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let mut game = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1")
            .expect("stalemate FEN should parse");
        assert_eq!(determine_game_result(&mut game), GameResult::Stalemate);
    }

    #[test]
    fn en_passant_can_resolve_a_pawn_check() {
        // The d5 pawn just double-stepped and checks the c4 king; exd6 en
        // passant removes the checker even though d6 is no blocking square.
        let mut game = GameState::from_fen("4k3/8/8/3pP3/2K5/8/8/8 w - d6 0 2")
            .expect("ep check FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(moves
            .iter()
            .any(|m| m.is_en_passant && m.start == (4, 4) && m.destination == (3, 5)));
    }
}
