//! Perft: exhaustive legal move tree counting, used to validate the move
//! generator against well known node counts.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Count leaf nodes of the legal move tree to `depth`, applying and
/// unapplying every move. Promotions expand to all four replacement
/// pieces so the counts match the published reference values.
pub fn perft(game: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(game);
    if depth == 1 {
        return moves
            .iter()
            .map(|mv| if mv.is_pawn_promotion { 4 } else { 1 })
            .sum();
    }
    let mut nodes = 0;
    for mv in moves {
        if mv.is_pawn_promotion {
            for kind in PROMOTION_CHOICES {
                game.make_move(mv, Some(kind));
                nodes += perft(game, depth - 1);
                game.undo_move();
            }
        } else {
            game.make_move(mv, None);
            nodes += perft(game, depth - 1);
            game.undo_move();
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perft_from(fen: &str, depth: u32) -> u64 {
        let mut game = GameState::from_fen(fen).expect("perft FEN should parse");
        perft(&mut game, depth)
    }

    #[test]
    fn starting_position_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
    }

    #[test]
    #[ignore = "slow; run with --ignored"]
    fn starting_position_depth_four() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 4), 197_281);
    }

    #[test]
    fn kiwipete_counts() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(perft_from(fen, 1), 48);
        assert_eq!(perft_from(fen, 2), 2_039);
    }

    #[test]
    fn rook_endgame_counts() {
        // Exercises en passant, promotion, and king proximity all at once.
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(perft_from(fen, 1), 14);
        assert_eq!(perft_from(fen, 2), 191);
        assert_eq!(perft_from(fen, 3), 2_812);
    }

    #[test]
    fn perft_leaves_the_position_untouched() {
        let mut game = GameState::new_game();
        let before = game.get_fen();
        perft(&mut game, 3);
        assert_eq!(game.get_fen(), before);
    }
}
