//! Negamax alpha-beta search with move ordering and check extensions.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::{
    evaluate, Score, CHECKMATE_SCORE, MAX_SCORE, MIN_SCORE,
};

/// The search result for a root position.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: ChessMove,
    /// Set when the chosen move is a promotion; the search always promotes
    /// to a queen.
    pub promotion_hint: Option<PieceKind>,
    /// Score from the root mover's point of view, in centipawns.
    pub score: Score,
}

/// Search `moves` (the legal moves of `game`) to `depth` plies and pick the
/// best one. Moves tied at the top score are equivalent as far as the
/// search can see, so one is drawn at random to vary play between games.
pub fn find_best_move(
    game: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    rng: &mut SmallRng,
) -> Result<SearchOutcome, ChessErrors> {
    if moves.is_empty() {
        return Err(ChessErrors::NoLegalMoves);
    }
    let depth = u32::from(depth.max(1));
    // Check extensions grow the tree; cap their total so a long series of
    // checks cannot recurse without bound.
    let extension_budget = 2 * depth;

    let mut ordered = moves.to_vec();
    order_moves(&mut ordered);

    // The root searches every child with a full window so tied moves carry
    // their exact score and the tie-break below stays meaningful.
    let mut best_score = MIN_SCORE;
    let mut best_moves: Vec<ChessMove> = Vec::new();
    for mv in ordered {
        game.make_move(mv, None);
        let score = -negamax(game, depth - 1, MIN_SCORE, MAX_SCORE, extension_budget);
        game.undo_move();
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let best_move = match best_moves.choose(rng) {
        Some(mv) => *mv,
        None => return Err(ChessErrors::NoLegalMoves),
    };
    Ok(SearchOutcome {
        best_move,
        promotion_hint: best_move.is_pawn_promotion.then_some(PieceKind::Queen),
        score: best_score,
    })
}

/// Negamax with alpha-beta pruning. The score is always from the point of
/// view of the side to move in `game`.
fn negamax(
    game: &mut GameState,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    mut extension_budget: u32,
) -> Score {
    let checked = in_check(game);
    let mut moves = generate_legal_moves(game);
    if moves.is_empty() {
        // No reply: mated if checked, otherwise stalemated. Resolved before
        // the draw rules so a mate landing on the fifty-move boundary still
        // counts as mate, as `determine_game_result` classifies it.
        return if checked { -CHECKMATE_SCORE } else { 0 };
    }
    if game.is_draw() {
        return 0;
    }
    let mut depth = depth;
    if checked && extension_budget > 0 {
        depth += 1;
        extension_budget -= 1;
    }
    if depth == 0 {
        return side_sign(game.side_to_move) * evaluate(game);
    }

    order_moves(&mut moves);
    let mut best = MIN_SCORE;
    for mv in moves {
        game.make_move(mv, None);
        let score = -negamax(game, depth - 1, -beta, -alpha, extension_budget);
        game.undo_move();
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[inline]
fn side_sign(color: Color) -> Score {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

/// Sort moves into buckets most likely to cause early cutoffs: promotions
/// first, then captures by descending victim value, then quiet moves. The
/// sort is stable, so board-order generation breaks ties inside a bucket.
pub fn order_moves(moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| {
        if mv.is_pawn_promotion {
            return 0u8;
        }
        match mv.piece_captured.map(|piece| piece.kind) {
            Some(PieceKind::Queen) => 1,
            Some(PieceKind::Rook) => 2,
            Some(PieceKind::Bishop) => 3,
            Some(PieceKind::Knight) => 4,
            Some(PieceKind::Pawn) => 5,
            Some(PieceKind::King) | None => 6,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn search(fen: &str, depth: u8, seed: u64) -> SearchOutcome {
        let mut game = GameState::from_fen(fen).expect("search FEN should parse");
        let moves = generate_legal_moves(&mut game);
        let mut rng = SmallRng::seed_from_u64(seed);
        find_best_move(&mut game, &moves, depth, &mut rng)
            .expect("position should have a legal move")
    }

    /// Plain negamax with no pruning but otherwise identical logic, for
    /// cross-checking that alpha-beta never changes the root score.
    fn reference_negamax(game: &mut GameState, depth: u32, mut extension_budget: u32) -> Score {
        let checked = in_check(game);
        let moves = generate_legal_moves(game);
        if moves.is_empty() {
            return if checked { -CHECKMATE_SCORE } else { 0 };
        }
        if game.is_draw() {
            return 0;
        }
        let mut depth = depth;
        if checked && extension_budget > 0 {
            depth += 1;
            extension_budget -= 1;
        }
        if depth == 0 {
            return side_sign(game.side_to_move) * evaluate(game);
        }
        let mut best = MIN_SCORE;
        for mv in moves {
            game.make_move(mv, None);
            best = best.max(-reference_negamax(game, depth - 1, extension_budget));
            game.undo_move();
        }
        best
    }

    #[test]
    fn finds_a_back_rank_mate_in_one() {
        let outcome = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2, 7);
        assert_eq!(outcome.best_move.start, (0, 0));
        assert_eq!(outcome.best_move.destination, (0, 7));
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn mate_on_the_hundredth_halfmove_outranks_the_fifty_move_rule() {
        // Ra8 is a quiet move that pushes the halfmove clock to 100 and
        // mates at the same time; mate wins, so the search must not score
        // the mating line as a draw and wander off with the king instead.
        let outcome = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 80", 2, 7);
        assert_eq!(outcome.best_move.destination, (0, 7));
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn takes_a_hanging_queen() {
        // Dark queen on d4 is undefended and attacked by the e3 pawn.
        let outcome = search("4k3/8/8/8/3q4/4P3/8/4K3 w - - 0 1", 2, 3);
        assert_eq!(outcome.best_move.destination, (3, 3));
    }

    #[test]
    fn pruning_never_changes_the_root_score() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];
        for fen in fens {
            let mut game = GameState::from_fen(fen).expect("cross-check FEN should parse");
            let depth = 2;
            let budget = 2 * depth;
            let pruned = {
                let moves = generate_legal_moves(&mut game);
                let mut rng = SmallRng::seed_from_u64(0);
                find_best_move(&mut game, &moves, depth as u8, &mut rng)
                    .expect("position should have a legal move")
                    .score
            };
            let mut reference = MIN_SCORE;
            for mv in generate_legal_moves(&mut game) {
                game.make_move(mv, None);
                reference = reference.max(-reference_negamax(&mut game, depth - 1, budget));
                game.undo_move();
            }
            assert_eq!(pruned, reference, "score disagreement for {fen}");
        }
    }

    #[test]
    fn fixed_seed_gives_a_repeatable_choice() {
        let first = search("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2, 99);
        let second = search("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2, 99);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn move_ordering_puts_promotions_and_big_captures_first() {
        let mut game = GameState::from_fen("1q5k/P7/8/8/3p4/4B3/8/K7 w - - 0 1")
            .expect("ordering FEN should parse");
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&mut moves);
        // a7xb8 is both a promotion and a queen capture; the promotion
        // bucket wins. The bishop's pawn capture precedes all quiet moves.
        assert!(moves[0].is_pawn_promotion);
        let first_quiet = moves
            .iter()
            .position(|m| m.piece_captured.is_none() && !m.is_pawn_promotion)
            .expect("there should be quiet moves");
        let last_capture = moves
            .iter()
            .rposition(|m| m.piece_captured.is_some() || m.is_pawn_promotion)
            .expect("there should be captures");
        assert!(last_capture < first_quiet);
    }

    #[test]
    fn promotion_outcome_carries_a_queen_hint() {
        let outcome = search("8/P6k/8/8/8/8/8/K7 w - - 0 1", 1, 1);
        assert!(outcome.best_move.is_pawn_promotion);
        assert_eq!(outcome.promotion_hint, Some(PieceKind::Queen));
    }
}
