//! One-ply material-grab engine.
//!
//! Scores each legal move by the material it wins immediately, with a bonus
//! for promotion, and picks randomly among the best. No lookahead, so it
//! blunders freely; useful as a baseline opponent.

use chrono::Utc;
use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Pawn-unit capture values indexed by `PieceKind::index()`.
const CAPTURE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];
const PROMOTION_BONUS: i32 = 8;

pub struct GreedyEngine {
    rng: SmallRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(Utc::now().timestamp_micros() as u64)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn move_gain(mv: &ChessMove) -> i32 {
        let mut gain = mv
            .piece_captured
            .map(|piece| CAPTURE_VALUES[piece.kind.index()])
            .unwrap_or(0);
        if mv.is_pawn_promotion {
            gain += PROMOTION_BONUS;
        }
        gain
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "QuinceChess Greedy"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = generate_legal_moves(game);

        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            out.info_lines
                .push("info string greedy_engine no legal moves".to_string());
            return Ok(out);
        }

        let best_gain = legal_moves
            .iter()
            .map(Self::move_gain)
            .max()
            .unwrap_or(0);
        let candidates: Vec<ChessMove> = legal_moves
            .into_iter()
            .filter(|mv| Self::move_gain(mv) == best_gain)
            .collect();
        let picked = candidates
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessErrors::NoLegalMoves)?;

        out.info_lines.push(format!(
            "info string greedy_engine gain {} candidates {}",
            best_gain,
            candidates.len()
        ));
        out.promotion_hint = picked.is_pawn_promotion.then_some(PieceKind::Queen);
        out.score = Some(best_gain);
        out.best_move = Some(picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grabs_the_most_valuable_capture() {
        // The e3 pawn can take the d4 queen; every other move gains nothing.
        let mut game = GameState::from_fen("4k3/8/8/8/3q4/4P3/8/4K3 w - - 0 1")
            .expect("greedy FEN should parse");
        let mut engine = GreedyEngine::with_seed(5);
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("greedy engine should produce output");
        let picked = out.best_move.expect("captures are available");
        assert_eq!(picked.destination, (3, 3));
        assert_eq!(out.score, Some(9));
    }

    #[test]
    fn prefers_promotion_over_a_minor_capture() {
        // a7-a8 promotes (gain 8); the knight could only take the d5 pawn.
        let mut game = GameState::from_fen("7k/P7/8/3p4/8/2N5/8/K7 w - - 0 1")
            .expect("promotion FEN should parse");
        let mut engine = GreedyEngine::with_seed(5);
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("greedy engine should produce output");
        let picked = out.best_move.expect("moves are available");
        assert!(picked.is_pawn_promotion);
        assert_eq!(out.promotion_hint, Some(PieceKind::Queen));
    }
}
