//! Full-strength engine: negamax alpha-beta search over the tapered
//! evaluation, with a seedable tie-break RNG.

use chrono::Utc;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::negamax::find_best_move;

const DEFAULT_DEPTH: u8 = 3;

pub struct NegamaxEngine {
    depth: u8,
    rng: SmallRng,
}

impl NegamaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_seed(depth, Utc::now().timestamp_micros() as u64)
    }

    /// Fixed seed makes the tie-break deterministic, which matters for
    /// tests and reproducing games.
    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self {
            depth,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "QuinceChess Negamax"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let depth = params.depth.unwrap_or(self.depth);
        let legal_moves = generate_legal_moves(game);

        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            out.info_lines
                .push("info string negamax_engine no legal moves".to_string());
            return Ok(out);
        }

        let outcome = find_best_move(game, &legal_moves, depth, &mut self.rng)?;
        out.info_lines.push(format!(
            "info depth {} score cp {} pv {}",
            depth,
            outcome.score,
            outcome.best_move.long_algebraic()
        ));
        out.best_move = Some(outcome.best_move);
        out.promotion_hint = outcome.promotion_hint;
        out.score = Some(outcome.score);
        Ok(out)
    }
}
