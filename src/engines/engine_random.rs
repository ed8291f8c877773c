//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use chrono::Utc;
use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: SmallRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(Utc::now().timestamp_micros() as u64)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = generate_legal_moves(game);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessErrors::NoLegalMoves)?;
        out.promotion_hint = picked.is_pawn_promotion.then_some(PieceKind::Queen);
        out.best_move = Some(picked);
        Ok(out)
    }
}
