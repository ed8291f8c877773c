//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be swapped behind a single trait interface.

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the position has no legal moves.
    pub best_move: Option<ChessMove>,
    /// Piece to promote to when `best_move` is a promotion.
    pub promotion_hint: Option<PieceKind>,
    /// Score estimate from the mover's point of view, when the engine
    /// computes one.
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors>;
}
