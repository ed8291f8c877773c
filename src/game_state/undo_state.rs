use crate::game_state::chess_types::{BoardLocation, CastleRights};

/// Single undo record for `make_move` / `undo_move`. Captures the state that
/// a move overwrites and that cannot be recomputed from the move itself.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub castle_rights: CastleRights,
    pub en_passant_target: Option<BoardLocation>,
    pub halfmove_clock: u16,
}
