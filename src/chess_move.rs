//! Immutable description of one ply.
//!
//! A `ChessMove` records its endpoints, the pieces involved, and the
//! special-move classification, all fixed from the position as it exists
//! before the move is applied. Two moves compare equal when their endpoints
//! match, regardless of the cached fields, so candidate moves supplied by a
//! driver can be matched against generated legal moves by endpoints alone.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub destination: BoardLocation,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_en_passant: bool,
    pub is_king_side_castle: bool,
    pub is_queen_side_castle: bool,
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.destination == other.destination
    }
}

impl Eq for ChessMove {}

impl ChessMove {
    /// Build a move from its endpoints, classifying it against the current
    /// position. This is the driver-facing constructor; move generation
    /// builds moves directly since it already knows the classification.
    pub fn from_squares(
        start: BoardLocation,
        destination: BoardLocation,
        game: &GameState,
    ) -> Result<Self, ChessErrors> {
        if !location_in_bounds(start) || !location_in_bounds(destination) {
            return Err(ChessErrors::OutOfBounds);
        }
        let piece_moved = game
            .register
            .view(start)
            .ok_or(ChessErrors::TryingToMoveNonExistentPiece(start))?;
        let mut piece_captured = game.register.view(destination);

        let is_pawn_promotion = piece_moved.kind == PieceKind::Pawn
            && destination.1 == piece_moved.color.promotion_rank();
        let is_en_passant = piece_moved.kind == PieceKind::Pawn
            && start.0 != destination.0
            && piece_captured.is_none()
            && game.en_passant_target == Some(destination);
        if is_en_passant {
            // The victim pawn sits beside the start square, not on the
            // destination square.
            piece_captured = game.register.view((destination.0, start.1));
        }
        let is_king_side_castle =
            piece_moved.kind == PieceKind::King && destination.0 - start.0 == 2;
        let is_queen_side_castle =
            piece_moved.kind == PieceKind::King && start.0 - destination.0 == 2;

        Ok(ChessMove {
            start,
            destination,
            piece_moved,
            piece_captured,
            is_pawn_promotion,
            is_en_passant,
            is_king_side_castle,
            is_queen_side_castle,
        })
    }

    /// Long algebraic rendering of the endpoints, e.g. "e2e4". Used for
    /// logging and diagnostics only.
    pub fn long_algebraic(&self) -> String {
        format!(
            "{}{}",
            location_to_algebraic(self.start),
            location_to_algebraic(self.destination)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn equality_is_by_endpoints_only() {
        let game = GameState::new_game();
        let a = ChessMove::from_squares((4, 1), (4, 3), &game).expect("e2e4 should build");
        let mut b = a;
        b.piece_captured = Some(Piece {
            color: Color::Dark,
            kind: PieceKind::Queen,
        });
        assert_eq!(a, b);
        let c = ChessMove::from_squares((4, 1), (4, 2), &game).expect("e2e3 should build");
        assert_ne!(a, c);
    }

    #[test]
    fn classifies_double_step_as_plain_move() {
        let game = GameState::new_game();
        let mv = ChessMove::from_squares((4, 1), (4, 3), &game).expect("e2e4 should build");
        assert_eq!(mv.piece_moved.kind, PieceKind::Pawn);
        assert!(mv.piece_captured.is_none());
        assert!(!mv.is_pawn_promotion);
        assert!(!mv.is_en_passant);
        assert_eq!(mv.long_algebraic(), "e2e4");
    }

    #[test]
    fn classifies_en_passant_capture() {
        let game = GameState::from_fen("k7/8/8/3pP3/8/8/8/K7 w - d6 0 2")
            .expect("en passant FEN should parse");
        let mv = ChessMove::from_squares((4, 4), (3, 5), &game).expect("exd6 should build");
        assert!(mv.is_en_passant);
        let captured = mv.piece_captured.expect("victim pawn recorded");
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert_eq!(captured.color, Color::Dark);
    }

    #[test]
    fn classifies_castling_by_king_displacement() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("castling FEN should parse");
        let king_side =
            ChessMove::from_squares((4, 0), (6, 0), &game).expect("e1g1 should build");
        assert!(king_side.is_king_side_castle);
        assert!(!king_side.is_queen_side_castle);
        let queen_side =
            ChessMove::from_squares((4, 0), (2, 0), &game).expect("e1c1 should build");
        assert!(queen_side.is_queen_side_castle);
    }

    #[test]
    fn classifies_promotion_from_destination_rank() {
        let game = GameState::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1")
            .expect("promotion FEN should parse");
        let mv = ChessMove::from_squares((4, 6), (4, 7), &game).expect("e7e8 should build");
        assert!(mv.is_pawn_promotion);
    }

    #[test]
    fn rejects_empty_start_square() {
        let game = GameState::new_game();
        assert_eq!(
            ChessMove::from_squares((4, 3), (4, 4), &game),
            Err(ChessErrors::TryingToMoveNonExistentPiece((4, 3)))
        );
    }
}
