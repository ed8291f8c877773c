//! 8x8 board storage.

use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

/// Dense board grid indexed by `(file, rank)`. Empty cells hold `None`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct PieceRegister {
    buffer: [[Option<Piece>; 8]; 8],
}

impl PieceRegister {
    /// Copy of the cell contents. Caller must pass an in-bounds location.
    #[inline]
    pub fn view(&self, x: BoardLocation) -> Option<Piece> {
        self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Overwrite the cell contents.
    #[inline]
    pub fn put(&mut self, x: BoardLocation, piece: Option<Piece>) {
        self.buffer[x.0 as usize][x.1 as usize] = piece;
    }

    /// Empty the cell and return what was there.
    #[inline]
    pub fn take(&mut self, x: BoardLocation) -> Option<Piece> {
        let piece = self.view(x);
        self.put(x, None);
        piece
    }

    /// Locate the king of the given color by a full board scan. Used when
    /// rebuilding state from external input; normal play reads the cached
    /// king locations instead.
    pub fn find_king(&self, color: Color) -> Option<BoardLocation> {
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.view((file, rank)) {
                    if piece.color == color && piece.kind == PieceKind::King {
                        return Some((file, rank));
                    }
                }
            }
        }
        None
    }
}
