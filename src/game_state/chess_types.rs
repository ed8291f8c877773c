//! Shared primitive types for board state and rules logic.

use crate::chess_errors::ChessErrors;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank direction pawns of this color advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank on which pawns of this color start.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank on which pawns of this color promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rank holding this color's king and rooks at game start.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece as stored in a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Parse a FEN piece character (uppercase light, lowercase dark).
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }

    /// Render as a FEN piece character.
    pub fn to_fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::Light => c.to_ascii_uppercase(),
            Color::Dark => c,
        }
    }
}

/// Board coordinate as (file, rank), each in `0..=7`. Rank 0 is the light
/// side's back rank, so "e2" is `(4, 1)`.
pub type BoardLocation = (i8, i8);

/// Offset a location, failing if the result leaves the board.
pub fn move_board_location(
    x: BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds)
    } else {
        Ok(y)
    }
}

#[inline]
pub fn location_in_bounds(x: BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// The four castling permissions. Rights are monotonic: once revoked for a
/// side and direction they are never re-granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRights {
    pub light_king_side: bool,
    pub light_queen_side: bool,
    pub dark_king_side: bool,
    pub dark_queen_side: bool,
}

impl CastleRights {
    pub const fn all() -> Self {
        CastleRights {
            light_king_side: true,
            light_queen_side: true,
            dark_king_side: true,
            dark_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        CastleRights {
            light_king_side: false,
            light_queen_side: false,
            dark_king_side: false,
            dark_queen_side: false,
        }
    }

    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::Light => self.light_king_side,
            Color::Dark => self.dark_king_side,
        }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queen_side,
            Color::Dark => self.dark_queen_side,
        }
    }

    pub fn revoke_king_side(&mut self, color: Color) {
        match color {
            Color::Light => self.light_king_side = false,
            Color::Dark => self.dark_king_side = false,
        }
    }

    pub fn revoke_queen_side(&mut self, color: Color) {
        match color {
            Color::Light => self.light_queen_side = false,
            Color::Dark => self.dark_queen_side = false,
        }
    }

    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_king_side(color);
        self.revoke_queen_side(color);
    }
}
