//! Core mutable board state.
//!
//! `GameState` is the single authoritative position container. Moves are
//! applied in place and reversed exactly by `undo_move`; no board snapshots
//! are ever taken. The move log plus a parallel undo log (castling rights,
//! en passant target, halfmove clock) are the sole undo mechanism.

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::game_state::chess_rules::{
    FIFTY_MOVE_HALFMOVE_LIMIT, REPETITION_DRAW_COUNT, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    BoardLocation, CastleRights, Color, Piece, PieceKind,
};
use crate::game_state::piece_register::PieceRegister;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::scan_pins_and_checks;
use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};

#[derive(Debug, Clone)]
pub struct GameState {
    pub register: PieceRegister,
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant_target: Option<BoardLocation>,

    // Cached king coordinates, kept equal to the grid cell actually holding
    // each king. Indexed by Color::index().
    pub king_locations: [BoardLocation; 2],

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub move_log: Vec<ChessMove>,
    undo_log: Vec<UndoState>,
    repetition_log: Vec<String>,
}

impl GameState {
    pub fn new_game() -> Self {
        GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> BoardLocation {
        self.king_locations[color.index()]
    }

    /// Apply a move in place. The move is assumed to come from the current
    /// legal move list; no legality re-check is performed. `promotion`
    /// selects the piece a promoting pawn becomes and defaults to a queen.
    pub fn make_move(&mut self, mv: ChessMove, promotion: Option<PieceKind>) {
        self.undo_log.push(UndoState {
            castle_rights: self.castle_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
        });

        let color = mv.piece_moved.color;
        self.register.put(mv.start, None);
        let placed = if mv.is_pawn_promotion {
            Piece {
                color,
                kind: promotion.unwrap_or(PieceKind::Queen),
            }
        } else {
            mv.piece_moved
        };
        self.register.put(mv.destination, Some(placed));

        if mv.is_en_passant {
            // The captured pawn sits beside the start square.
            self.register.put((mv.destination.0, mv.start.1), None);
        }
        if mv.is_king_side_castle {
            let rook = self.register.take((7, mv.start.1));
            self.register.put((5, mv.start.1), rook);
        } else if mv.is_queen_side_castle {
            let rook = self.register.take((0, mv.start.1));
            self.register.put((3, mv.start.1), rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[color.index()] = mv.destination;
            self.castle_rights.revoke_both(color);
        }
        self.revoke_corner_rights(mv.start);
        self.revoke_corner_rights(mv.destination);

        self.en_passant_target = if mv.piece_moved.kind == PieceKind::Pawn
            && (mv.destination.1 - mv.start.1).abs() == 2
        {
            Some((mv.start.0, (mv.start.1 + mv.destination.1) / 2))
        } else {
            None
        };

        if mv.piece_moved.kind == PieceKind::Pawn || mv.piece_captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Dark {
            self.fullmove_number += 1;
        }

        self.side_to_move = self.side_to_move.opposite();
        self.move_log.push(mv);
        self.repetition_log.push(self.position_key());
    }

    /// Exactly reverse the most recent move. No-op when the history is empty.
    pub fn undo_move(&mut self) {
        let (Some(mv), Some(undo)) = (self.move_log.pop(), self.undo_log.pop()) else {
            return;
        };
        self.repetition_log.pop();

        let color = mv.piece_moved.color;
        self.register.put(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.register.put(mv.destination, None);
            self.register.put((mv.destination.0, mv.start.1), mv.piece_captured);
        } else {
            self.register.put(mv.destination, mv.piece_captured);
        }
        if mv.is_king_side_castle {
            let rook = self.register.take((5, mv.start.1));
            self.register.put((7, mv.start.1), rook);
        } else if mv.is_queen_side_castle {
            let rook = self.register.take((3, mv.start.1));
            self.register.put((0, mv.start.1), rook);
        }
        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[color.index()] = mv.start;
        }

        self.castle_rights = undo.castle_rights;
        self.en_passant_target = undo.en_passant_target;
        self.halfmove_clock = undo.halfmove_clock;
        if color == Color::Dark {
            self.fullmove_number -= 1;
        }
        self.side_to_move = self.side_to_move.opposite();
    }

    // A king move, or any move touching a corner square, may revoke the
    // corresponding castling right. Rights are monotonic so a redundant
    // revoke is harmless.
    fn revoke_corner_rights(&mut self, square: BoardLocation) {
        match square {
            (0, 0) => self.castle_rights.revoke_queen_side(Color::Light),
            (7, 0) => self.castle_rights.revoke_king_side(Color::Light),
            (0, 7) => self.castle_rights.revoke_queen_side(Color::Dark),
            (7, 7) => self.castle_rights.revoke_king_side(Color::Dark),
            _ => {}
        }
    }

    #[inline]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.repetition_log.last() else {
            return false;
        };
        self.repetition_log
            .iter()
            .filter(|key| *key == current)
            .count()
            >= REPETITION_DRAW_COUNT
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition()
    }

    /// Whether the side to move has a pawn that can actually play the en
    /// passant capture. Each candidate capturer is tried on a scratch board
    /// with both pawns lifted, since the capture may be refused for pin or
    /// rank-exposure reasons.
    pub fn en_passant_capture_legal(&self) -> bool {
        let Some(target) = self.en_passant_target else {
            return false;
        };
        let color = self.side_to_move;
        let origin_rank = target.1 - color.forward();
        let victim_square = (target.0, origin_rank);
        for d_file in [-1, 1] {
            let start = (target.0 + d_file, origin_rank);
            if !(0..8).contains(&start.0) {
                continue;
            }
            match self.register.view(start) {
                Some(piece) if piece.color == color && piece.kind == PieceKind::Pawn => {
                    let mut scratch = self.register.clone();
                    scratch.take(start);
                    scratch.take(victim_square);
                    scratch.put(target, Some(piece));
                    if !scan_pins_and_checks(&scratch, color, self.king_location(color))
                        .in_check
                    {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Identity key for repetition detection: piece placement, side to move,
    /// castling rights, and en passant target (the first four FEN fields).
    /// The en passant field is included only when the capture can legally be
    /// played; otherwise two occurrences of the same placement would never
    /// match across a double-step.
    pub fn position_key(&self) -> String {
        let en_passant = if self.en_passant_capture_legal() {
            self.en_passant_target
        } else {
            None
        };
        self.fen_fields(en_passant)
    }

    fn fen_fields(&self, en_passant: Option<BoardLocation>) -> String {
        let mut key = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empty_run: u8 = 0;
            for file in 0..8 {
                if let Some(piece) = self.register.view((file, rank)) {
                    if empty_run > 0 {
                        key.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    key.push(piece.to_fen_char());
                } else {
                    empty_run += 1;
                }
            }
            if empty_run > 0 {
                key.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                key.push('/');
            }
        }

        key.push(' ');
        key.push(match self.side_to_move {
            Color::Light => 'w',
            Color::Dark => 'b',
        });

        key.push(' ');
        if self.castle_rights == CastleRights::none() {
            key.push('-');
        } else {
            if self.castle_rights.light_king_side {
                key.push('K');
            }
            if self.castle_rights.light_queen_side {
                key.push('Q');
            }
            if self.castle_rights.dark_king_side {
                key.push('k');
            }
            if self.castle_rights.dark_queen_side {
                key.push('q');
            }
        }

        key.push(' ');
        match en_passant {
            Some(square) => key.push_str(&location_to_algebraic(square)),
            None => key.push('-'),
        }

        key
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let mut fields = fen.split_ascii_whitespace();

        let placement = fields.next().ok_or(ChessErrors::InvalidFenString)?;
        let mut register = PieceRegister::default();
        let mut file: i8 = 0;
        let mut rank: i8 = 7;
        for c in placement.chars() {
            match c {
                '/' => {
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += (c as u8 - b'0') as i8;
                }
                _ => {
                    let piece =
                        Piece::from_fen_char(c).ok_or(ChessErrors::InvalidFenString)?;
                    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
                        return Err(ChessErrors::InvalidFenString);
                    }
                    register.put((file, rank), Some(piece));
                    file += 1;
                }
            }
        }

        let side_to_move = match fields.next() {
            Some("w") => Color::Light,
            Some("b") => Color::Dark,
            _ => return Err(ChessErrors::InvalidFenString),
        };

        let mut castle_rights = CastleRights::none();
        for c in fields.next().ok_or(ChessErrors::InvalidFenString)?.chars() {
            match c {
                'K' => castle_rights.light_king_side = true,
                'Q' => castle_rights.light_queen_side = true,
                'k' => castle_rights.dark_king_side = true,
                'q' => castle_rights.dark_queen_side = true,
                '-' => {}
                _ => return Err(ChessErrors::InvalidFenString),
            }
        }

        let en_passant_field = fields.next().ok_or(ChessErrors::InvalidFenString)?;
        let en_passant_target = if en_passant_field == "-" {
            None
        } else {
            Some(algebraic_to_location(en_passant_field)?)
        };

        let halfmove_clock = match fields.next() {
            Some(s) => s.parse::<u16>().map_err(|_| ChessErrors::InvalidFenString)?,
            None => 0,
        };
        let fullmove_number = match fields.next() {
            Some(s) => s.parse::<u16>().map_err(|_| ChessErrors::InvalidFenString)?,
            None => 1,
        };

        let king_locations = [
            register
                .find_king(Color::Light)
                .ok_or(ChessErrors::InvalidFenString)?,
            register
                .find_king(Color::Dark)
                .ok_or(ChessErrors::InvalidFenString)?,
        ];

        let mut game = GameState {
            register,
            side_to_move,
            castle_rights,
            en_passant_target,
            king_locations,
            halfmove_clock,
            fullmove_number,
            move_log: Vec::new(),
            undo_log: Vec::new(),
            repetition_log: Vec::new(),
        };
        game.repetition_log.push(game.position_key());
        Ok(game)
    }

    pub fn get_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.fen_fields(self.en_passant_target),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
