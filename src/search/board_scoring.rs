//! Static evaluation: material plus tapered piece-square tables.
//!
//! Each piece kind has a middlegame and an endgame table. The two scores
//! are blended by the game phase, a 0..=24 count of non-pawn material, so
//! the evaluation slides smoothly from opening priorities (king shelter,
//! development) to endgame priorities (king activity, pawn advancement).

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

pub type Score = i32;

pub const MIN_SCORE: Score = -1_000_000;
pub const MAX_SCORE: Score = 1_000_000;
/// Magnitude assigned to delivering checkmate; large enough to dominate
/// any material swing, small enough to stay clear of the window bounds.
pub const CHECKMATE_SCORE: Score = 100_000;

/// Centipawn material values indexed by `PieceKind::index()`.
pub const MATERIAL_VALUES: [Score; 6] = [100, 320, 330, 500, 900, 0];

/// Phase contribution per piece kind. Two sides' full minor and major
/// pieces sum to 24.
const PHASE_WEIGHTS: [i32; 6] = [0, 1, 1, 2, 4, 0];
pub const MAX_PHASE: i32 = 24;

#[rustfmt::skip]
const PAWN_MIDGAME: [Score; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWN_ENDGAME: [Score; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    80,  80,  80,  80,  80,  80,  80,  80,
    50,  50,  50,  50,  50,  50,  50,  50,
    30,  30,  30,  30,  30,  30,  30,  30,
    20,  20,  20,  20,  20,  20,  20,  20,
    10,  10,  10,  10,  10,  10,  10,  10,
    10,  10,  10,  10,  10,  10,  10,  10,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_MIDGAME: [Score; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const KNIGHT_ENDGAME: [Score; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_MIDGAME: [Score; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const BISHOP_ENDGAME: [Score; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_MIDGAME: [Score; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const ROOK_ENDGAME: [Score; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_MIDGAME: [Score; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const QUEEN_ENDGAME: [Score; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -10,   5,   5,   5,   5,   5,   5, -10,
    -5,   5,   5,   5,   5,   5,   5,  -5,
    -5,   5,   5,   5,   5,   5,   5,  -5,
   -10,   5,   5,   5,   5,   5,   5, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDGAME: [Score; 64] = [
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_ENDGAME: [Score; 64] = [
   -50, -40, -30, -20, -20, -30, -40, -50,
   -30, -20, -10,   0,   0, -10, -20, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -30,   0,   0,   0,   0, -30, -30,
   -50, -30, -30, -30, -30, -30, -30, -50,
];

const MIDGAME_TABLES: [&[Score; 64]; 6] = [
    &PAWN_MIDGAME,
    &KNIGHT_MIDGAME,
    &BISHOP_MIDGAME,
    &ROOK_MIDGAME,
    &QUEEN_MIDGAME,
    &KING_MIDGAME,
];

const ENDGAME_TABLES: [&[Score; 64]; 6] = [
    &PAWN_ENDGAME,
    &KNIGHT_ENDGAME,
    &BISHOP_ENDGAME,
    &ROOK_ENDGAME,
    &QUEEN_ENDGAME,
    &KING_ENDGAME,
];

/// Non-pawn material count, clamped to `MAX_PHASE`. 24 at the starting
/// position, 0 with only kings and pawns left.
pub fn game_phase(game: &GameState) -> i32 {
    let mut phase = 0;
    for rank in 0..8 {
        for file in 0..8 {
            if let Some(piece) = game.register.view((file, rank)) {
                phase += PHASE_WEIGHTS[piece.kind.index()];
            }
        }
    }
    phase.min(MAX_PHASE)
}

/// Score the position from Light's point of view: positive means Light
/// stands better. Tables are laid out from the eighth rank down, so Light
/// pieces index with the rank flipped and Dark pieces index directly,
/// giving the two colors mirrored values.
pub fn evaluate(game: &GameState) -> Score {
    let mut midgame = 0;
    let mut endgame = 0;
    for rank in 0..8 {
        for file in 0..8 {
            let Some(piece) = game.register.view((file, rank)) else {
                continue;
            };
            let kind = piece.kind.index();
            let cell = match piece.color {
                Color::Light => (7 - rank as usize) * 8 + file as usize,
                Color::Dark => rank as usize * 8 + file as usize,
            };
            let material = MATERIAL_VALUES[kind];
            let mg = material + MIDGAME_TABLES[kind][cell];
            let eg = material + ENDGAME_TABLES[kind][cell];
            match piece.color {
                Color::Light => {
                    midgame += mg;
                    endgame += eg;
                }
                Color::Dark => {
                    midgame -= mg;
                    endgame -= eg;
                }
            }
        }
    }
    let phase = game_phase(game);
    (midgame * phase + endgame * (MAX_PHASE - phase)) / MAX_PHASE
}
