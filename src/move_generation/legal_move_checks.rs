//! Pin and check detection.
//!
//! The scan casts rays from a king square along all eight queen directions
//! and probes the knight offsets, producing the check/pin picture that
//! drives legality filtering. The side's own king is transparent to rays,
//! which lets the same scan validate a hypothetical king destination while
//! the king still stands on its origin square.

use crate::game_state::chess_types::{
    location_in_bounds, BoardLocation, Color, PieceKind,
};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRegister;
use crate::move_generation::legal_moves_king::KING_OFFSETS;
use crate::move_generation::legal_moves_knight::KNIGHT_OFFSETS;

/// First four directions are orthogonal, last four diagonal.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A pinned piece or a checking piece, with the ray direction leading from
/// the king toward it. For knight checks the direction is the knight offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    pub location: BoardLocation,
    pub direction: (i8, i8),
}

#[derive(Debug, Clone, Default)]
pub struct PinCheckScan {
    pub in_check: bool,
    pub pins: Vec<Ray>,
    pub checks: Vec<Ray>,
}

/// Scan outward from `origin` as if `color`'s king stood there. Along each
/// ray, the first own piece is a pin candidate; it becomes a pin only if the
/// next piece on the ray is an enemy slider matching the ray geometry. With
/// no own piece in between, such a slider (or a pawn or enemy king at
/// distance one) is a check. Knight checks are probed separately since they
/// cannot be blocked or pinned through.
pub fn scan_pins_and_checks(
    register: &PieceRegister,
    color: Color,
    origin: BoardLocation,
) -> PinCheckScan {
    let mut scan = PinCheckScan::default();

    for (direction_index, direction) in QUEEN_DIRECTIONS.iter().enumerate() {
        let orthogonal = direction_index < 4;
        let mut pin_candidate: Option<Ray> = None;
        for distance in 1..8 {
            let square = (
                origin.0 + direction.0 * distance,
                origin.1 + direction.1 * distance,
            );
            if !location_in_bounds(square) {
                break;
            }
            let Some(piece) = register.view(square) else {
                continue;
            };
            if piece.color == color {
                if piece.kind == PieceKind::King {
                    // The scanning side's own king: transparent, so a scan
                    // from a candidate destination sees through the square
                    // the king would vacate.
                    continue;
                }
                if pin_candidate.is_none() {
                    pin_candidate = Some(Ray {
                        location: square,
                        direction: *direction,
                    });
                    continue;
                }
                // Second own piece on the ray: nothing behind can matter.
                break;
            }

            let attacks_along_ray = match piece.kind {
                PieceKind::Rook => orthogonal,
                PieceKind::Bishop => !orthogonal,
                PieceKind::Queen => true,
                PieceKind::Pawn => {
                    distance == 1 && !orthogonal && direction.1 == color.forward()
                }
                PieceKind::King => distance == 1,
                PieceKind::Knight => false,
            };
            if attacks_along_ray {
                match pin_candidate {
                    Some(pin) => scan.pins.push(pin),
                    None => {
                        scan.in_check = true;
                        scan.checks.push(Ray {
                            location: square,
                            direction: *direction,
                        });
                    }
                }
            }
            break;
        }
    }

    for offset in KNIGHT_OFFSETS {
        let square = (origin.0 + offset.0, origin.1 + offset.1);
        if !location_in_bounds(square) {
            continue;
        }
        if let Some(piece) = register.view(square) {
            if piece.color != color && piece.kind == PieceKind::Knight {
                scan.in_check = true;
                scan.checks.push(Ray {
                    location: square,
                    direction: offset,
                });
            }
        }
    }

    scan
}

/// Whether the side to move currently stands in check.
#[inline]
pub fn in_check(game: &GameState) -> bool {
    let color = game.side_to_move;
    scan_pins_and_checks(&game.register, color, game.king_location(color)).in_check
}

/// Fallback attack test: flip the side to move, collect every pseudo-legal
/// destination square of the opponent, restore the side to move, and test
/// membership. The hot legality path uses `scan_pins_and_checks` instead;
/// this exists as an independent cross-check.
pub fn is_square_attacked(game: &mut GameState, square: BoardLocation) -> bool {
    game.side_to_move = game.side_to_move.opposite();
    let attacked = pseudo_legal_destinations(game).contains(&square);
    game.side_to_move = game.side_to_move.opposite();
    attacked
}

fn pseudo_legal_destinations(game: &mut GameState) -> Vec<BoardLocation> {
    use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
    use crate::move_generation::legal_moves_knight::generate_knight_moves;
    use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
    use crate::move_generation::legal_moves_queen::generate_queen_moves;
    use crate::move_generation::legal_moves_rook::generate_rook_moves;

    let color = game.side_to_move;
    let mut moves = Vec::with_capacity(64);
    let mut destinations = Vec::with_capacity(64);
    for rank in 0..8 {
        for file in 0..8 {
            let square = (file, rank);
            let Some(piece) = game.register.view(square) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game, square, &[], &mut moves),
                PieceKind::Rook => generate_rook_moves(game, square, &[], &mut moves),
                PieceKind::Bishop => generate_bishop_moves(game, square, &[], &mut moves),
                PieceKind::Knight => generate_knight_moves(game, square, &[], &mut moves),
                PieceKind::Queen => generate_queen_moves(game, square, &[], &mut moves),
                PieceKind::King => {
                    // Raw king reach: safety filtering is a legality
                    // concern, not an attack concern.
                    for offset in KING_OFFSETS {
                        let destination = (square.0 + offset.0, square.1 + offset.1);
                        if location_in_bounds(destination) {
                            destinations.push(destination);
                        }
                    }
                }
            }
        }
    }
    destinations.extend(moves.iter().map(|mv| mv.destination));
    destinations
}
