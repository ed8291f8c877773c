//! Conversions between board locations and algebraic square text.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the internal
//! `(file, rank)` representation reused by FEN handling and move logging.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation};

/// Convert a board location to algebraic notation (for example: "e4").
/// Out-of-bounds input renders as "??" rather than failing; locations are
/// bounds-checked at their construction sites.
pub fn location_to_algebraic(x: BoardLocation) -> String {
    if !location_in_bounds(x) {
        return "??".to_owned();
    }
    let file_char = char::from(b'a' + x.0 as u8);
    let rank_char = char::from(b'1' + x.1 as u8);
    format!("{file_char}{rank_char}")
}

/// Convert algebraic notation (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }
    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn round_trip_conversions() {
        assert_eq!(algebraic_to_location("a1").expect("a1 should parse"), (0, 0));
        assert_eq!(algebraic_to_location("h8").expect("h8 should parse"), (7, 7));
        assert_eq!(location_to_algebraic((4, 3)), "e4");
        assert_eq!(location_to_algebraic((0, 0)), "a1");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(algebraic_to_location("i1").is_err());
        assert!(algebraic_to_location("a9").is_err());
        assert!(algebraic_to_location("e").is_err());
        assert!(algebraic_to_location("e44").is_err());
    }
}
