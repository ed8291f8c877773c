//! Plain-text board rendering for logs and diagnostics.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Render the board as ranks 8 down to 1, FEN piece letters for occupied
/// squares and dots for empty ones, with a file legend underneath.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::with_capacity(256);
    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');
        for file in 0..8 {
            match game.register.view((file, rank)) {
                Some(piece) => out.push(piece.to_fen_char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out.push_str(match game.side_to_move {
        Color::Light => "white to move\n",
        Color::Dark => "black to move\n",
    });
    out
}
