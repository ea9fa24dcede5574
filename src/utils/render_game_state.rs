//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the grid for debugging, tests,
//! and the CLI front-end in text environments.

use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::{Coord, Piece, Player};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 (row 0, Dark's home edge) is printed first, matching the
/// algebraic square names used everywhere else.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank_char = char::from(b'1' + (7 - row));
        out.push(rank_char);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let at = Coord::new(row, col).expect("iteration stays within the board");
            match game_state.board.piece_at(at) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.king) {
        (Player::Light, false) => '⛀',
        (Player::Light, true) => '⛁',
        (Player::Dark, false) => '⛂',
        (Player::Dark, true) => '⛃',
    }
}
