//! GameState-to-notation generator.
//!
//! Serializes board layout, side to move, and any in-progress capture chain
//! back into the single-line position notation accepted by the parser. A
//! plain (non-forced) selection is presentation-transient and is dropped.

use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::{Coord, Piece, Player, Selection};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::coord_to_algebraic;

pub fn generate_position(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push('/');
        }

        let mut empty_run = 0u32;
        for col in 0..BOARD_SIZE {
            let at = Coord::new(row, col).expect("iteration stays within the board");
            match game_state.board.piece_at(at) {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece_to_notation_char(piece));
                }
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
    }

    out.push(' ');
    out.push(match game_state.current_player {
        Player::Light => 'l',
        Player::Dark => 'd',
    });

    out.push(' ');
    match &game_state.selection {
        Selection::ForcedContinuation { from, .. } => {
            out.push_str(&coord_to_algebraic(*from));
        }
        _ => out.push('-'),
    }

    out
}

fn piece_to_notation_char(piece: Piece) -> char {
    match (piece.owner, piece.king) {
        (Player::Light, false) => 'M',
        (Player::Light, true) => 'K',
        (Player::Dark, false) => 'm',
        (Player::Dark, true) => 'k',
    }
}
