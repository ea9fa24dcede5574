//! Position-notation parser.
//!
//! Builds a fully-populated `GameState` from a single-line position string:
//! eight `/`-separated row groups (row 0 first, `M`/`K` Light man/king,
//! `m`/`k` Dark man/king, digits for empty runs), the side to move (`l` or
//! `d`), and either `-` or the algebraic square of an in-progress capture
//! chain. The triple is sufficient to resume play exactly.

use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::{Coord, Piece, Player, Selection};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::capture_destinations;
use crate::utils::algebraic::algebraic_to_coord;

pub fn parse_position(notation: &str) -> Result<GameState, String> {
    let mut parts = notation.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in notation")?;
    let side_part = parts.next().ok_or("Missing side-to-move in notation")?;
    let chain_part = parts.next().ok_or("Missing chain field in notation")?;

    if parts.next().is_some() {
        return Err("Notation has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.current_player = parse_side_to_move(side_part)?;
    game_state.selection = parse_chain_square(chain_part, &game_state)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err("Board layout must contain 8 rows".to_owned());
    }

    for (row_idx, row_str) in rows.iter().enumerate() {
        let mut col = 0u8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                continue;
            }

            let piece = piece_from_notation_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let at = Coord::new(row_idx as u8, col)
                .ok_or_else(|| "Board row has too many columns".to_owned())?;
            if !at.is_dark() {
                return Err(format!(
                    "Piece on non-playable square ({}, {})",
                    at.row(),
                    at.col()
                ));
            }

            game_state.board.set_piece(at, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err("Board row does not sum to 8 columns".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Player, String> {
    match side_part {
        "l" => Ok(Player::Light),
        "d" => Ok(Player::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

/// Restore an in-progress multi-capture chain. The named square must hold a
/// piece of the side to move with at least one capture available.
fn parse_chain_square(chain_part: &str, game_state: &GameState) -> Result<Selection, String> {
    if chain_part == "-" {
        return Ok(Selection::Idle);
    }

    let from = algebraic_to_coord(chain_part)?;
    match game_state.board.piece_at(from) {
        Some(piece) if piece.owner == game_state.current_player => {}
        Some(_) => {
            return Err(format!(
                "Chain square {chain_part} holds an opponent piece"
            ))
        }
        None => return Err(format!("Chain square {chain_part} is empty")),
    }

    let destinations = capture_destinations(&game_state.board, from);
    if destinations.is_empty() {
        return Err(format!(
            "Chain square {chain_part} has no capture available"
        ));
    }

    Ok(Selection::ForcedContinuation { from, destinations })
}

fn piece_from_notation_char(ch: char) -> Option<Piece> {
    match ch {
        'M' => Some(Piece::man(Player::Light)),
        'K' => Some(Piece::king(Player::Light)),
        'm' => Some(Piece::man(Player::Dark)),
        'k' => Some(Piece::king(Player::Dark)),
        _ => None,
    }
}
