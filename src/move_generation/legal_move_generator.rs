//! Legal destination generation for single pieces and whole sides.
//!
//! Implements the movement rules: forward-diagonal slides for men, all four
//! diagonals for kings, and jump captures over an adjacent enemy piece onto
//! an empty square. Captures are mandatory per piece: whenever a piece has at
//! least one capture, its legal set is exactly its captures.

use crate::game_state::draughts_types::{Coord, Piece, Player};
use crate::game_state::game_state::{Board, GameState};
use crate::move_generation::move_generator::{RulesError, RulesResult};

const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const LIGHT_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const DARK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Diagonal directions a piece may move and capture in.
///
/// A man is restricted to the two forward diagonals of its side; a king
/// covers all four. Pure function of the piece, independent of the board.
#[inline]
pub fn directions_for_piece(piece: Piece) -> &'static [(i8, i8)] {
    if piece.king {
        &ALL_DIAGONALS
    } else {
        match piece.owner {
            Player::Light => &LIGHT_FORWARD,
            Player::Dark => &DARK_FORWARD,
        }
    }
}

/// Single-step slide destinations: adjacent empty squares in the piece's
/// directions. Empty when the square is empty.
pub fn slide_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    directions_for_piece(piece)
        .iter()
        .filter_map(|&(row_step, col_step)| from.offset(row_step, col_step))
        .filter(|&to| board.piece_at(to).is_none())
        .collect()
}

/// Jump-capture landing squares: for each direction, the adjacent square
/// holds an enemy piece and the square beyond it is on the board and empty.
/// The captured square is the midpoint and is implicit in the landing square.
pub fn capture_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut destinations = Vec::new();
    for &(row_step, col_step) in directions_for_piece(piece) {
        let Some(over) = from.offset(row_step, col_step) else {
            continue;
        };
        let Some(landing) = from.offset(2 * row_step, 2 * col_step) else {
            continue;
        };
        let jumped_enemy =
            matches!(board.piece_at(over), Some(other) if other.owner != piece.owner);
        if jumped_enemy && board.piece_at(landing).is_none() {
            destinations.push(landing);
        }
    }
    destinations
}

#[inline]
pub fn has_capture_from(board: &Board, from: Coord) -> bool {
    !capture_destinations(board, from).is_empty()
}

/// Legal destination set for the piece on `from`: its captures when it has
/// any (captures are mandatory), otherwise its slides.
pub fn piece_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let captures = capture_destinations(board, from);
    if captures.is_empty() {
        slide_destinations(board, from)
    } else {
        captures
    }
}

/// Public query boundary: legal destinations for the square at `(row, col)`.
///
/// Returns an empty set for an empty square or an opponent piece (not an
/// error); rejects out-of-range coordinates.
pub fn legal_destinations(state: &GameState, row: u8, col: u8) -> RulesResult<Vec<Coord>> {
    let at = Coord::new(row, col).ok_or(RulesError::OutOfBounds { row, col })?;
    Ok(match state.board.piece_at(at) {
        Some(piece) if piece.owner == state.current_player => {
            piece_destinations(&state.board, at)
        }
        _ => Vec::new(),
    })
}

/// Whether `player` has at least one legal move (slide or capture) on any
/// owned piece. A side with no move has lost.
pub fn side_has_any_move(board: &Board, player: Player) -> bool {
    board
        .squares_owned_by(player)
        .into_iter()
        .any(|from| !piece_destinations(board, from).is_empty())
}
