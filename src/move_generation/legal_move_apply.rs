//! Move application: captures, promotion, chain continuation, turn passing.
//!
//! `apply_move` is the single mutation path for board and turn state. It
//! consumes the destination chosen for the current selection, removes the
//! jumped piece on captures, crowns men reaching the far row, and either
//! forces the same piece to keep capturing or hands the turn over.

use crate::game_state::draughts_types::{Coord, Selection};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::capture_destinations;
use crate::move_generation::move_generator::{RulesError, RulesResult};

/// Outcome of one `apply_move` call: the successor state plus a structured
/// report of what happened, including the post-move game status.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMove {
    pub game_after_move: GameState,
    pub from: Coord,
    pub to: Coord,
    /// Square of the jumped piece, when the move was a capture.
    pub captured: Option<Coord>,
    /// True when this move crowned the piece.
    pub promoted: bool,
    /// True when the same piece must capture again and the turn did not pass.
    pub chain_continues: bool,
    /// Status of `game_after_move`, evaluated against its current player.
    pub status: GameStatus,
}

/// Apply the move of the current selection to `(row, col)`.
///
/// Rejected with `NoSelection` when nothing is selected and with
/// `NotALegalDestination` when the target is not in the armed destination
/// set; the input state is left untouched on rejection.
pub fn apply_move(state: &GameState, row: u8, col: u8) -> RulesResult<AppliedMove> {
    let to = Coord::new(row, col).ok_or(RulesError::OutOfBounds { row, col })?;

    let (from, destinations) = match &state.selection {
        Selection::Idle => return Err(RulesError::NoSelection),
        Selection::AwaitingDestination { from, destinations }
        | Selection::ForcedContinuation { from, destinations } => (*from, destinations),
    };
    if !destinations.contains(&to) {
        return Err(RulesError::NotALegalDestination { row, col });
    }

    let mut piece = state.board.piece_at(from).ok_or_else(|| {
        RulesError::InvalidState(format!(
            "selection points at empty square ({}, {})",
            from.row(),
            from.col()
        ))
    })?;

    // A jump moves two rows and two columns; a slide moves one of each.
    let row_delta = to.row() as i8 - from.row() as i8;
    let col_delta = to.col() as i8 - from.col() as i8;
    let is_capture = row_delta.abs() == 2 && col_delta.abs() == 2;

    let mut next = state.clone();
    next.board.set_piece(from, None);

    let captured = if is_capture {
        let over = from
            .offset(row_delta / 2, col_delta / 2)
            .ok_or_else(|| RulesError::InvalidState("capture midpoint off the board".to_owned()))?;
        next.board.set_piece(over, None);
        Some(over)
    } else {
        None
    };

    // Crown on the far row. Evaluated before the continuation check, so a
    // fresh king continues a chain with all four directions.
    let promoted = !piece.king && to.row() == piece.owner.promotion_row();
    if promoted {
        piece.king = true;
    }
    next.board.set_piece(to, Some(piece));

    let further_captures = if is_capture {
        capture_destinations(&next.board, to)
    } else {
        Vec::new()
    };

    let chain_continues = !further_captures.is_empty();
    if chain_continues {
        next.selection = Selection::ForcedContinuation {
            from: to,
            destinations: further_captures,
        };
    } else {
        next.current_player = next.current_player.opposite();
        next.selection = Selection::Idle;
    }

    let status = game_status(&next);

    Ok(AppliedMove {
        game_after_move: next,
        from,
        to,
        captured,
        promoted,
        chain_continues,
        status,
    })
}
