//! Square-selection interaction operation.
//!
//! Turns a player's square choice into the next interaction phase: selecting
//! an own piece arms `AwaitingDestination` with its legal set, anything else
//! deselects, and a forced multi-capture chain locks out re-selection.

use crate::game_state::draughts_types::{Coord, Selection};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::piece_destinations;
use crate::move_generation::move_generator::{RulesError, RulesResult};

/// Process a selection of `(row, col)` and return the updated state.
///
/// Mid-chain, any square other than the chain piece is rejected with
/// `CaptureChainInProgress` and the state stays as it was; re-selecting the
/// chain square itself is a no-op. Outside a chain the operation is total
/// over in-range input: own piece selects (possibly with an empty legal
/// set), everything else deselects.
pub fn select_square(state: &GameState, row: u8, col: u8) -> RulesResult<GameState> {
    let target = Coord::new(row, col).ok_or(RulesError::OutOfBounds { row, col })?;

    if let Selection::ForcedContinuation { from, .. } = &state.selection {
        if *from == target {
            return Ok(state.clone());
        }
        return Err(RulesError::CaptureChainInProgress {
            continue_from: *from,
        });
    }

    let mut next = state.clone();
    next.selection = match state.board.piece_at(target) {
        Some(piece) if piece.owner == state.current_player => Selection::AwaitingDestination {
            from: target,
            destinations: piece_destinations(&state.board, target),
        },
        _ => Selection::Idle,
    };
    Ok(next)
}
