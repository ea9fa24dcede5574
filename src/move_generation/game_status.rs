//! Terminal-position detection.
//!
//! A player to move with no legal move on any owned piece has lost; the
//! opponent is reported as the winner. Running out of pieces is the common
//! case, but a fully blocked side loses the same way.

use std::fmt;

use crate::game_state::draughts_types::Player;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::side_has_any_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// The winning player on a terminal status.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
        }
    }
}

/// Status of `state`, evaluated against its current player.
///
/// The stuck player is the loser; the winner reported here is always the
/// opponent of the side that cannot move.
pub fn game_status(state: &GameState) -> GameStatus {
    if side_has_any_move(&state.board, state.current_player) {
        GameStatus::InProgress
    } else {
        GameStatus::Won(state.current_player.opposite())
    }
}
