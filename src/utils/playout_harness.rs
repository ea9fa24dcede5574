//! Seeded random self-play harness for local testing.
//!
//! Drives the full select/apply turn loop with uniformly random choices
//! until the game ends or a turn cap is hit. Used by integration tests and
//! benches to exercise the rules engine over whole games; it chooses moves
//! at random and is diagnostics tooling, not an opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::draughts_types::{Coord, Player, Selection};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::piece_destinations;
use crate::move_generation::legal_move_selection::select_square;
use crate::move_generation::move_generator::{RulesError, RulesResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Win(Player),
    /// The turn cap was reached before either side ran out of moves.
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_turns: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_turns: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub turns_played: u32,
    pub captures: u32,
    pub promotions: u32,
}

/// Play one seeded random game from the starting position.
pub fn play_random_game(seed: u64, config: &PlayoutConfig) -> RulesResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game();
    let mut turns_played = 0u32;
    let mut captures = 0u32;
    let mut promotions = 0u32;

    while turns_played < config.max_turns {
        if game_status(&state) != GameStatus::InProgress {
            break;
        }

        // One complete turn: pick a movable piece and a destination, then
        // follow any forced continuations to the end of the chain.
        let (from, to) = pick_random_move(&state, &mut rng)?;
        let armed = select_square(&state, from.row(), from.col())?;
        let mut applied = apply_move(&armed, to.row(), to.col())?;
        captures += u32::from(applied.captured.is_some());
        promotions += u32::from(applied.promoted);

        while applied.chain_continues {
            let mid = applied.game_after_move.clone();
            let continuation = pick_random_continuation(&mid, &mut rng)?;
            applied = apply_move(&mid, continuation.row(), continuation.col())?;
            captures += u32::from(applied.captured.is_some());
            promotions += u32::from(applied.promoted);
        }

        state = applied.game_after_move;
        turns_played += 1;
    }

    let outcome = match game_status(&state) {
        GameStatus::Won(player) => PlayoutOutcome::Win(player),
        GameStatus::InProgress => PlayoutOutcome::Unfinished,
    };

    Ok(PlayoutResult {
        outcome,
        final_state: state,
        turns_played,
        captures,
        promotions,
    })
}

fn pick_random_move(state: &GameState, rng: &mut StdRng) -> RulesResult<(Coord, Coord)> {
    let mut options = Vec::<(Coord, Coord)>::new();
    for from in state.board.squares_owned_by(state.current_player) {
        for to in piece_destinations(&state.board, from) {
            options.push((from, to));
        }
    }

    options
        .choose(rng)
        .copied()
        .ok_or_else(|| RulesError::InvalidState("no move available in playout".to_owned()))
}

fn pick_random_continuation(state: &GameState, rng: &mut StdRng) -> RulesResult<Coord> {
    let Selection::ForcedContinuation { destinations, .. } = &state.selection else {
        return Err(RulesError::InvalidState(
            "playout continuation without a forced chain".to_owned(),
        ));
    };
    destinations
        .choose(rng)
        .copied()
        .ok_or_else(|| RulesError::InvalidState("forced chain with no destination".to_owned()))
}
