//! Turn-tree node counting for rules validation and benchmarks.
//!
//! A node is one complete turn: a slide, or a full multi-capture chain by
//! one piece. Captures are tallied per jumped piece at the leaf level, with
//! chained jumps and promotions broken out separately.
//!
//! Captures here are mandatory per piece (a piece with a jump available must
//! jump), so counts differ from draughts perft tables computed under a
//! whole-side mandatory-capture rule.

use crate::game_state::draughts_types::{Coord, Selection};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_selection::select_square;
use crate::move_generation::move_generator::RulesResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub chained_captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.chained_captures += rhs.chained_captures;
        self.promotions += rhs.promotions;
    }
}

/// Count complete turns to `depth`, starting from `game_state`.
///
/// A state holding a forced continuation resumes mid-turn: only the chain
/// piece moves, and finishing its chain consumes the first depth level.
pub fn perft(game_state: &GameState, depth: u8) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let origins = match &game_state.selection {
        Selection::ForcedContinuation { from, .. } => vec![*from],
        _ => game_state.board.squares_owned_by(game_state.current_player),
    };

    let mut total = PerftCounts::default();
    for from in origins {
        perft_turn(game_state, from, depth, 0, false, &mut total)?;
    }
    Ok(total)
}

/// Walk every way the piece on `from` can finish the current turn, then
/// recurse into the opponent's reply tree.
fn perft_turn(
    game_state: &GameState,
    from: Coord,
    depth: u8,
    jumps_so_far: usize,
    promoted_so_far: bool,
    total: &mut PerftCounts,
) -> RulesResult<()> {
    let armed = select_square(game_state, from.row(), from.col())?;
    let destinations = armed.selection.destinations().to_vec();

    for to in destinations {
        let applied = apply_move(&armed, to.row(), to.col())?;
        let jumps = jumps_so_far + usize::from(applied.captured.is_some());
        let promoted = promoted_so_far || applied.promoted;

        if applied.chain_continues {
            perft_turn(&applied.game_after_move, to, depth, jumps, promoted, total)?;
        } else {
            if depth == 1 {
                total.captures += jumps;
                total.chained_captures += jumps.saturating_sub(1);
                total.promotions += usize::from(promoted);
            }
            total.merge(perft(&applied.game_after_move, depth - 1)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::draughts_types::{Coord, Piece, Player, Selection};
    use crate::game_state::game_state::{Board, GameState};

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("test coordinate should be in range")
    }

    #[test]
    fn depth_zero_is_one_node() {
        let counts = perft(&GameState::new_game(), 0).expect("perft should run");
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn starting_position_has_seven_opening_moves() {
        let counts = perft(&GameState::new_game(), 1).expect("perft should run");
        assert_eq!(counts.nodes, 7);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn both_sides_open_symmetrically() {
        let counts = perft(&GameState::new_game(), 2).expect("perft should run");
        assert_eq!(counts.nodes, 49);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn forced_capture_is_the_only_turn() {
        let mut board = Board::empty();
        board.set_piece(at(4, 1), Some(Piece::man(Player::Light)));
        board.set_piece(at(3, 2), Some(Piece::man(Player::Dark)));
        let state = GameState {
            board,
            current_player: Player::Light,
            selection: Selection::Idle,
        };

        let counts = perft(&state, 1).expect("perft should run");
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.chained_captures, 0);
    }

    #[test]
    fn a_double_jump_counts_as_one_turn() {
        let mut board = Board::empty();
        board.set_piece(at(5, 2), Some(Piece::man(Player::Light)));
        board.set_piece(at(4, 3), Some(Piece::man(Player::Dark)));
        board.set_piece(at(2, 3), Some(Piece::man(Player::Dark)));
        let state = GameState {
            board,
            current_player: Player::Light,
            selection: Selection::Idle,
        };

        let counts = perft(&state, 1).expect("perft should run");
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 2);
        assert_eq!(counts.chained_captures, 1);
    }

    #[test]
    fn promotion_at_the_leaf_is_tallied() {
        let mut board = Board::empty();
        board.set_piece(at(1, 2), Some(Piece::man(Player::Light)));
        board.set_piece(at(4, 5), Some(Piece::man(Player::Dark)));
        let state = GameState {
            board,
            current_player: Player::Light,
            selection: Selection::Idle,
        };

        // Two slides onto row 0, both crowning.
        let counts = perft(&state, 1).expect("perft should run");
        assert_eq!(counts.nodes, 2);
        assert_eq!(counts.promotions, 2);
    }

    #[test]
    fn stuck_side_contributes_zero_nodes() {
        let mut board = Board::empty();
        board.set_piece(at(5, 0), Some(Piece::man(Player::Dark)));
        board.set_piece(at(6, 1), Some(Piece::man(Player::Light)));
        board.set_piece(at(7, 2), Some(Piece::man(Player::Light)));
        let state = GameState {
            board,
            current_player: Player::Dark,
            selection: Selection::Idle,
        };

        let counts = perft(&state, 1).expect("perft should run");
        assert_eq!(counts.nodes, 0);
    }
}
