//! Core board and game state representation.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 board
//! grid, the side to move, and the interaction-phase selection used by the
//! select/apply turn loop.

use crate::game_state::draughts_rules::{BOARD_SIZE, STARTING_POSITION_NOTATION};
use crate::game_state::draughts_types::{Coord, Piece, Player, Selection};
use crate::utils::position_generator::generate_position;
use crate::utils::position_parser::parse_position;

/// The 8x8 grid of squares. Each cell is either empty or holds one piece;
/// there is no sentinel value for emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[at.row() as usize][at.col() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, at: Coord, piece: Option<Piece>) {
        self.cells[at.row() as usize][at.col() as usize] = piece;
    }

    /// Coordinates of every square, row by row.
    pub fn all_squares() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE)
                .map(move |col| Coord::new(row, col).expect("iteration stays within the board"))
        })
    }

    /// Squares currently holding a piece of `player`.
    pub fn squares_owned_by(&self, player: Player) -> Vec<Coord> {
        Self::all_squares()
            .filter(|at| matches!(self.piece_at(*at), Some(piece) if piece.owner == player))
            .collect()
    }

    pub fn piece_count(&self, player: Player) -> usize {
        Self::all_squares()
            .filter(|at| matches!(self.piece_at(*at), Some(piece) if piece.owner == player))
            .count()
    }
}

/// Complete game state: position, side to move, and interaction phase.
///
/// A `GameState` is a plain owned value. Engine operations take a state in
/// and hand a new state back; the presentation layer holds the single
/// current instance and threads it through calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub selection: Selection,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::Light,
            selection: Selection::Idle,
        }
    }
}

impl GameState {
    /// Empty board, Light to move, nothing selected.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout with Light to move.
    #[inline]
    pub fn new_game() -> Self {
        parse_position(STARTING_POSITION_NOTATION)
            .expect("starting position notation should always parse")
    }

    #[inline]
    pub fn from_notation(notation: &str) -> Result<Self, String> {
        parse_position(notation)
    }

    #[inline]
    pub fn get_notation(&self) -> String {
        generate_position(self)
    }
}
