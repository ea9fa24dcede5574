//! Shared result and error types for the rules engine.
//!
//! Every engine operation that can reject its input reports through
//! `RulesError` so callers get one uniform failure channel for contract
//! violations (out-of-range coordinates, illegal destinations, chain locks).

use std::error::Error;
use std::fmt;

use crate::game_state::draughts_types::Coord;

pub type RulesResult<T> = Result<T, RulesError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8x8 board. Caller contract violation;
    /// never clamped.
    OutOfBounds { row: u8, col: u8 },
    /// A move was requested while no square is selected.
    NoSelection,
    /// The requested destination is not in the current legal set.
    NotALegalDestination { row: u8, col: u8 },
    /// A multi-capture chain is in progress; only the chain piece may act.
    CaptureChainInProgress { continue_from: Coord },
    /// Internal consistency violation that legal play never produces.
    InvalidState(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::OutOfBounds { row, col } => {
                write!(f, "coordinates ({row}, {col}) are off the board")
            }
            RulesError::NoSelection => write!(f, "no square is selected"),
            RulesError::NotALegalDestination { row, col } => {
                write!(f, "({row}, {col}) is not a legal destination")
            }
            RulesError::CaptureChainInProgress { continue_from } => write!(
                f,
                "capture chain must continue from ({}, {})",
                continue_from.row(),
                continue_from.col()
            ),
            RulesError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for RulesError {}
