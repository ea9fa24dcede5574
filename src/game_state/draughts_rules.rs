//! Canonical draughts-rule constants.
//!
//! This module stores static rule-related literals such as the board size and
//! the standard starting position notation used to initialize and validate
//! game state setup.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Men each side starts with (three rows of four on the dark squares).
pub const MEN_PER_SIDE: usize = 12;

/// Standard starting position in the crate's position notation.
///
/// Row 0 (Dark's home edge) is listed first. Dark men fill the dark squares
/// of rows 0-2, Light men the dark squares of rows 5-7, Light to move.
pub const STARTING_POSITION_NOTATION: &str =
    "1m1m1m1m/m1m1m1m1/1m1m1m1m/8/8/M1M1M1M1/1M1M1M1M/M1M1M1M1 l -";
