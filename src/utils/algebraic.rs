//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable square names (e.g. `b6`) and internal
//! `(row, col)` coordinates reused by the position notation and CLI
//! components. Rank 1 is Light's home edge (row 7), so Light promotes on
//! rank 8 and Dark on rank 1.

use crate::game_state::draughts_types::Coord;

/// Convert an algebraic square name (for example: "b6") to a coordinate.
#[inline]
pub fn algebraic_to_coord(square: &str) -> Result<Coord, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Coord::new(row, col).ok_or_else(|| format!("Square out of range: {square}"))
}

/// Convert a coordinate to its algebraic square name (for example: "b6").
#[inline]
pub fn coord_to_algebraic(at: Coord) -> String {
    let file_char = char::from(b'a' + at.col());
    let rank_char = char::from(b'1' + (7 - at.row()));
    format!("{file_char}{rank_char}")
}
