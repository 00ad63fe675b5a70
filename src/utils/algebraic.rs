//! Square conversions for algebraic coordinates.
//!
//! Maps human-readable names such as `e4` onto `(row, col)` squares. Files
//! `a..=h` are columns `0..=7`; rank 8 is row 0 and rank 1 is row 7.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = i32::from(file - b'a');
    let row = 7 - i32::from(rank - b'1');
    Square::new(row, col).map_err(|e| e.to_string())
}

pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

/// Parse a four-character move such as `e2e4` into its two squares.
pub fn parse_move_text(text: &str) -> Result<(Square, Square), String> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Invalid move text: {text}"));
    }
    Ok((
        algebraic_to_square(&text[0..2])?,
        algebraic_to_square(&text[2..4])?,
    ))
}
