//! Attack and check queries.
//!
//! Attack sets come from each piece's capture shape, never from legal move
//! generation, so these queries cannot recurse into castling or self-check
//! filtering.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_moves::attack_targets;

/// True if any piece of `attacker_color` attacks `square`.
///
/// Whatever stands on `square` is ignored, so a king (or any other piece)
/// there is seen as capturable rather than as a blocker.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    board.squares_of(attacker_color).any(|(from, piece)| {
        targets.clear();
        attack_targets(board, from, piece, &mut targets);
        targets.contains(&square)
    })
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
