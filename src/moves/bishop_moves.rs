//! Bishop movement: diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_shapes::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    trace_rays(board, from, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_from_corner_sees_the_long_diagonal() {
        let mut out = Vec::new();
        bishop_targets(&Board::empty(), Square::new(7, 0).expect("a1"), &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Square::new(0, 7).expect("h8")));
    }

    #[test]
    fn bishop_in_starting_position_is_boxed_in() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        bishop_targets(&board, Square::new(7, 2).expect("c1"), &mut out);
        // Only the two own pawns that block it.
        assert_eq!(out.len(), 2);
    }
}
