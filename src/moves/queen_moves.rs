use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Union of rook and bishop rays.
#[inline]
pub fn queen_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    rook_targets(board, from, out);
    bishop_targets(board, from, out);
}

#[cfg(test)]
mod tests {
    use super::queen_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let mut out = Vec::new();
        queen_targets(&Board::empty(), Square::new(4, 3).expect("d4"), &mut out);
        assert_eq!(out.len(), 27);
    }
}
