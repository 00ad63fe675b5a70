//! Rook movement: orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_shapes::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    trace_rays(board, from, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::rook_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_rays_from_center_have_fourteen_squares() {
        let mut out = Vec::new();
        rook_targets(&Board::empty(), Square::new(4, 3).expect("d4"), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let a4 = Square::new(4, 0).expect("a4");
        let a5 = Square::new(3, 0).expect("a5");
        board.set_piece(a4, Some(Piece::new(PieceKind::Knight, Color::Black)));

        let mut out = Vec::new();
        rook_targets(&board, Square::new(7, 0).expect("a1"), &mut out);

        assert!(out.contains(&a4));
        assert!(!out.contains(&a5));
    }
}
