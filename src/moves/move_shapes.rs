//! Shared geometry helpers for per-piece move rules.
//!
//! Every piece module describes its movement as either a fixed offset set or
//! a set of ray directions. The helpers here turn those into target squares
//! on a concrete board. Targets always include the first blocker on a ray
//! whatever its color; callers decide whether that square is a capture, a
//! defended piece or an attack.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walk from `from` in one direction until the board edge or the first
/// occupied square (inclusive).
pub fn trace_ray(board: &Board, from: Square, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        out.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
}

pub fn trace_rays(board: &Board, from: Square, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, d_row, d_col, out);
    }
}

/// Push every in-bounds square reached by the offsets.
pub fn push_offsets(from: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn ray_includes_blocker_and_stops() {
        let mut board = Board::empty();
        let from = Square::new(7, 0).expect("a1");
        let blocker = Square::new(4, 0).expect("a4");
        board.set_piece(blocker, Some(Piece::new(PieceKind::Pawn, Color::White)));

        let mut out = Vec::new();
        trace_ray(&board, from, -1, 0, &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(out.last(), Some(&blocker));
    }

    #[test]
    fn offsets_are_clipped_to_the_board() {
        let mut out = Vec::new();
        push_offsets(Square::new(0, 0).expect("corner"), &[(1, 1), (-1, 0), (0, 8)], &mut out);
        assert_eq!(out, vec![Square::new(1, 1).expect("b7")]);
    }
}
