//! 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` grid of optional pieces. It knows nothing about
//! turn order or move rights; those live on `Position`.

use crate::game_state::chess_rules::{back_row, pawn_start_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.cells[back as usize][col] = Some(Piece::new(*kind, color));
                board.cells[pawns as usize][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        is_in_bounds(row, col)
    }

    /// Overwrite a cell, returning what was there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.set_piece(square, None)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|sq| self.piece_at(*sq) == Some(king))
    }

    /// Occupied squares of `color` with their pieces, row-major.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    pub fn piece_count(&self) -> usize {
        Square::all().filter(|sq| !self.is_empty(*sq)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_black_on_row_zero() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_at(Square::at(0, 4)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::at(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::at(6, 0)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.squares_of(Color::White).count(), 16);
    }

    #[test]
    fn set_and_take_report_previous_occupant() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let sq = Square::at(3, 3);

        assert_eq!(board.set_piece(sq, Some(rook)), None);
        assert_eq!(board.take_piece(sq), Some(rook));
        assert!(board.is_empty(sq));
    }

    #[test]
    fn king_square_is_none_without_a_king() {
        let board = Board::empty();
        assert_eq!(board.king_square(Color::White), None);
        assert_eq!(
            Board::starting_position().king_square(Color::White),
            Some(Square::at(7, 4))
        );
    }

    #[test]
    fn bounds_check_covers_both_axes() {
        assert!(Board::is_in_bounds(0, 7));
        assert!(!Board::is_in_bounds(-1, 3));
        assert!(!Board::is_in_bounds(3, 8));
    }
}
