//! Canonical chess-rule constants.
//!
//! Home rows, castling geometry and the standard starting layout used to
//! initialize and validate game state setup.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Starting position in FEN piece-placement form, row 0 first.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_COL: u8 = 7;

#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    back_row(color.opposite())
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(back_row(color), KING_HOME_COL)
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(back_row(color), KINGSIDE_ROOK_COL),
            CastleSide::Queenside => Square::at(back_row(color), QUEENSIDE_ROOK_COL),
        }
    }

    /// Square the king lands on.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(back_row(color), KING_HOME_COL + 2),
            CastleSide::Queenside => Square::at(back_row(color), KING_HOME_COL - 2),
        }
    }

    /// Square the king crosses, which is also where the rook lands.
    #[inline]
    pub const fn king_passing(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(back_row(color), KING_HOME_COL + 1),
            CastleSide::Queenside => Square::at(back_row(color), KING_HOME_COL - 1),
        }
    }

    /// Columns strictly between king and rook that must be empty.
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Castle side implied by a king moving two columns to `to_col`.
    #[inline]
    pub const fn from_king_target_col(to_col: u8) -> Option<Self> {
        match to_col {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_geometry_matches_home_rows() {
        assert_eq!(king_home(Color::White), Square::at(7, 4));
        assert_eq!(CastleSide::Kingside.king_target(Color::Black), Square::at(0, 6));
        assert_eq!(CastleSide::Queenside.king_passing(Color::White), Square::at(7, 3));
        assert_eq!(CastleSide::Queenside.rook_home(Color::Black), Square::at(0, 0));
        assert_eq!(promotion_row(Color::White), 0);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
