//! Core value types shared by every rules subsystem.
//!
//! Squares are addressed as zero-based `(row, col)` pairs. Row 0 holds the
//! black back rank and row 7 the white back rank, so white pawns advance
//! toward row 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;

pub use crate::game_state::castling_rights::{CastlingRights, SideCastlingRights};
pub use crate::game_state::game_state::{GameState, Position};
pub use crate::game_state::undo_state::{MoveRecord, SpecialMove};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board square that is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from raw coordinates, rejecting anything outside `0..=7`.
    pub fn new(row: i32, col: i32) -> Result<Self, ChessError> {
        if is_in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::InvalidSquare { row, col })
        }
    }

    /// Const constructor for coordinates known to be valid at compile time.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square reached by shifting `(d_row, d_col)`, or `None` when off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        if is_in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = ChessError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True when both coordinates are within `0..=7`.
#[inline]
pub fn is_in_bounds(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}
