use serde::Serialize;

use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::*;

/// Shape of a move beyond a plain relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    None,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
    Promotion,
}

/// Single undo record for `make_move` / `unmake_move`.
///
/// `moved_piece` is the piece as it stood on `from`, so a promoted pawn is
/// restored as a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `to` for en-passant).
    pub captured: Option<(Piece, Square)>,
    pub special: SpecialMove,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}

impl MoveRecord {
    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|(piece, _)| piece)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Serializable summary of a record for event journals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveSummary {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl From<&MoveRecord> for MoveSummary {
    fn from(record: &MoveRecord) -> Self {
        Self {
            from: record.from,
            to: record.to,
            piece: record.moved_piece,
            captured: record.captured_piece(),
        }
    }
}
