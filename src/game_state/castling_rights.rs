use serde::Serialize;

use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::Color;

/// Moved-flags for one side. Flags only ever go from `false` to `true`;
/// undo restores earlier snapshots wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideCastlingRights {
    pub king_moved: bool,
    pub queenside_rook_moved: bool,
    pub kingside_rook_moved: bool,
}

impl SideCastlingRights {
    #[inline]
    pub fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved,
            CastleSide::Queenside => self.queenside_rook_moved,
        }
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, side: CastleSide) {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved = true,
            CastleSide::Queenside => self.queenside_rook_moved = true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CastlingRights {
    sides: [SideCastlingRights; 2],
}

impl CastlingRights {
    #[inline]
    pub fn side(&self, color: Color) -> &SideCastlingRights {
        &self.sides[color.index()]
    }

    #[inline]
    pub fn side_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        &mut self.sides[color.index()]
    }

    #[inline]
    pub fn can_still_castle(&self, color: Color, side: CastleSide) -> bool {
        let rights = self.side(color);
        !rights.king_moved && !rights.rook_moved(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_one_rook_leaves_the_other_side_open() {
        let mut rights = CastlingRights::default();
        rights.side_mut(Color::White).mark_rook_moved(CastleSide::Queenside);

        assert!(!rights.can_still_castle(Color::White, CastleSide::Queenside));
        assert!(rights.can_still_castle(Color::White, CastleSide::Kingside));
        assert!(rights.can_still_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn king_flag_blocks_both_sides() {
        let mut rights = CastlingRights::default();
        rights.side_mut(Color::Black).king_moved = true;
        for side in CastleSide::BOTH {
            assert!(!rights.can_still_castle(Color::Black, side));
        }
    }
}
