//! King stepping moves. Castling needs attack queries and lives in
//! `move_generation::legal_moves_king`.

use crate::game_state::chess_types::Square;
use crate::moves::move_shapes::push_offsets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: Square, out: &mut Vec<Square>) {
    push_offsets(from, &KING_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_targets_in_center_and_corner() {
        let mut out = Vec::new();
        king_targets(Square::new(4, 4).expect("e4"), &mut out);
        assert_eq!(out.len(), 8);

        out.clear();
        king_targets(Square::new(0, 0).expect("a8"), &mut out);
        assert_eq!(out.len(), 3);
    }
}
