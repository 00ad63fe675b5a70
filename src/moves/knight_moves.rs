use crate::game_state::chess_types::Square;
use crate::moves::move_shapes::push_offsets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(from: Square, out: &mut Vec<Square>) {
    push_offsets(from, &KNIGHT_OFFSETS, out);
}
