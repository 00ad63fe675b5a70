//! Pawn movement.
//!
//! Pawns are the only piece whose capture shape differs from its quiet
//! moves, so this module exposes both: `pawn_attacks` for attack queries and
//! `pawn_moves` for move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;

/// Both forward diagonals, whether or not anything stands there.
pub fn pawn_attacks(color: Color, from: Square, out: &mut Vec<Square>) {
    let forward = color.forward();
    for d_col in [-1i8, 1] {
        if let Some(to) = from.offset(forward, d_col) {
            out.push(to);
        }
    }
}

/// Pseudo-legal pawn destinations: pushes, captures and en-passant.
pub fn pawn_moves(
    board: &Board,
    color: Color,
    from: Square,
    en_passant_square: Option<Square>,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    let mut diagonals = Vec::with_capacity(2);
    pawn_attacks(color, from, &mut diagonals);
    for to in diagonals {
        let enemy_there = matches!(board.piece_at(to), Some(piece) if piece.color != color);
        if enemy_there || en_passant_square == Some(to) {
            out.push(to);
        }
    }
}
