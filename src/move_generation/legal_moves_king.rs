//! Castling destinations for a king on its home square.

use crate::game_state::chess_rules::{king_home, CastleSide};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

pub fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<Square>) {
    let Some(king) = position.piece_at(king_from) else {
        return;
    };
    if king.kind != PieceKind::King {
        return;
    }

    let color = king.color;
    let enemy = color.opposite();
    let board = &position.board;

    if king_from != king_home(color) || position.castling_rights.side(color).king_moved {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    for side in CastleSide::BOTH {
        if !position.castling_rights.can_still_castle(color, side) {
            continue;
        }
        let rook_home = side.rook_home(color);
        if board.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let row = king_from.row();
        let path_clear = side
            .between_cols()
            .iter()
            .all(|&col| board.is_empty(Square::at(row, col)));
        if !path_clear {
            continue;
        }

        let passing = side.king_passing(color);
        let target = side.king_target(color);
        if is_square_attacked(board, passing, enemy) || is_square_attacked(board, target, enemy) {
            continue;
        }

        out.push(target);
    }
}
