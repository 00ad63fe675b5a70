//! Per-kind dispatch over the closed set of piece kinds.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Squares `piece` standing on `from` attacks. Never includes castling.
pub fn attack_targets(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, out),
        PieceKind::Knight => knight_targets(from, out),
        PieceKind::Bishop => bishop_targets(board, from, out),
        PieceKind::Rook => rook_targets(board, from, out),
        PieceKind::Queen => queen_targets(board, from, out),
        PieceKind::King => king_targets(from, out),
    }
}

/// Pseudo-legal destinations for the piece on `from`, castling excluded.
/// Squares holding a piece of the mover's own color are never returned.
pub fn piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<Square>,
) {
    if piece.kind == PieceKind::Pawn {
        pawn_moves(board, piece.color, from, en_passant_square, out);
        return;
    }

    let start = out.len();
    attack_targets(board, from, piece, out);
    let mut keep = start;
    for i in start..out.len() {
        let to = out[i];
        let own_piece = matches!(board.piece_at(to), Some(other) if other.color == piece.color);
        if !own_piece {
            out[keep] = to;
            keep += 1;
        }
    }
    out.truncate(keep);
}
