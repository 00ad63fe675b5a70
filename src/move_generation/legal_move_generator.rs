//! Full legal move generation pipeline.
//!
//! Gathers pseudo-legal destinations per piece, plays each candidate out on a
//! scratch copy of the position with the real executor, and drops those that
//! leave the mover's own king attacked. Running the full make step catches
//! pins, discovered checks through an en-passant capture and king steps along
//! a checking ray.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::moves::piece_moves::piece_moves;

/// Pseudo-legal destinations for the piece on `from`, including castling.
///
/// The en-passant target only applies to pawns of the side to move: it is
/// the reply to the opponent's double push.
pub fn pseudo_moves(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };

    let en_passant = if piece.color == position.side_to_move {
        position.en_passant_square
    } else {
        None
    };

    let mut out = Vec::with_capacity(28);
    piece_moves(&position.board, from, piece, en_passant, &mut out);
    if piece.kind == PieceKind::King {
        generate_castling_moves(position, from, &mut out);
    }
    out
}

/// Legal destinations for the piece on `from`. Empty for an empty square.
pub fn legal_moves(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };

    pseudo_moves(position, from)
        .into_iter()
        .filter(|&to| is_legal_destination(position, from, to, piece))
        .collect()
}

fn is_legal_destination(position: &Position, from: Square, to: Square, piece: Piece) -> bool {
    match position.piece_at(to) {
        Some(occupant) if occupant.color == piece.color => return false,
        Some(occupant) if occupant.kind == PieceKind::King => return false,
        _ => {}
    }

    let mut scratch = *position;
    match make_move(&mut scratch, from, to) {
        Ok(_) => !is_king_in_check(&scratch.board, piece.color),
        Err(_) => false,
    }
}

/// Every legal `(from, to)` pair for the side to move.
pub fn generate_legal_moves(position: &Position) -> Vec<(Square, Square)> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in position.board.squares_of(position.side_to_move) {
        out.extend(legal_moves(position, from).into_iter().map(|to| (from, to)));
    }
    out
}

pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .board
        .squares_of(color)
        .any(|(from, _)| !legal_moves(position, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_layout::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be valid")
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let position = Position::new_game();
        assert_eq!(generate_legal_moves(&position).len(), 20);
        assert!(has_any_legal_move(&position, Color::White));
    }

    #[test]
    fn pinned_knight_cannot_move() {
        // Knight on e2 is pinned against the king on e1 by the rook on e8.
        let position = parse_layout("4r2k/8/8/8/8/8/4N3/4K3", Color::White)
            .expect("layout should parse");
        assert!(legal_moves(&position, sq(6, 4)).is_empty());
        assert!(!pseudo_moves(&position, sq(6, 4)).is_empty());
    }

    #[test]
    fn king_cannot_step_along_the_checking_ray() {
        let position = parse_layout("4r2k/8/8/8/8/8/8/4K3", Color::White)
            .expect("layout should parse");
        let moves = legal_moves(&position, sq(7, 4));
        assert!(!moves.contains(&sq(6, 4)));
        assert!(moves.contains(&sq(7, 3)));
        assert!(moves.contains(&sq(6, 5)));
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let position = parse_layout("7k/8/8/8/8/8/3r4/3qK3", Color::White)
            .expect("layout should parse");
        let moves = legal_moves(&position, sq(7, 4));
        assert!(!moves.contains(&sq(7, 3)));
        assert!(!moves.contains(&sq(6, 3)));
    }

    #[test]
    fn en_passant_exposing_the_king_on_the_rank_is_illegal() {
        let mut position = parse_layout("8/8/8/K2pP2r/8/8/8/7k", Color::White)
            .expect("layout should parse");
        position.en_passant_square = Some(sq(2, 3));
        let moves = legal_moves(&position, sq(3, 4));
        assert!(!moves.contains(&sq(2, 3)));
        assert!(moves.contains(&sq(2, 4)));
    }

    #[test]
    fn opponent_king_is_never_a_destination() {
        let position = parse_layout("4k3/8/8/8/8/8/8/4RK2", Color::White)
            .expect("layout should parse");
        assert!(!legal_moves(&position, sq(7, 4)).contains(&sq(0, 4)));
    }

    #[test]
    fn en_passant_target_is_ignored_for_the_side_that_pushed() {
        let mut position = Position::new_game();
        make_move(&mut position, sq(6, 4), sq(4, 4)).expect("e2e4 should apply");
        // White's d2 and f2 pawns must not see e3 as a capture.
        assert_eq!(legal_moves(&position, sq(6, 3)), vec![sq(5, 3), sq(4, 3)]);
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(legal_moves(&Position::new_game(), sq(4, 4)).is_empty());
    }
}
