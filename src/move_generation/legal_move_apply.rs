//! Make/unmake for the mailbox position.
//!
//! `make_move` only checks that the from-square holds a piece; the
//! destination must come from `legal_moves`. The returned record holds
//! everything `unmake_move` needs to put the position back exactly: the
//! castling rook relocation, the en-passant victim's square and the
//! pre-promotion pawn.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{promotion_row, CastleSide};
use crate::game_state::chess_types::*;

pub fn make_move(
    position: &mut Position,
    from: Square,
    to: Square,
) -> Result<MoveRecord, ChessError> {
    let prev_castling_rights = position.castling_rights;
    let prev_en_passant_square = position.en_passant_square;

    let moved_piece = position
        .board
        .take_piece(from)
        .ok_or(ChessError::NoPieceOnSquare(from))?;
    let color = moved_piece.color;
    let mut special = SpecialMove::None;

    if moved_piece.kind == PieceKind::King {
        position.castling_rights.side_mut(color).king_moved = true;

        if from.col().abs_diff(to.col()) == 2 {
            if let Some(side) = CastleSide::from_king_target_col(to.col()) {
                let rook = position.board.take_piece(side.rook_home(color));
                position.board.set_piece(side.king_passing(color), rook);
                position.castling_rights.side_mut(color).mark_rook_moved(side);
                special = SpecialMove::Castle(side);
            }
        }
    }

    if moved_piece.kind == PieceKind::Rook {
        for side in CastleSide::BOTH {
            if from == side.rook_home(color) {
                position.castling_rights.side_mut(color).mark_rook_moved(side);
            }
        }
    }

    let mut captured = None;
    if moved_piece.kind == PieceKind::Pawn
        && position.en_passant_square == Some(to)
        && from.col() != to.col()
        && position.board.is_empty(to)
    {
        let victim_square = Square::at(from.row(), to.col());
        captured = position
            .board
            .take_piece(victim_square)
            .map(|victim| (victim, victim_square));
        special = SpecialMove::EnPassant;
    }

    if let Some(victim) = position.board.set_piece(to, Some(moved_piece)) {
        captured = Some((victim, to));
        // A rook captured at home can never castle again.
        if victim.kind == PieceKind::Rook {
            for side in CastleSide::BOTH {
                if to == side.rook_home(victim.color) {
                    position
                        .castling_rights
                        .side_mut(victim.color)
                        .mark_rook_moved(side);
                }
            }
        }
    }

    if moved_piece.kind == PieceKind::Pawn && to.row() == promotion_row(color) {
        position
            .board
            .set_piece(to, Some(Piece::new(PieceKind::Queen, color)));
        special = SpecialMove::Promotion;
    }

    position.en_passant_square = None;
    if moved_piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        position.en_passant_square = Some(Square::at((from.row() + to.row()) / 2, from.col()));
        special = SpecialMove::DoublePawnPush;
    }

    position.side_to_move = color.opposite();

    Ok(MoveRecord {
        from,
        to,
        moved_piece,
        captured,
        special,
        prev_castling_rights,
        prev_en_passant_square,
    })
}

pub fn unmake_move(position: &mut Position, record: &MoveRecord) {
    let color = record.moved_piece.color;

    position.board.take_piece(record.to);
    position.board.set_piece(record.from, Some(record.moved_piece));

    if let Some((victim, square)) = record.captured {
        position.board.set_piece(square, Some(victim));
    }

    if let SpecialMove::Castle(side) = record.special {
        let rook = position.board.take_piece(side.king_passing(color));
        position.board.set_piece(side.rook_home(color), rook);
    }

    position.castling_rights = record.prev_castling_rights;
    position.en_passant_square = record.prev_en_passant_square;
    position.side_to_move = color;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_layout::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be valid")
    }

    fn assert_round_trip(mut position: Position, from: Square, to: Square) -> MoveRecord {
        let before = position;
        let record = make_move(&mut position, from, to).expect("move should apply");
        assert_ne!(position, before);
        unmake_move(&mut position, &record);
        assert_eq!(position, before);
        record
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut position = Position::new_game();
        let record = make_move(&mut position, sq(6, 4), sq(4, 4)).expect("move should apply");
        assert_eq!(record.special, SpecialMove::DoublePawnPush);
        assert_eq!(position.en_passant_square, Some(sq(5, 4)));
        assert_eq!(position.side_to_move, Color::Black);

        make_move(&mut position, sq(0, 6), sq(2, 5)).expect("move should apply");
        assert_eq!(position.en_passant_square, None);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut position = parse_layout("4k3/8/8/3pP3/8/8/8/4K3", Color::White)
            .expect("layout should parse");
        position.en_passant_square = Some(sq(2, 3));

        let record = make_move(&mut position, sq(3, 4), sq(2, 3)).expect("move should apply");

        assert_eq!(record.special, SpecialMove::EnPassant);
        assert_eq!(
            record.captured,
            Some((Piece::new(PieceKind::Pawn, Color::Black), sq(3, 3)))
        );
        assert!(position.board.is_empty(sq(3, 3)));
        assert_eq!(
            position.piece_at(sq(2, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn en_passant_round_trip_restores_victim_square() {
        let mut position = parse_layout("4k3/8/8/3pP3/8/8/8/4K3", Color::White)
            .expect("layout should parse");
        position.en_passant_square = Some(sq(2, 3));
        assert_round_trip(position, sq(3, 4), sq(2, 3));
    }

    #[test]
    fn kingside_castle_moves_rook_and_marks_flags() {
        let position = parse_layout("r3k2r/8/8/8/8/8/8/R3K2R", Color::White)
            .expect("layout should parse");
        let mut after = position;
        let record = make_move(&mut after, sq(7, 4), sq(7, 6)).expect("move should apply");

        assert_eq!(record.special, SpecialMove::Castle(CastleSide::Kingside));
        assert_eq!(
            after.piece_at(sq(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(after.board.is_empty(sq(7, 7)));

        let white = after.castling_rights.side(Color::White);
        assert!(white.king_moved);
        assert!(white.kingside_rook_moved);
        assert!(!white.queenside_rook_moved);
        assert_eq!(
            *after.castling_rights.side(Color::Black),
            SideCastlingRights::default()
        );

        assert_round_trip(position, sq(7, 4), sq(7, 6));
    }

    #[test]
    fn queenside_castle_round_trip() {
        let position = parse_layout("r3k2r/8/8/8/8/8/8/R3K2R", Color::Black)
            .expect("layout should parse");
        let record = assert_round_trip(position, sq(0, 4), sq(0, 2));
        assert_eq!(record.special, SpecialMove::Castle(CastleSide::Queenside));
    }

    #[test]
    fn promotion_makes_a_queen_and_unmake_restores_the_pawn() {
        let position = parse_layout("1n2k3/P7/8/8/8/8/8/4K3", Color::White)
            .expect("layout should parse");
        let mut after = position;
        let record = make_move(&mut after, sq(1, 0), sq(0, 1)).expect("move should apply");

        assert_eq!(record.special, SpecialMove::Promotion);
        assert_eq!(
            after.piece_at(sq(0, 1)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(record.moved_piece.kind, PieceKind::Pawn);

        assert_round_trip(position, sq(1, 0), sq(0, 1));
        assert_round_trip(position, sq(1, 0), sq(0, 0));
    }

    #[test]
    fn empty_from_square_is_rejected_without_change() {
        let mut position = Position::new_game();
        let before = position;
        assert_eq!(
            make_move(&mut position, sq(4, 4), sq(3, 4)),
            Err(ChessError::NoPieceOnSquare(sq(4, 4)))
        );
        assert_eq!(position, before);
    }

    #[test]
    fn rook_leaving_home_marks_only_its_side() {
        let mut position = parse_layout("4k3/8/8/8/8/8/8/R3K2R", Color::White)
            .expect("layout should parse");
        make_move(&mut position, sq(7, 0), sq(4, 0)).expect("move should apply");
        let white = position.castling_rights.side(Color::White);
        assert!(white.queenside_rook_moved);
        assert!(!white.kingside_rook_moved);
        assert!(!white.king_moved);
    }

    #[test]
    fn capturing_a_home_rook_marks_its_flag() {
        let mut position = parse_layout("r3k3/8/8/8/8/8/8/R3K3", Color::White)
            .expect("layout should parse");
        let record = make_move(&mut position, sq(7, 0), sq(0, 0)).expect("move should apply");
        assert_eq!(
            record.captured_piece(),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(position.castling_rights.side(Color::Black).queenside_rook_moved);
    }
}
