//! Piece-placement parser for setting up positions.
//!
//! Reads the board field of FEN (eight `/`-separated rows, digits for runs of
//! empty squares) with the side to move supplied separately. The first row
//! written is row 0, black's back rank. Castling flags are derived from
//! whether each king and rook still stands on its home square; the
//! en-passant target starts empty.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, CastleSide};
use crate::game_state::chess_types::*;

pub fn parse_layout(layout: &str, side_to_move: Color) -> Result<Position, String> {
    let board = parse_board(layout)?;
    let mut castling_rights = CastlingRights::default();

    for color in [Color::White, Color::Black] {
        let rights = castling_rights.side_mut(color);
        let king = Some(Piece::new(PieceKind::King, color));
        rights.king_moved = board.piece_at(king_home(color)) != king;
        for side in CastleSide::BOTH {
            if board.piece_at(side.rook_home(color)) != Some(Piece::new(PieceKind::Rook, color)) {
                rights.mark_rook_moved(side);
            }
        }
    }

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        en_passant_square: None,
    })
}

fn parse_board(layout: &str) -> Result<Board, String> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(format!("Board layout must contain 8 rows, got {}", rows.len()));
    }

    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
            } else {
                let piece = piece_from_char(ch)?;
                if col >= 8 {
                    return Err(format!("Row {row} overflows the board: {row_str}"));
                }
                let square = Square::new(row as i32, col as i32).map_err(|e| e.to_string())?;
                board.set_piece(square, Some(piece));
                col += 1;
            }
        }

        if col != 8 {
            return Err(format!("Row {row} must describe 8 squares: {row_str}"));
        }
    }

    Ok(board)
}

pub fn piece_from_char(ch: char) -> Result<Piece, String> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(format!("Invalid piece character '{ch}'")),
    };
    Ok(Piece::new(kind, color))
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

/// Inverse of `parse_layout`'s board field.
pub fn board_to_layout(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for col in 0..8 {
            match board.piece_at(Square::at(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
    }
    out
}
