//! Position and game history.
//!
//! `Position` is everything the rules need to generate moves: the board, the
//! side to move, castling flags and the en-passant target. It is `Copy`, so
//! legality checks can play a move out on a scratch copy.
//!
//! `GameState` wraps a position with the undo stack. All mutation goes
//! through `play` and `undo`, which keep the stack and the position in sync.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::default(),
            en_passant_square: None,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    position: Position,
    undo_stack: Vec<MoveRecord>,
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_position(Position::new_game())
    }

    #[inline]
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Apply a move already known to be legal and push its record.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessError> {
        let record = make_move(&mut self.position, from, to)?;
        self.undo_stack.push(record);
        Ok(record)
    }

    /// Pop and revert the last move. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.undo_stack.pop()?;
        unmake_move(&mut self.position, &record);
        Some(record)
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.undo_stack
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.undo_stack.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_on_fresh_game_is_none() {
        let mut game = GameState::new_game();
        assert!(game.undo().is_none());
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn play_then_undo_restores_the_position() {
        let mut game = GameState::new_game();
        let before = game.position;
        let from = Square::new(6, 4).expect("e2 should be valid");
        let to = Square::new(4, 4).expect("e4 should be valid");

        let record = game.play(from, to).expect("e2e4 should apply");
        assert_eq!(game.ply(), 1);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.last_move(), Some(&record));

        assert_eq!(game.undo(), Some(record));
        assert_eq!(game.position, before);
        assert!(game.history().is_empty());
    }
}
