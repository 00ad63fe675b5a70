//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type for rule-level operations. Every
//! variant describes an expected negative outcome of user input: the call
//! that produced it left the game untouched, so a UI can always recover by
//! re-prompting the player.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside `0..=7` on either axis.
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: i32, col: i32 },

    #[error("no piece on {0}")]
    NoPieceOnSquare(Square),

    /// The piece on the square belongs to the side that is not on move.
    #[error("piece on {0} does not belong to the side to move")]
    NotSideToMove(Square),

    /// The destination is not among the legal moves of the piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("no moves to undo")]
    EmptyHistory,

    #[error("game is already finished")]
    GameAlreadyFinished,
}
