//! End-of-game classification for the side to move.

use serde::Serialize;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "winner")]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but can respond.
    Check,
    /// Side to move is in check with no legal move; payload is the winner.
    Checkmate(Color),
    /// Side to move is not in check and has no legal move.
    Stalemate,
    /// Side to move has no king on the board; payload is the winner.
    KingLost(Color),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate(_) | GameStatus::Stalemate | GameStatus::KingLost(_)
        )
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(winner) | GameStatus::KingLost(winner) => Some(winner),
            _ => None,
        }
    }
}

pub fn classify(position: &Position) -> GameStatus {
    let color = position.side_to_move;

    if position.board.king_square(color).is_none() {
        return GameStatus::KingLost(color.opposite());
    }

    let in_check = is_king_in_check(&position.board, color);
    let can_move = has_any_legal_move(position, color);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(color.opposite()),
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Ongoing,
    }
}
