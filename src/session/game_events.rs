//! Structured journal of what happened in a session.
//!
//! Every accepted move, undo, reset and game result is appended as a
//! `GameEvent`. Events serialize to JSON so a host can forward them to its
//! own log or to the score collaborator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::MoveSummary;
use crate::move_generation::game_status::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Win(Color),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Checkmate,
    Stalemate,
    KingLost,
    Resignation,
}

/// Output event for a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub result: ResultKind,
    pub reason: FinishReason,
    pub plies: usize,
    pub finished_at: DateTime<Utc>,
}

impl GameResult {
    /// `None` for non-terminal statuses.
    pub fn from_status(status: GameStatus, plies: usize) -> Option<Self> {
        let (result, reason) = match status {
            GameStatus::Checkmate(winner) => (ResultKind::Win(winner), FinishReason::Checkmate),
            GameStatus::KingLost(winner) => (ResultKind::Win(winner), FinishReason::KingLost),
            GameStatus::Stalemate => (ResultKind::Draw, FinishReason::Stalemate),
            GameStatus::Ongoing | GameStatus::Check => return None,
        };
        Some(Self {
            result,
            reason,
            plies,
            finished_at: Utc::now(),
        })
    }

    /// `loser` gave up; the other side wins.
    pub fn resignation(loser: Color, plies: usize) -> Self {
        Self {
            result: ResultKind::Win(loser.opposite()),
            reason: FinishReason::Resignation,
            plies,
            finished_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    MovePlayed {
        #[serde(flatten)]
        summary: MoveSummary,
        status: GameStatus,
    },
    MoveUndone {
        from: Square,
        to: Square,
    },
    GameFinished(GameResult),
    /// An undo reopened a finished game and its points were taken back.
    ResultWithdrawn(GameResult),
    GameReset,
}

impl GameEvent {
    pub fn to_json(&self) -> String {
        // No maps with non-string keys, so serialization does not fail.
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}
