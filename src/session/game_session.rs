//! UI-facing game session.
//!
//! `GameSession` is the single mutable aggregate a host holds per game
//! window. It validates input against the rules, drives the executor,
//! classifies the result of every move and reports finished games to the
//! score collaborator. Rejected input never changes state.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::session::game_events::{GameEvent, GameResult, ResultKind};
use crate::session::score_tally::ScoreTally;
use crate::session::session_config::SessionConfig;

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub status: GameStatus,
    pub winner: Option<Color>,
}

/// Flat answer to `attempt_move` for callers that do not want a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempt {
    pub accepted: bool,
    /// Status after the move, or the unchanged status when rejected.
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub rejection: Option<ChessError>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    game: GameState,
    status: GameStatus,
    scores: ScoreTally,
    events: Vec<GameEvent>,
    /// Result credited to the tally for the game in progress, if it ended.
    result: Option<GameResult>,
    /// Result not yet collected by `take_finished_game`.
    finished: Option<GameResult>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_position(Position::new_game(), config)
    }

    /// Open a session on a set-up position. The status is classified
    /// immediately, so a position that is already mate reports it.
    pub fn from_position(position: Position, config: SessionConfig) -> Self {
        Self {
            config,
            status: classify(&position),
            game: GameState::from_position(position),
            scores: ScoreTally::default(),
            events: Vec::new(),
            result: None,
            finished: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn position(&self) -> &Position {
        self.game.position()
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.game.side_to_move()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True after checkmate, stalemate, a lost king or a resignation.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some() || self.status.is_terminal()
    }

    /// Winner of the current game, by mate or by resignation.
    pub fn winner(&self) -> Option<Color> {
        match &self.result {
            Some(GameResult {
                result: ResultKind::Win(color),
                ..
            }) => Some(*color),
            Some(_) => None,
            None => self.status.winner(),
        }
    }

    #[inline]
    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    #[inline]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand the most recent finished game to the score collaborator.
    pub fn take_finished_game(&mut self) -> Option<GameResult> {
        self.finished.take()
    }

    /// Destinations to highlight for the piece on `square`. Empty for empty
    /// squares, for the side not on move, and once the game has finished.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        match self.position().piece_at(square) {
            Some(piece) if piece.color == self.current_player() => {
                legal_moves(self.position(), square)
            }
            _ => Vec::new(),
        }
    }

    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessError> {
        if self.is_over() {
            return Err(ChessError::GameAlreadyFinished);
        }

        let piece = self
            .position()
            .piece_at(from)
            .ok_or(ChessError::NoPieceOnSquare(from))?;
        if piece.color != self.current_player() {
            return Err(ChessError::NotSideToMove(from));
        }
        if !legal_moves(self.position(), from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let record = self.game.play(from, to)?;
        let status = classify(self.position());
        self.status = status;
        self.record_event(GameEvent::MovePlayed {
            summary: (&record).into(),
            status,
        });

        if let Some(result) = GameResult::from_status(status, self.game.ply()) {
            self.finish(result);
        }

        Ok(MoveOutcome {
            record,
            status,
            winner: status.winner(),
        })
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveAttempt {
        match self.try_move(from, to) {
            Ok(outcome) => MoveAttempt {
                accepted: true,
                status: outcome.status,
                winner: outcome.winner,
                rejection: None,
            },
            Err(err) => self.rejected(err),
        }
    }

    /// `attempt_move` for raw `(row, col)` pairs straight from the UI.
    pub fn attempt_move_coords(&mut self, from: (i32, i32), to: (i32, i32)) -> MoveAttempt {
        match (Square::try_from(from), Square::try_from(to)) {
            (Ok(from), Ok(to)) => self.attempt_move(from, to),
            (Err(err), _) | (_, Err(err)) => self.rejected(err),
        }
    }

    fn rejected(&self, err: ChessError) -> MoveAttempt {
        MoveAttempt {
            accepted: false,
            status: self.status,
            winner: self.winner(),
            rejection: Some(err),
        }
    }

    /// Take back the last move. Undoing out of a finished game reopens it
    /// and withdraws the points its result earned.
    pub fn try_undo(&mut self) -> Result<MoveRecord, ChessError> {
        let record = self.game.undo().ok_or(ChessError::EmptyHistory)?;
        self.status = classify(self.position());
        self.record_event(GameEvent::MoveUndone {
            from: record.from,
            to: record.to,
        });

        if let Some(result) = self.result.take() {
            self.scores.revoke(&result, &self.config);
            self.finished = None;
            self.record_event(GameEvent::ResultWithdrawn(result));
        }
        Ok(record)
    }

    /// `try_undo` for callers that only need to know whether it happened.
    pub fn undo_last_move(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// `color` concedes; the opponent is credited with the win.
    pub fn resign(&mut self, color: Color) -> Result<GameResult, ChessError> {
        if self.is_over() {
            return Err(ChessError::GameAlreadyFinished);
        }
        let result = GameResult::resignation(color, self.game.ply());
        self.finish(result.clone());
        Ok(result)
    }

    /// Start a new game from the standard position. Scores are kept.
    pub fn reset_game(&mut self) {
        self.game = GameState::new_game();
        self.result = None;
        self.status = classify(self.position());
        self.record_event(GameEvent::GameReset);
    }

    fn finish(&mut self, result: GameResult) {
        self.scores.record(&result, &self.config);
        self.record_event(GameEvent::GameFinished(result.clone()));
        self.result = Some(result.clone());
        self.finished = Some(result);

        if self.config.reset_on_game_end {
            self.reset_game();
        }
    }

    fn record_event(&mut self, event: GameEvent) {
        if self.config.record_events {
            self.events.push(event);
        }
    }
}
