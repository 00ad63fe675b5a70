use serde::Serialize;

use crate::game_state::chess_types::Color;
use crate::session::game_events::{GameResult, ResultKind};
use crate::session::session_config::SessionConfig;

/// Running per-color score across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    pub white: u32,
    pub black: u32,
}

impl ScoreTally {
    #[inline]
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn get_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Credit a finished game. Draws score nothing. Totals saturate.
    pub fn record(&mut self, result: &GameResult, config: &SessionConfig) {
        if let ResultKind::Win(winner) = result.result {
            let won = self.get_mut(winner);
            *won = won.saturating_add(config.points_for_win);
            let lost = self.get_mut(winner.opposite());
            *lost = lost.saturating_add(config.points_for_loss);
        }
    }

    /// Withdraw a result previously passed to `record`.
    pub fn revoke(&mut self, result: &GameResult, config: &SessionConfig) {
        if let ResultKind::Win(winner) = result.result {
            let won = self.get_mut(winner);
            *won = won.saturating_sub(config.points_for_win);
            let lost = self.get_mut(winner.opposite());
            *lost = lost.saturating_sub(config.points_for_loss);
        }
    }
}
