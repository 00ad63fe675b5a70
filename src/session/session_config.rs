use serde::Deserialize;

/// Knobs a host UI can set when it opens a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Points credited to the winner of a decided game.
    pub points_for_win: u32,
    /// Consolation points credited to the loser.
    pub points_for_loss: u32,
    /// Start a fresh game as soon as one finishes. Off by default so the UI
    /// can show the final position and result first.
    pub reset_on_game_end: bool,
    pub record_events: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            points_for_win: 10,
            points_for_loss: 1,
            reset_on_game_end: false,
            record_events: true,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid session config: {e}"))
    }
}
