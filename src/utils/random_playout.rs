//! Seeded random playouts.
//!
//! Plays uniformly random legal moves from a starting game. Used to reach a
//! broad spread of positions for invariant checks and benchmarks; the same
//! seed always produces the same game.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 1234,
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub game: GameState,
    pub final_status: GameStatus,
}

pub fn random_playout(start: GameState, config: &PlayoutConfig) -> PlayoutResult {
    random_playout_with(start, config, |_| {})
}

/// Like `random_playout`, calling `inspect` on every position reached,
/// the start included.
pub fn random_playout_with<F>(
    start: GameState,
    config: &PlayoutConfig,
    mut inspect: F,
) -> PlayoutResult
where
    F: FnMut(&GameState),
{
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = start;

    inspect(&game);
    let mut status = classify(game.position());

    for _ in 0..config.max_plies {
        if status.is_terminal() {
            break;
        }
        let moves = generate_legal_moves(game.position());
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        if game.play(from, to).is_err() {
            break;
        }
        inspect(&game);
        status = classify(game.position());
    }

    PlayoutResult {
        game,
        final_status: status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_game() {
        let config = PlayoutConfig {
            seed: 7,
            max_plies: 40,
        };
        let a = random_playout(GameState::new_game(), &config);
        let b = random_playout(GameState::new_game(), &config);
        assert_eq!(a.game.history(), b.game.history());
        assert_eq!(a.final_status, b.final_status);
    }

    #[test]
    fn playout_respects_the_ply_limit() {
        let config = PlayoutConfig {
            seed: 99,
            max_plies: 10,
        };
        let mut seen = 0;
        let result = random_playout_with(GameState::new_game(), &config, |_| seen += 1);
        assert!(result.game.ply() <= 10);
        assert_eq!(seen, result.game.ply() + 1);
    }
}
