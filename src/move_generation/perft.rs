//! Legal move tree node counting.
//!
//! Walks the game tree with make/unmake on a single position and tallies
//! leaf nodes plus a few move categories. The counts from the standard start
//! are well known and make a strong end-to-end check of move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Leaf count only.
pub fn perft(position: &Position, depth: u8) -> usize {
    perft_detailed(position, depth).nodes
}

pub fn perft_detailed(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = *position;
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

fn perft_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) {
    for (from, to) in generate_legal_moves(position) {
        let Ok(record) = make_move(position, from, to) else {
            continue;
        };

        if depth == 1 {
            counts.merge(leaf_counts(position, &record));
        } else {
            perft_recurse(position, depth - 1, counts);
        }

        unmake_move(position, &record);
    }
}

fn leaf_counts(position: &Position, record: &MoveRecord) -> PerftCounts {
    PerftCounts {
        nodes: 1,
        captures: usize::from(record.is_capture()),
        en_passant: usize::from(record.special == SpecialMove::EnPassant),
        castles: usize::from(matches!(record.special, SpecialMove::Castle(_))),
        promotions: usize::from(record.special == SpecialMove::Promotion),
        checks: usize::from(is_king_in_check(&position.board, position.side_to_move)),
    }
}
