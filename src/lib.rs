//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes the rules subsystems (board and game state, per-piece
//! movement, legal move generation and game status), the UI-facing session
//! layer, and utility helpers so binaries, tests, and host applications can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shapes;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod perft;
}

pub mod session {
    pub mod game_events;
    pub mod game_session;
    pub mod score_tally;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_layout;
    pub mod random_playout;
    pub mod render_board;
}
