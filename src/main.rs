//! Two-player terminal front end.
//!
//! Run with:
//! `cargo run --release`
//! `cargo run --release -- --verbose` (print the event journal as JSON)

use std::io::{self, BufRead, Write};

use parlor_chess::move_generation::game_status::GameStatus;
use parlor_chess::session::game_events::ResultKind;
use parlor_chess::session::game_session::GameSession;
use parlor_chess::session::session_config::SessionConfig;
use parlor_chess::utils::algebraic::{algebraic_to_square, parse_move_text, square_to_algebraic};
use parlor_chess::utils::render_board::render_board;

const HELP: &str = "commands: e2e4 | moves e2 | undo | resign | reset | score | show | help | quit";

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let config = SessionConfig {
        reset_on_game_end: std::env::args().any(|a| a == "--reset-on-end"),
        ..SessionConfig::default()
    };

    let mut session = GameSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n{HELP}", render_board(&session.position().board));
    prompt(&session, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed reading stdin: {e}"))?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            prompt(&session, &mut stdout)?;
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "show" => println!("{}", render_board(&session.position().board)),
            "score" => {
                let scores = session.scores();
                println!("white {}  black {}", scores.white, scores.black);
            }
            "resign" => {
                if let Err(e) = session.resign(session.current_player()) {
                    println!("{e}");
                }
            }
            "reset" => {
                session.reset_game();
                println!("{}", render_board(&session.position().board));
            }
            "undo" => {
                if session.undo_last_move() {
                    println!("{}", render_board(&session.position().board));
                } else {
                    println!("nothing to undo");
                }
            }
            "moves" => match words.next().map(algebraic_to_square) {
                Some(Ok(square)) => {
                    let targets: Vec<String> = session
                        .legal_destinations(square)
                        .into_iter()
                        .map(square_to_algebraic)
                        .collect();
                    println!("{}", targets.join(" "));
                }
                Some(Err(e)) => println!("{e}"),
                None => println!("usage: moves e2"),
            },
            text => match parse_move_text(text) {
                Ok((from, to)) => {
                    let attempt = session.attempt_move(from, to);
                    if let Some(err) = attempt.rejection {
                        println!("rejected: {err}");
                    } else {
                        println!("{}", render_board(&session.position().board));
                        report_status(attempt.status);
                    }
                }
                Err(e) => println!("{e}\n{HELP}"),
            },
        }

        if let Some(result) = session.take_finished_game() {
            match result.result {
                ResultKind::Win(color) => println!("{color} wins"),
                ResultKind::Draw => println!("draw"),
            }
        }

        let events = session.drain_events();
        if verbose {
            for event in events {
                eprintln!("{}", event.to_json());
            }
        }

        prompt(&session, &mut stdout)?;
    }

    Ok(())
}

fn report_status(status: GameStatus) {
    match status {
        GameStatus::Check => println!("check"),
        GameStatus::Checkmate(winner) => println!("checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("stalemate"),
        GameStatus::KingLost(winner) => println!("king lost, {winner} wins"),
        GameStatus::Ongoing => {}
    }
}

fn prompt(session: &GameSession, stdout: &mut io::Stdout) -> Result<(), String> {
    print!("{} to move> ", session.current_player());
    stdout
        .flush()
        .map_err(|e| format!("failed flushing stdout: {e}"))
}
