//! Plain-text move transcript for a finished or ongoing session.
//!
//! Lists the recorded move texts in numbered pairs under a short header that
//! carries the session start time and the current outcome.

use chrono::{DateTime, Local};

use crate::game_state::chess_types::*;

pub fn write_transcript(game: &GameState, started_at: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Game started {}\n",
        started_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Result: {}\n", outcome_text(game)));

    for (index, pair) in game.move_list().chunks(2).enumerate() {
        out.push_str(&format!("{}. {}", index + 1, pair[0]));
        if let Some(reply) = pair.get(1) {
            out.push(' ');
            out.push_str(reply);
        }
        out.push('\n');
    }

    out
}

fn outcome_text(game: &GameState) -> String {
    match game.phase() {
        GamePhase::GameOver(GameResult::Checkmate) => match game.winner() {
            Some(color) => format!("checkmate, {color} wins"),
            None => "checkmate".to_owned(),
        },
        GamePhase::GameOver(GameResult::Stalemate) => "stalemate".to_owned(),
        GamePhase::AwaitingPromotion(square) => format!("in progress (promotion on {square})"),
        GamePhase::Active => format!("in progress, {} to move", game.turn()),
    }
}
