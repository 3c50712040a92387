use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_arbiter::config::SessionConfig;
use chess_arbiter::game_state::chess_types::*;
use chess_arbiter::utils::algebraic::algebraic_to_square;
use chess_arbiter::utils::render_game_state::{render_game_state, render_with_highlights};
use chess_arbiter::utils::transcript::write_transcript;

const HELP: &str = "\
commands:
  e2e4 | e2 e4 | move e2 e4   move a piece
  promote <q|r|b|n>           finish a pending promotion
  hints <square>              show legal destinations
  board                       redraw the board
  moves                       list moves played so far
  transcript                  print the numbered transcript
  new                         start a new game
  quit                        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Move(String, String),
    Promote(String),
    Hints(String),
    Board,
    Moves,
    Transcript,
    New,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Unknown(String::new()),
        ["promote", letter] => Command::Promote((*letter).to_owned()),
        ["hints", square] => Command::Hints((*square).to_owned()),
        ["move", from, to] | [from, to] => Command::Move((*from).to_owned(), (*to).to_owned()),
        ["board"] => Command::Board,
        ["moves"] => Command::Moves,
        ["transcript"] => Command::Transcript,
        ["new"] => Command::New,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        [word] if word.len() == 4 && word.is_ascii() => {
            Command::Move(word[0..2].to_owned(), word[2..4].to_owned())
        }
        _ => Command::Unknown(line.trim().to_owned()),
    }
}

fn status_line(game: &GameState) -> String {
    let message = if game.last_message().is_empty() {
        "Ready."
    } else {
        game.last_message()
    };
    if game.is_game_over() {
        message.to_owned()
    } else {
        format!("Turn: {} | {}", game.turn(), message)
    }
}

fn main() {
    let config = SessionConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(?config, "session started");
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&config, stdin.lock(), &mut stdout.lock()) {
        error!(%err, "session aborted");
        std::process::exit(1);
    }
}

/// Drive one session from `input` until `quit` or end of input.
fn run<R: BufRead, W: Write>(config: &SessionConfig, input: R, out: &mut W) -> io::Result<()> {
    let mut game = GameState::new_game();
    let mut started_at = Local::now();

    writeln!(out, "{}\n{}", render_game_state(&game, config.board_style), status_line(&game))?;
    writeln!(out, "type `help` for commands")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Command::Move(from, to) => {
                let accepted = game.try_move_algebraic(&from, &to);
                writeln!(out, "{}", render_game_state(&game, config.board_style))?;
                if !accepted && config.show_hints {
                    if let Ok(square) = algebraic_to_square(&from) {
                        let targets = game.legal_destinations_from(square);
                        if !targets.is_empty() {
                            let listed: Vec<String> = targets.iter().map(Square::to_string).collect();
                            writeln!(out, "legal from {square}: {}", listed.join(" "))?;
                        }
                    }
                }
                if game.promotion_pending().is_some() {
                    writeln!(out, "choose promotion: promote q|r|b|n")?;
                }
            }
            Command::Promote(letter) => {
                let mut chars = letter.chars();
                let choice = match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch,
                    _ => '?',
                };
                game.promote(choice);
                writeln!(out, "{}", render_game_state(&game, config.board_style))?;
            }
            Command::Hints(square) => match algebraic_to_square(&square) {
                Ok(square) => {
                    let targets = game.legal_destinations_from(square);
                    writeln!(
                        out,
                        "{}",
                        render_with_highlights(&game, config.board_style, &targets)
                    )?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Board => writeln!(out, "{}", render_game_state(&game, config.board_style))?,
            Command::Moves => writeln!(out, "{}", game.move_list().join(" "))?,
            Command::Transcript => write!(out, "{}", write_transcript(&game, started_at))?,
            Command::New => {
                game.reset();
                started_at = Local::now();
                writeln!(out, "{}", render_game_state(&game, config.board_style))?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(text) => {
                if !text.is_empty() {
                    writeln!(out, "unknown command: {text} (try `help`)")?;
                }
                out.flush()?;
                continue;
            }
        }

        writeln!(out, "{}", status_line(&game))?;
        out.flush()?;
    }

    info!(moves = game.move_list().len(), result = ?game.result(), "session ended");
    Ok(())
}
