//! Session settings read from the environment.
//!
//! | variable                     | values              | default   |
//! |------------------------------|---------------------|-----------|
//! | `CHESS_ARBITER_BOARD_STYLE`  | `unicode`, `ascii`  | `unicode` |
//! | `CHESS_ARBITER_SHOW_HINTS`   | `true`/`false`/1/0  | `true`    |
//! | `CHESS_ARBITER_LOG`          | tracing filter      | `warn`    |
//!
//! Unrecognised values fall back to the default and are reported.

use tracing::warn;

use crate::utils::render_game_state::BoardStyle;

pub const BOARD_STYLE_VAR: &str = "CHESS_ARBITER_BOARD_STYLE";
pub const SHOW_HINTS_VAR: &str = "CHESS_ARBITER_SHOW_HINTS";
pub const LOG_FILTER_VAR: &str = "CHESS_ARBITER_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub board_style: BoardStyle,
    /// Print legal destinations after `hints`/a rejected move.
    pub show_hints: bool,
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_style: BoardStyle::Unicode,
            show_hints: true,
            log_filter: "warn".to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BOARD_STYLE_VAR) {
            match parse_board_style(&value) {
                Some(style) => config.board_style = style,
                None => warn!(%value, "unknown {BOARD_STYLE_VAR}; using unicode"),
            }
        }

        if let Some(value) = lookup(SHOW_HINTS_VAR) {
            match parse_bool(&value) {
                Some(flag) => config.show_hints = flag,
                None => warn!(%value, "unknown {SHOW_HINTS_VAR}; hints stay enabled"),
            }
        }

        if let Some(value) = lookup(LOG_FILTER_VAR) {
            if !value.trim().is_empty() {
                config.log_filter = value.trim().to_owned();
            }
        }

        config
    }
}

fn parse_board_style(value: &str) -> Option<BoardStyle> {
    match value.trim().to_ascii_lowercase().as_str() {
        "unicode" => Some(BoardStyle::Unicode),
        "ascii" => Some(BoardStyle::Ascii),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
