//! Crate root module declarations for the chess arbiter.
//!
//! The crate is the rules authority for a two-player game of chess: raw board
//! storage with reversible moves (`game_state::board`), stateless rule queries
//! (`move_generation`), and the turn-taking state machine
//! (`game_state::game_state`). Utilities cover square notation, placement
//! parsing, rendering and transcripts for the interactive binary.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_notation;
    pub mod placement;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod transcript;
}

pub use crate::errors::{NotationError, RuleViolation};
pub use crate::game_state::chess_types::{
    Board, Color, GamePhase, GameResult, GameState, Piece, PieceKind, Square,
};
