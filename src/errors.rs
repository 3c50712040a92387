//! Errors used throughout the rules engine.
//!
//! Rule rejections are ordinary values: every illegal attempt maps to one
//! `RuleViolation` variant whose `Display` text doubles as the status message
//! shown to players. Nothing here is fatal to a session.
//!
//! `NotationError` covers text that could not be turned into a square or a
//! board placement.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Reason a move, castling attempt or promotion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("No piece on the from-square")]
    NoPieceOnOrigin,

    #[error("It's {}'s turn", lower_name(.0))]
    WrongSideToMove(Color),

    #[error("Can't capture your own piece")]
    SelfCapture,

    #[error("Pawn is blocked")]
    PawnBlocked,

    #[error("Illegal pawn move")]
    IllegalPawnMove,

    #[error("Pawn capture requires an opponent piece")]
    PawnCaptureNeedsTarget,

    #[error("Illegal knight move")]
    IllegalKnightMove,

    #[error("Illegal bishop move or path blocked")]
    IllegalBishopMove,

    #[error("Illegal rook move or path blocked")]
    IllegalRookMove,

    #[error("Illegal queen move or path blocked")]
    IllegalQueenMove,

    #[error("Illegal king move")]
    IllegalKingMove,

    #[error("Illegal: you can't leave your king in check.")]
    LeavesKingInCheck,

    /// The king is not on its home square for this color.
    #[error("Castling: king must start on {0}")]
    CastlingWrongOrigin(&'static str),

    #[error("Castling: king already moved")]
    CastlingKingMoved,

    #[error("Not a castling move")]
    NotACastlingMove,

    #[error("Castling: king is currently in check")]
    CastlingOutOfCheck,

    #[error("Castling: rook already moved")]
    CastlingRookMoved,

    #[error("Castling: rook is missing")]
    CastlingRookMissing,

    #[error("Castling: squares between are not empty")]
    CastlingPathBlocked,

    #[error("Castling: king would pass through/into check")]
    CastlingThroughCheck,

    #[error("Game over. Press New Game.")]
    GameOver,

    #[error("Promotion required.")]
    PromotionPending,

    #[error("No promotion pending.")]
    NoPromotionPending,

    #[error("Invalid promotion piece.")]
    InvalidPromotionPiece,

    #[error("Promotion error (no pawn).")]
    PromotionPawnMissing,
}

fn lower_name(color: &Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Text that could not be interpreted as a square or a board layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("Invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("Invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    #[error("Board layout must contain 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("Board rank {0} does not sum to 8 files")]
    WrongFileCount(usize),
}
