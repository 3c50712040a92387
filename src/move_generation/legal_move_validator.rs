//! Geometry-only legality.
//!
//! `legal_piece_move_only` decides whether a move is shaped correctly for the
//! piece being moved. It does not look at the mover's own king; the game
//! layer adds that check.

use crate::errors::RuleViolation;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::validate_bishop_move;
use crate::move_generation::legal_moves_king::validate_king_move;
use crate::move_generation::legal_moves_knight::validate_knight_move;
use crate::move_generation::legal_moves_pawn::validate_pawn_move;
use crate::move_generation::legal_moves_queen::validate_queen_move;
use crate::move_generation::legal_moves_rook::validate_rook_move;

pub fn legal_piece_move_only(
    board: &Board,
    from: Square,
    to: Square,
    turn: Color,
    en_passant_target: Option<Square>,
) -> Result<(), RuleViolation> {
    let moving_piece = board.piece_at(from).ok_or(RuleViolation::NoPieceOnOrigin)?;

    if moving_piece.color != turn {
        return Err(RuleViolation::WrongSideToMove(turn));
    }

    if let Some(target) = board.piece_at(to) {
        if target.color == turn {
            return Err(RuleViolation::SelfCapture);
        }
    }

    match moving_piece.kind {
        PieceKind::Pawn => validate_pawn_move(board, from, to, turn, en_passant_target),
        PieceKind::Knight => validate_knight_move(from, to),
        PieceKind::Bishop => validate_bishop_move(board, from, to),
        PieceKind::Rook => validate_rook_move(board, from, to),
        PieceKind::Queen => validate_queen_move(board, from, to),
        PieceKind::King => validate_king_move(board, from, to, turn),
    }
}
