use crate::errors::RuleViolation;
use crate::game_state::chess_types::{Board, Square};
use crate::move_generation::legal_move_shared::slides_to;

/// Queen geometry is the union of rook and bishop geometry.
#[inline]
pub fn validate_queen_move(board: &Board, from: Square, to: Square) -> Result<(), RuleViolation> {
    if slides_to(board, from, to, true, true) {
        Ok(())
    } else {
        Err(RuleViolation::IllegalQueenMove)
    }
}
