use crate::errors::RuleViolation;
use crate::game_state::chess_types::{Board, Square};
use crate::move_generation::legal_move_shared::slides_to;

#[inline]
pub fn validate_bishop_move(board: &Board, from: Square, to: Square) -> Result<(), RuleViolation> {
    if slides_to(board, from, to, false, true) {
        Ok(())
    } else {
        Err(RuleViolation::IllegalBishopMove)
    }
}
