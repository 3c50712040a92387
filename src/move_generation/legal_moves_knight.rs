use crate::errors::RuleViolation;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::Delta;

/// Knights jump, so nothing between the squares matters.
#[inline]
pub fn validate_knight_move(from: Square, to: Square) -> Result<(), RuleViolation> {
    if Delta::between(from, to).is_knight_jump() {
        Ok(())
    } else {
        Err(RuleViolation::IllegalKnightMove)
    }
}
