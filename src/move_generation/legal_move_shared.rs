use crate::game_state::chess_types::*;

/// Signed grid displacement from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub d_row: i8,
    pub d_col: i8,
}

impl Delta {
    #[inline]
    pub fn between(from: Square, to: Square) -> Self {
        Self {
            d_row: to.row() as i8 - from.row() as i8,
            d_col: to.col() as i8 - from.col() as i8,
        }
    }

    #[inline]
    pub fn abs_row(self) -> i8 {
        self.d_row.abs()
    }

    #[inline]
    pub fn abs_col(self) -> i8 {
        self.d_col.abs()
    }

    /// Same row or same column, and not a null move.
    #[inline]
    pub fn is_straight(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    /// On one diagonal, and not a null move.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.abs_row() == self.abs_col() && self.d_row != 0
    }

    #[inline]
    pub fn is_knight_jump(self) -> bool {
        matches!((self.abs_row(), self.abs_col()), (1, 2) | (2, 1))
    }

    /// Chebyshev distance of exactly one.
    #[inline]
    pub fn is_adjacent(self) -> bool {
        self.abs_row().max(self.abs_col()) == 1
    }
}

/// True iff no piece stands strictly between `from` and `to`.
///
/// Steps along the unit direction vector, so callers must only pass squares
/// that share a row, column or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let delta = Delta::between(from, to);
    let step_row = delta.d_row.signum();
    let step_col = delta.d_col.signum();
    if step_row == 0 && step_col == 0 {
        return true;
    }

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }

    true
}

/// Straight or diagonal reach with nothing in the way.
#[inline]
pub fn slides_to(board: &Board, from: Square, to: Square, straight: bool, diagonal: bool) -> bool {
    let delta = Delta::between(from, to);
    let aligned = (straight && delta.is_straight()) || (diagonal && delta.is_diagonal());
    aligned && path_is_clear(board, from, to)
}
