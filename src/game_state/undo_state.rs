use crate::game_state::board::CastlingFlags;
use crate::game_state::chess_types::*;

/// Extra data for the one special shape a move may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveShape {
    Plain,
    Castling {
        rook_from: Square,
        rook_to: Square,
        /// Whatever stood on `rook_to` before; empty for any legal castle.
        displaced: Option<Piece>,
    },
    EnPassant {
        captured_square: Square,
        captured_piece: Option<Piece>,
    },
}

/// Single undo record for `Board::make_move` / `Board::undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    /// Whatever stood on `to` before the move.
    pub captured_piece: Option<Piece>,
    pub prev_flags: CastlingFlags,
    pub shape: MoveShape,
}

impl UndoState {
    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self.shape, MoveShape::Castling { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.shape, MoveShape::EnPassant { .. })
    }

    /// True when the move removed an enemy piece, en passant included.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some() || self.is_en_passant()
    }
}
