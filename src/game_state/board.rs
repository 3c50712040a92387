//! Raw 8x8 placement with reversible move application.
//!
//! `Board` has no notion of legality. It knows how to relocate pieces, how to
//! recognise the two special move shapes (en passant and castling) and how to
//! reverse exactly one applied move from its [`UndoState`]. Castling
//! eligibility is approximated by six "has moved" flags rather than history.

use crate::game_state::chess_rules::{
    CastleSide, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;

/// Six monotonic "has moved" flags consulted only by castling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingFlags {
    pub white_king: bool,
    pub white_rook_a: bool,
    pub white_rook_h: bool,
    pub black_king: bool,
    pub black_rook_a: bool,
    pub black_rook_h: bool,
}

impl CastlingFlags {
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_rook_a,
            (Color::White, CastleSide::Kingside) => self.white_rook_h,
            (Color::Black, CastleSide::Queenside) => self.black_rook_a,
            (Color::Black, CastleSide::Kingside) => self.black_rook_h,
        }
    }

    pub fn set_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king = true,
            Color::Black => self.black_king = true,
        }
    }

    pub fn set_rook_moved(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_rook_a = true,
            (Color::White, CastleSide::Kingside) => self.white_rook_h = true,
            (Color::Black, CastleSide::Queenside) => self.black_rook_a = true,
            (Color::Black, CastleSide::Kingside) => self.black_rook_h = true,
        }
    }

    /// Record that `piece` left `from`. Rooks only count when leaving their
    /// own corner.
    fn note_departure(&mut self, from: Square, piece: Option<Piece>) {
        let Some(piece) = piece else {
            return;
        };
        match piece.kind {
            PieceKind::King => self.set_king_moved(piece.color),
            PieceKind::Rook if from.row() == piece.color.home_row() => match from.col() {
                QUEENSIDE_ROOK_COL => self.set_rook_moved(piece.color, CastleSide::Queenside),
                KINGSIDE_ROOK_COL => self.set_rook_moved(piece.color, CastleSide::Kingside),
                _ => {}
            },
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    pub flags: CastlingFlags,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces and all flags cleared.
    pub const fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            flags: CastlingFlags {
                white_king: false,
                white_rook_a: false,
                white_rook_h: false,
                black_king: false,
                black_rook_a: false,
                black_rook_h: false,
            },
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.grid[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            board.grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.grid[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Every piece of `color` with its square, in grid order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    fn move_raw(&mut self, from: Square, to: Square) {
        let piece = self.piece_at(from);
        self.set_piece(from, None);
        self.set_piece(to, piece);
    }

    /// Apply a move without any legality checks and return the record that
    /// reverses it.
    ///
    /// En passant is recognised first, then castling (a king leaving its home
    /// square two files sideways), then a plain relocation that captures
    /// whatever occupied `to`.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        en_passant_target: Option<Square>,
        turn: Color,
    ) -> UndoState {
        let moving_piece = self.piece_at(from);
        let captured_piece = self.piece_at(to);
        let prev_flags = self.flags;

        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        let kind = moving_piece.map(|piece| piece.kind);

        if kind == Some(PieceKind::Pawn)
            && en_passant_target == Some(to)
            && captured_piece.is_none()
            && d_row == turn.pawn_direction()
            && d_col.abs() == 1
        {
            // The double-stepped pawn sits beside the origin, behind the target.
            let captured_square = Square::from_parts(from.row(), to.col());
            let ep_captured = self.piece_at(captured_square);

            self.move_raw(from, to);
            self.set_piece(captured_square, None);
            self.flags.note_departure(from, moving_piece);

            return UndoState {
                from,
                to,
                captured_piece: None,
                prev_flags,
                shape: MoveShape::EnPassant {
                    captured_square,
                    captured_piece: ep_captured,
                },
            };
        }

        let from_king_home = moving_piece.is_some_and(|piece| {
            from.row() == piece.color.home_row() && from.col() == KING_HOME_COL
        });
        if kind == Some(PieceKind::King) && from_king_home && d_row == 0 && d_col.abs() == 2 {
            let side = CastleSide::from_delta(d_col);
            let row = from.row();
            let rook_from = Square::from_parts(row, side.rook_home_col());
            let rook_to = Square::from_parts(row, side.rook_target_col());
            let rook_piece = self.piece_at(rook_from);
            let displaced = self.piece_at(rook_to);

            self.move_raw(from, to);
            self.move_raw(rook_from, rook_to);
            self.flags.note_departure(from, moving_piece);
            self.flags.note_departure(rook_from, rook_piece);

            return UndoState {
                from,
                to,
                captured_piece,
                prev_flags,
                shape: MoveShape::Castling {
                    rook_from,
                    rook_to,
                    displaced,
                },
            };
        }

        self.move_raw(from, to);
        self.flags.note_departure(from, moving_piece);

        UndoState {
            from,
            to,
            captured_piece,
            prev_flags,
            shape: MoveShape::Plain,
        }
    }

    /// Exact inverse of the `make_move` call that produced `undo`.
    pub fn undo_move(&mut self, undo: &UndoState) {
        self.flags = undo.prev_flags;

        match undo.shape {
            MoveShape::EnPassant {
                captured_square,
                captured_piece,
            } => {
                self.move_raw(undo.to, undo.from);
                self.set_piece(captured_square, captured_piece);
            }
            MoveShape::Castling {
                rook_from,
                rook_to,
                displaced,
            } => {
                self.move_raw(rook_to, rook_from);
                self.set_piece(rook_to, displaced);
                self.move_raw(undo.to, undo.from);
                self.set_piece(undo.to, undo.captured_piece);
            }
            MoveShape::Plain => {
                let moved = self.piece_at(undo.to);
                self.set_piece(undo.to, undo.captured_piece);
                self.set_piece(undo.from, moved);
            }
        }
    }
}
