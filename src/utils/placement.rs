//! Piece-placement parser.
//!
//! Reads the board field of a Forsyth-Edwards string (rank 8 first, digits
//! for runs of empty squares) into a [`Board`]. Castling flags are derived
//! from the layout: a king or rook that is not on its home square is treated
//! as having moved.

use crate::errors::NotationError;
use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidEmptyCount(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_char(ch).ok_or(NotationError::InvalidPieceChar(ch))?;
            if col >= 8 {
                return Err(NotationError::WrongFileCount(8 - row));
            }

            board.set_piece(Square::from_parts(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(NotationError::WrongFileCount(8 - row));
        }
    }

    board.flags = derive_castling_flags(&board);
    Ok(board)
}

/// Mark kings and rooks that are away from their home squares as moved.
fn derive_castling_flags(board: &Board) -> CastlingFlags {
    let mut flags = CastlingFlags::default();

    for color in [Color::White, Color::Black] {
        let row = color.home_row();
        let king_home = Square::from_parts(row, KING_HOME_COL);
        if board.piece_at(king_home) != Some(Piece::new(color, PieceKind::King)) {
            flags.set_king_moved(color);
        }

        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let rook_home = Square::from_parts(row, side.rook_home_col());
            if board.piece_at(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
                flags.set_rook_moved(color, side);
            }
        }
    }

    flags
}

/// Write the board back out in placement form.
pub fn placement_string(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match board.piece_at(Square::from_parts(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
