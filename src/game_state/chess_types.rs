//! Core value types shared by every layer of the rules engine.
//!
//! Squares are stored as grid indices where row 0 is rank 8 and column 0 is
//! the a-file, which keeps the board array in the same order it is printed.

use std::fmt;
use std::str::FromStr;

use crate::errors::NotationError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::board::{Board, CastlingFlags};
pub use crate::game_state::game_state::{GamePhase, GameResult, GameState};
pub use crate::game_state::undo_state::{MoveShape, UndoState};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns promote on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used in placement strings.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// One of the twelve colored pieces. An empty square is `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let ch = self.kind.letter();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
    }
}

/// A board coordinate. Always on the board; construction from raw indices or
/// text is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build from grid indices (`row 0 == rank 8`, `col 0 == file a`).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Build from indices already known to be on the board.
    #[inline]
    pub(crate) const fn from_parts(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Build from signed indices, returning `None` when off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// All 64 squares in grid order (a8, b8, ... h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_grid_mapping_matches_ranks() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.rank(), 4);
        assert_eq!(e4.file(), 'e');

        let a8 = Square::new(0, 0).expect("a8 is on the board");
        assert_eq!(a8.to_string(), "a8");
        assert!(Square::new(8, 0).is_none());
    }

    #[test]
    fn offset_rejects_off_board() {
        let h1: Square = "h1".parse().expect("h1 should parse");
        assert!(h1.offset(1, 0).is_none());
        assert!(h1.offset(0, 1).is_none());
        assert_eq!(h1.offset(-1, -1).map(|s| s.to_string()), Some("g2".to_owned()));
    }

    #[test]
    fn all_squares_are_unique_and_complete() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }

    #[test]
    fn piece_chars_follow_case_convention() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(white_knight.to_char(), 'N');
        assert_eq!(Piece::from_char('q'), Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('.'), None);
    }
}
