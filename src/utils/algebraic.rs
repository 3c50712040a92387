//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! grid indices used by the board (`row 0 == rank 8`).

use crate::errors::NotationError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let col = file - b'a';
    let row = 8 - (rank - b'0');
    Square::new(row, col).ok_or_else(|| NotationError::InvalidSquare(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = square.file();
    let rank_char = char::from(b'0' + square.rank());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::NotationError;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.row(), a1.col()), (7, 0));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.row(), h8.col()), (0, 7));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(h8), "h8");
    }

    #[test]
    fn uppercase_file_is_accepted() {
        let e2 = algebraic_to_square("E2").expect("E2 should parse");
        assert_eq!(square_to_algebraic(e2), "e2");
    }

    #[test]
    fn off_board_text_is_rejected() {
        for bad in ["i1", "a9", "a0", "e", "e44", "", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(NotationError::InvalidSquare(bad.to_owned())),
                "{bad} should be rejected"
            );
        }
    }
}
