//! Attack and check queries.
//!
//! These answer "could a piece of this color reach that square under its raw
//! movement rule" and never ask whether doing so would expose the attacker's
//! own king.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{slides_to, Delta};

#[inline]
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// Whether `attacker_piece` standing on `from` attacks `target`.
pub fn piece_attacks(board: &Board, from: Square, attacker_piece: Piece, target: Square) -> bool {
    let delta = Delta::between(from, target);
    match attacker_piece.kind {
        PieceKind::Pawn => {
            delta.d_row == attacker_piece.color.pawn_direction() && delta.abs_col() == 1
        }
        PieceKind::Knight => delta.is_knight_jump(),
        PieceKind::Bishop => slides_to(board, from, target, false, true),
        PieceKind::Rook => slides_to(board, from, target, true, false),
        PieceKind::Queen => slides_to(board, from, target, true, true),
        PieceKind::King => delta.is_adjacent(),
    }
}

pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(board, from, piece, target))
}

/// Attacked status of `color`'s king. A board without that king reports no
/// check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = find_king(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement::parse_placement;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn pawn_attacks_forward_diagonals_only() {
        let board = parse_placement("4k3/8/8/8/4P3/8/8/4K3").expect("placement should parse");
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));

        let board = parse_placement("4k3/8/8/4p3/8/8/8/4K3").expect("placement should parse");
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let board = parse_placement("4k3/8/8/8/8/5P2/8/R3K2B").expect("placement should parse");
        assert!(is_square_attacked(&board, sq("a8"), Color::White));
        assert!(is_square_attacked(&board, sq("d1"), Color::White));
        assert!(!is_square_attacked(&board, sq("g1"), Color::White));
        assert!(is_square_attacked(&board, sq("g2"), Color::White));
        assert!(!is_square_attacked(&board, sq("d5"), Color::White));
    }

    #[test]
    fn king_in_check_from_knight_and_missing_king() {
        let board = parse_placement("4k3/8/3N4/8/8/8/8/4K3").expect("placement should parse");
        assert!(is_king_in_check(&board, Color::Black));
        assert!(!is_king_in_check(&board, Color::White));

        let kingless = parse_placement("8/8/8/8/8/8/8/r7").expect("placement should parse");
        assert!(find_king(&kingless, Color::White).is_none());
        assert!(!is_king_in_check(&kingless, Color::White));
    }
}
