//! Move-list text.
//!
//! Quiet moves read `e2→e4`, captures (en passant included) read `e4×d5`,
//! castling reads `O-O` / `O-O-O`, and a resolved promotion appends `=Q`.

use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::Delta;

pub const QUIET_ARROW: char = '→';
pub const CAPTURE_ARROW: char = '×';

/// Text for a move that was just applied and produced `undo`.
pub fn format_move_text(undo: &UndoState) -> String {
    if undo.is_castling() {
        let side = CastleSide::from_delta(Delta::between(undo.from, undo.to).d_col);
        return side.notation().to_owned();
    }

    let arrow = if undo.is_capture() {
        CAPTURE_ARROW
    } else {
        QUIET_ARROW
    };
    format!("{}{}{}", undo.from, arrow, undo.to)
}

/// Marker appended while the promotion piece is still undecided.
#[inline]
pub fn pending_promotion_text(move_text: &str) -> String {
    format!("{move_text}=")
}

/// Complete a pending promotion text with the chosen piece letter.
#[inline]
pub fn finish_promotion_text(pending: &str, kind: PieceKind) -> String {
    format!("{pending}{}", kind.letter().to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement::parse_placement;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn quiet_capture_and_castle_texts() {
        let mut board = parse_placement("r3k2r/8/8/3p4/4P3/8/8/R3K2R").expect("placement should parse");

        let undo = board.make_move(sq("e1"), sq("c1"), None, Color::White);
        assert_eq!(format_move_text(&undo), "O-O-O");
        board.undo_move(&undo);

        let undo = board.make_move(sq("e8"), sq("g8"), None, Color::Black);
        assert_eq!(format_move_text(&undo), "O-O");
        board.undo_move(&undo);

        let undo = board.make_move(sq("e4"), sq("d5"), None, Color::White);
        assert_eq!(format_move_text(&undo), "e4×d5");
        board.undo_move(&undo);

        let undo = board.make_move(sq("e4"), sq("e5"), None, Color::White);
        assert_eq!(format_move_text(&undo), "e4→e5");
    }

    #[test]
    fn en_passant_reads_as_capture() {
        let mut board = parse_placement("4k3/8/8/3pP3/8/8/8/4K3").expect("placement should parse");
        let undo = board.make_move(sq("e5"), sq("d6"), Some(sq("d6")), Color::White);
        assert_eq!(format_move_text(&undo), "e5×d6");
    }

    #[test]
    fn promotion_suffix_is_uppercase() {
        let pending = pending_promotion_text("e7→e8");
        assert_eq!(pending, "e7→e8=");
        assert_eq!(finish_promotion_text(&pending, PieceKind::Knight), "e7→e8=N");
    }
}
