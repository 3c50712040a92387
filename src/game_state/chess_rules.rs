//! Canonical chess-rule constants.
//!
//! Start placement, home squares used for castling eligibility, and the
//! letters accepted when resolving a promotion.

use crate::game_state::chess_types::PieceKind;

/// Standard starting placement, rank 8 first (board field of a FEN string).
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Column of the king at the start of the game.
pub const KING_HOME_COL: u8 = 4;
/// Column of the queenside rook at the start of the game.
pub const QUEENSIDE_ROOK_COL: u8 = 0;
/// Column of the kingside rook at the start of the game.
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Landing column of the rook after kingside castling.
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
/// Landing column of the rook after queenside castling.
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

/// Columns that must be empty between king and rook.
pub const KINGSIDE_BETWEEN_COLS: &[u8] = &[5, 6];
pub const QUEENSIDE_BETWEEN_COLS: &[u8] = &[1, 2, 3];

/// Columns the king crosses or lands on; these must not be attacked.
pub const KINGSIDE_TRANSIT_COLS: &[u8] = &[5, 6];
pub const QUEENSIDE_TRANSIT_COLS: &[u8] = &[3, 2];

/// Pieces a pawn may promote to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Map a promotion letter (`q`, `r`, `b`, `n`, either case) to a piece kind.
pub fn promotion_kind_from_letter(letter: char) -> Option<PieceKind> {
    match PieceKind::from_letter(letter) {
        Some(kind) if PROMOTION_KINDS.contains(&kind) => Some(kind),
        _ => None,
    }
}

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Pick the side from the king's column delta; only the sign matters.
    pub fn from_delta(d_col: i8) -> Self {
        if d_col > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }

    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_TARGET_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_TARGET_COL,
        }
    }

    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => KINGSIDE_BETWEEN_COLS,
            CastleSide::Queenside => QUEENSIDE_BETWEEN_COLS,
        }
    }

    pub const fn transit_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => KINGSIDE_TRANSIT_COLS,
            CastleSide::Queenside => QUEENSIDE_TRANSIT_COLS,
        }
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_letters_are_case_insensitive() {
        assert_eq!(promotion_kind_from_letter('Q'), Some(PieceKind::Queen));
        assert_eq!(promotion_kind_from_letter('n'), Some(PieceKind::Knight));
        assert_eq!(promotion_kind_from_letter('k'), None);
        assert_eq!(promotion_kind_from_letter('p'), None);
        assert_eq!(promotion_kind_from_letter('x'), None);
    }
}
