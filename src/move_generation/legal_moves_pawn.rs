use crate::errors::RuleViolation;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::Delta;

/// Pawn geometry: single push, double push from the start row, diagonal
/// capture, or diagonal step onto the en-passant target.
///
/// Assumes turn ownership and friendly-fire were already checked.
pub fn validate_pawn_move(
    board: &Board,
    from: Square,
    to: Square,
    turn: Color,
    en_passant_target: Option<Square>,
) -> Result<(), RuleViolation> {
    let delta = Delta::between(from, to);
    let direction = turn.pawn_direction();
    let target_empty = board.is_empty(to);

    if delta.d_col == 0 && target_empty {
        if delta.d_row == direction {
            return Ok(());
        }
        if from.row() == turn.pawn_start_row() && delta.d_row == 2 * direction {
            let intermediate = Square::from_parts(
                (from.row() as i8 + direction) as u8,
                from.col(),
            );
            if board.is_empty(intermediate) {
                return Ok(());
            }
            return Err(RuleViolation::PawnBlocked);
        }
        return Err(RuleViolation::IllegalPawnMove);
    }

    if delta.abs_col() == 1 && delta.d_row == direction {
        if !target_empty {
            return Ok(());
        }
        if en_passant_target == Some(to) {
            return Ok(());
        }
        return Err(RuleViolation::PawnCaptureNeedsTarget);
    }

    Err(RuleViolation::IllegalPawnMove)
}

/// True when `piece` is a pawn standing on its promotion row.
#[inline]
pub fn is_pawn_promotion_square(square: Square, piece: Piece) -> bool {
    piece.kind == PieceKind::Pawn && square.row() == piece.color.promotion_row()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement::parse_placement;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn pushes_from_start_row() {
        let board = Board::starting_position();
        assert_eq!(validate_pawn_move(&board, sq("e2"), sq("e3"), Color::White, None), Ok(()));
        assert_eq!(validate_pawn_move(&board, sq("e2"), sq("e4"), Color::White, None), Ok(()));
        assert_eq!(
            validate_pawn_move(&board, sq("e2"), sq("e5"), Color::White, None),
            Err(RuleViolation::IllegalPawnMove)
        );
        assert_eq!(validate_pawn_move(&board, sq("d7"), sq("d5"), Color::Black, None), Ok(()));
        assert_eq!(
            validate_pawn_move(&board, sq("e2"), sq("e1"), Color::White, None),
            Err(RuleViolation::IllegalPawnMove)
        );
    }

    #[test]
    fn double_push_needs_clear_intermediate() {
        let board = parse_placement("4k3/8/8/8/8/4n3/4P3/4K3").expect("placement should parse");
        assert_eq!(
            validate_pawn_move(&board, sq("e2"), sq("e4"), Color::White, None),
            Err(RuleViolation::PawnBlocked)
        );
        assert_eq!(
            validate_pawn_move(&board, sq("e2"), sq("e3"), Color::White, None),
            Err(RuleViolation::IllegalPawnMove)
        );
    }

    #[test]
    fn double_push_only_from_start_row() {
        let board = parse_placement("4k3/8/8/8/8/4P3/8/4K3").expect("placement should parse");
        assert_eq!(
            validate_pawn_move(&board, sq("e3"), sq("e5"), Color::White, None),
            Err(RuleViolation::IllegalPawnMove)
        );
    }

    #[test]
    fn diagonal_needs_enemy_or_en_passant_target() {
        let board = parse_placement("4k3/8/8/3pP3/8/8/8/4K3").expect("placement should parse");
        assert_eq!(
            validate_pawn_move(&board, sq("e5"), sq("d6"), Color::White, None),
            Err(RuleViolation::PawnCaptureNeedsTarget)
        );
        assert_eq!(
            validate_pawn_move(&board, sq("e5"), sq("d6"), Color::White, Some(sq("d6"))),
            Ok(())
        );
        assert_eq!(
            validate_pawn_move(&board, sq("e5"), sq("d4"), Color::White, None),
            Err(RuleViolation::IllegalPawnMove)
        );

        let board = parse_placement("4k3/8/3p4/4P3/8/8/8/4K3").expect("placement should parse");
        assert_eq!(validate_pawn_move(&board, sq("e5"), sq("d6"), Color::White, None), Ok(()));
    }

    #[test]
    fn promotion_rows_depend_on_color() {
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(is_pawn_promotion_square(sq("a8"), white_pawn));
        assert!(!is_pawn_promotion_square(sq("a1"), white_pawn));
        assert!(is_pawn_promotion_square(sq("h1"), black_pawn));
        assert!(!is_pawn_promotion_square(sq("h8"), Piece::new(Color::White, PieceKind::Queen)));
    }
}
