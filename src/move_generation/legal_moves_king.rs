use crate::errors::RuleViolation;
use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::Delta;

/// King geometry: one step in any direction, or a two-file slide along the
/// rank which is handed to [`can_castle`].
pub fn validate_king_move(
    board: &Board,
    from: Square,
    to: Square,
    turn: Color,
) -> Result<(), RuleViolation> {
    let delta = Delta::between(from, to);
    if delta.d_row == 0 && delta.abs_col() == 2 {
        return can_castle(board, from, to, turn).map(|_| ());
    }
    if delta.is_adjacent() {
        return Ok(());
    }
    Err(RuleViolation::IllegalKingMove)
}

/// Check every castling precondition; the first failure wins.
///
/// Order: king on its home square and unmoved, a two-file move along one
/// rank, king not in check, rook unmoved and present, squares between king
/// and rook empty, and no attacked square on the king's route.
pub fn can_castle(
    board: &Board,
    from: Square,
    to: Square,
    turn: Color,
) -> Result<CastleSide, RuleViolation> {
    let home_row = turn.home_row();
    let king_home = Square::from_parts(home_row, KING_HOME_COL);
    if from != king_home {
        let origin = match turn {
            Color::White => "e1",
            Color::Black => "e8",
        };
        return Err(RuleViolation::CastlingWrongOrigin(origin));
    }
    if board.flags.king_moved(turn) {
        return Err(RuleViolation::CastlingKingMoved);
    }

    let delta = Delta::between(from, to);
    if delta.d_row != 0 || delta.abs_col() != 2 {
        return Err(RuleViolation::NotACastlingMove);
    }

    if is_king_in_check(board, turn) {
        return Err(RuleViolation::CastlingOutOfCheck);
    }

    let side = CastleSide::from_delta(delta.d_col);
    if board.flags.rook_moved(turn, side) {
        return Err(RuleViolation::CastlingRookMoved);
    }
    let rook_home = Square::from_parts(home_row, side.rook_home_col());
    if board.piece_at(rook_home) != Some(Piece::new(turn, PieceKind::Rook)) {
        return Err(RuleViolation::CastlingRookMissing);
    }

    let path_blocked = side
        .between_cols()
        .iter()
        .any(|&col| !board.is_empty(Square::from_parts(home_row, col)));
    if path_blocked {
        return Err(RuleViolation::CastlingPathBlocked);
    }

    let opponent = turn.opposite();
    let route_attacked = side
        .transit_cols()
        .iter()
        .any(|&col| is_square_attacked(board, Square::from_parts(home_row, col), opponent));
    if route_attacked {
        return Err(RuleViolation::CastlingThroughCheck);
    }

    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement::parse_placement;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn king_steps_one_square() {
        let board = parse_placement("4k3/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert_eq!(validate_king_move(&board, sq("e1"), sq("d2"), Color::White), Ok(()));
        assert_eq!(
            validate_king_move(&board, sq("e1"), sq("e3"), Color::White),
            Err(RuleViolation::IllegalKingMove)
        );
    }

    #[test]
    fn both_sides_castle_on_open_back_rank() {
        let board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        assert_eq!(can_castle(&board, sq("e1"), sq("g1"), Color::White), Ok(CastleSide::Kingside));
        assert_eq!(can_castle(&board, sq("e1"), sq("c1"), Color::White), Ok(CastleSide::Queenside));
        assert_eq!(can_castle(&board, sq("e8"), sq("g8"), Color::Black), Ok(CastleSide::Kingside));
        assert_eq!(can_castle(&board, sq("e8"), sq("c8"), Color::Black), Ok(CastleSide::Queenside));
    }

    #[test]
    fn castling_requires_unmoved_pieces() {
        let mut board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        board.flags.white_rook_h = true;
        assert_eq!(
            can_castle(&board, sq("e1"), sq("g1"), Color::White),
            Err(RuleViolation::CastlingRookMoved)
        );
        board.flags.white_king = true;
        assert_eq!(
            can_castle(&board, sq("e1"), sq("c1"), Color::White),
            Err(RuleViolation::CastlingKingMoved)
        );
    }

    #[test]
    fn castling_rejects_missing_rook_and_wrong_origin() {
        let board = parse_placement("4k3/8/8/8/8/8/8/4K2R").expect("placement should parse");
        assert_eq!(
            can_castle(&board, sq("e1"), sq("c1"), Color::White),
            Err(RuleViolation::CastlingRookMoved)
        );

        let mut board = board;
        board.flags.white_rook_a = false;
        assert_eq!(
            can_castle(&board, sq("e1"), sq("c1"), Color::White),
            Err(RuleViolation::CastlingRookMissing)
        );

        let board = parse_placement("4k3/8/8/8/8/8/8/3K3R").expect("placement should parse");
        assert_eq!(
            validate_king_move(&board, sq("d1"), sq("f1"), Color::White),
            Err(RuleViolation::CastlingWrongOrigin("e1"))
        );
    }

    #[test]
    fn castling_path_must_be_empty() {
        let board = Board::starting_position();
        assert_eq!(
            can_castle(&board, sq("e1"), sq("g1"), Color::White),
            Err(RuleViolation::CastlingPathBlocked)
        );

        let board = parse_placement("4k3/8/8/8/8/8/8/RN2K3").expect("placement should parse");
        assert_eq!(
            can_castle(&board, sq("e1"), sq("c1"), Color::White),
            Err(RuleViolation::CastlingPathBlocked)
        );
    }

    #[test]
    fn castling_not_out_of_or_through_check() {
        let board = parse_placement("4r1k1/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        assert_eq!(
            can_castle(&board, sq("e1"), sq("g1"), Color::White),
            Err(RuleViolation::CastlingOutOfCheck)
        );

        let board = parse_placement("5rk1/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        assert_eq!(
            can_castle(&board, sq("e1"), sq("g1"), Color::White),
            Err(RuleViolation::CastlingThroughCheck)
        );
        assert_eq!(can_castle(&board, sq("e1"), sq("c1"), Color::White), Ok(CastleSide::Queenside));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        let board = parse_placement("1r2k3/8/8/8/8/8/8/R3K3").expect("placement should parse");
        assert_eq!(can_castle(&board, sq("e1"), sq("c1"), Color::White), Ok(CastleSide::Queenside));
    }
}
