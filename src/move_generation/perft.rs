//! Perft node counting over the rule layer.
//!
//! Walks the move tree with in-place `make_move` / `undo_move`, so every node
//! also exercises the undo path. Promotions fan out into one node per
//! promotion piece, matching the usual perft convention.

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_validator::legal_piece_move_only;
use crate::move_generation::legal_moves_pawn::is_pawn_promotion_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Every fully legal `(from, to)` pair for `turn`.
///
/// Own-king safety is probed by applying the move and undoing it again, so
/// `board` is unchanged on return.
pub fn generate_legal_moves(
    board: &mut Board,
    turn: Color,
    en_passant_target: Option<Square>,
) -> Vec<(Square, Square)> {
    let origins: Vec<Square> = board.pieces_of(turn).map(|(square, _)| square).collect();
    let mut moves = Vec::new();

    for from in origins {
        for to in Square::all() {
            if legal_piece_move_only(board, from, to, turn, en_passant_target).is_err() {
                continue;
            }
            let undo = board.make_move(from, to, en_passant_target, turn);
            let exposed = is_king_in_check(board, turn);
            board.undo_move(&undo);
            if !exposed {
                moves.push((from, to));
            }
        }
    }

    moves
}

pub fn perft(board: &Board, turn: Color, en_passant_target: Option<Square>, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let mut scratch = *board;
    perft_recurse(&mut scratch, turn, en_passant_target, depth, &mut counts);
    counts
}

/// Perft from the current position of a game.
pub fn perft_game(game: &GameState, depth: u8) -> PerftCounts {
    perft(game.board(), game.turn(), game.en_passant_target(), depth)
}

fn perft_recurse(
    board: &mut Board,
    turn: Color,
    en_passant_target: Option<Square>,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for (from, to) in generate_legal_moves(board, turn, en_passant_target) {
        let Some(moving_piece) = board.piece_at(from) else {
            continue;
        };

        let undo = board.make_move(from, to, en_passant_target, turn);
        let next_target = if moving_piece.kind == PieceKind::Pawn
            && (to.row() as i8 - from.row() as i8).abs() == 2
        {
            Square::new((from.row() + to.row()) / 2, to.col())
        } else {
            None
        };

        if is_pawn_promotion_square(to, moving_piece) {
            for kind in PROMOTION_KINDS {
                board.set_piece(to, Some(Piece::new(turn, kind)));
                visit(board, turn, next_target, depth, &undo, true, counts);
            }
            board.set_piece(to, Some(moving_piece));
        } else {
            visit(board, turn, next_target, depth, &undo, false, counts);
        }

        board.undo_move(&undo);
    }
}

fn visit(
    board: &mut Board,
    turn: Color,
    next_target: Option<Square>,
    depth: u8,
    undo: &UndoState,
    promoted: bool,
    counts: &mut PerftCounts,
) {
    if depth > 1 {
        perft_recurse(board, turn.opposite(), next_target, depth - 1, counts);
        return;
    }

    counts.nodes += 1;
    if undo.is_capture() {
        counts.captures += 1;
    }
    if undo.is_en_passant() {
        counts.en_passant += 1;
    }
    if undo.is_castling() {
        counts.castles += 1;
    }
    if promoted {
        counts.promotions += 1;
    }
    if is_king_in_check(board, turn.opposite()) {
        counts.checks += 1;
        if generate_legal_moves(board, turn.opposite(), next_target).is_empty() {
            counts.checkmates += 1;
        }
    }
}
