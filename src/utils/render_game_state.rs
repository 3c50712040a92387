//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the interactive loop, tests and
//! diagnostics. Highlighted squares (legal destinations) are drawn as `*`.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;

/// Glyph set used when drawing pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Render the board with rank 8 at the top.
pub fn render_game_state(game_state: &GameState, style: BoardStyle) -> String {
    render_with_highlights(game_state, style, &BTreeSet::new())
}

/// Render the board, marking every square in `highlights` that is empty.
/// Occupied highlighted squares (captures) are bracketed instead, with the
/// brackets taking the place of the neighbouring separators.
pub fn render_with_highlights(
    game_state: &GameState,
    style: BoardStyle,
    highlights: &BTreeSet<Square>,
) -> String {
    let mut out = String::new();

    out.push_str("   a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push_str(" ");

        // A bracketed cell borrows the separator on both sides, so every row
        // keeps the same width.
        let mut close_bracket = false;
        for col in 0..8u8 {
            let square = Square::from_parts(row, col);
            let highlighted = highlights.contains(&square);
            let occupant = game_state.piece_at(square);
            let glyph = match occupant {
                Some(piece) => piece_glyph(piece, style),
                None if highlighted => '*',
                None => empty_glyph(style),
            };

            let bracketed = highlighted && occupant.is_some();
            out.push(match (bracketed, close_bracket) {
                (true, _) => '[',
                (false, true) => ']',
                (false, false) => ' ',
            });
            out.push(glyph);
            close_bracket = bracketed;
        }

        out.push(if close_bracket { ']' } else { ' ' });
        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("   a b c d e f g h");

    out
}

fn empty_glyph(style: BoardStyle) -> char {
    match style {
        BoardStyle::Unicode => '·',
        BoardStyle::Ascii => '.',
    }
}

fn piece_glyph(piece: Piece, style: BoardStyle) -> char {
    if style == BoardStyle::Ascii {
        return piece.to_char();
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
