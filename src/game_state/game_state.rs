//! Turn-taking state machine.
//!
//! `GameState` owns the board and decides what is legal. A move is accepted
//! only when its geometry passes the rule layer and applying it to a copy of
//! the board leaves the mover's king unattacked, so a rejected attempt never
//! touches the live board. After each completed move the side to move is
//! checked for checkmate and stalemate.

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::errors::{NotationError, RuleViolation};
use crate::game_state::chess_rules::promotion_kind_from_letter;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{find_king, is_king_in_check};
use crate::move_generation::legal_move_validator::legal_piece_move_only;
use crate::move_generation::legal_moves_pawn::is_pawn_promotion_square;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::move_notation::{
    finish_promotion_text, format_move_text, pending_promotion_text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Active,
    /// A pawn stands on this square waiting for `promote`.
    AwaitingPromotion(Square),
    GameOver(GameResult),
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    phase: GamePhase,
    /// Square a pawn may capture into en passant; valid for one ply.
    en_passant_target: Option<Square>,
    move_list: Vec<String>,
    last_message: String,
    last_move_text: String,
    pending_promotion_text: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            phase: GamePhase::Active,
            en_passant_target: None,
            move_list: Vec::new(),
            last_message: String::new(),
            last_move_text: String::new(),
            pending_promotion_text: None,
        }
    }

    /// Start from an arbitrary board with `turn` to move. The end state is
    /// evaluated immediately, so a constructed mate is already over.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            turn,
            ..Self::new_game()
        };
        game.update_end_state_for_side_to_move();
        game
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
        self.last_message = "New game.".to_owned();
        debug!("game reset to starting position");
    }

    // --- Queries ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// The side that delivered mate, if the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            GamePhase::GameOver(GameResult::Checkmate) => Some(self.turn.opposite()),
            _ => None,
        }
    }

    #[inline]
    pub fn promotion_pending(&self) -> Option<Square> {
        match self.phase {
            GamePhase::AwaitingPromotion(square) => Some(square),
            _ => None,
        }
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn move_list(&self) -> &[String] {
        &self.move_list
    }

    #[inline]
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    #[inline]
    pub fn last_move_text(&self) -> &str {
        &self.last_move_text
    }

    #[inline]
    pub fn in_check_now(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    // --- Legality ---

    /// Full legality for the side to move: geometry plus own-king safety.
    pub fn is_legal_move(&self, from: Square, to: Square) -> Result<(), RuleViolation> {
        self.is_legal_move_for(from, to, self.turn)
    }

    fn is_legal_move_for(&self, from: Square, to: Square, mover: Color) -> Result<(), RuleViolation> {
        legal_piece_move_only(&self.board, from, to, mover, self.en_passant_target)?;

        // Probe on a copy so the live board is never disturbed.
        let mut probe = self.board;
        probe.make_move(from, to, self.en_passant_target, mover);
        if is_king_in_check(&probe, mover) {
            return Err(RuleViolation::LeavesKingInCheck);
        }
        Ok(())
    }

    /// Every square the piece on `from` may legally move to right now.
    pub fn legal_destinations_from(&self, from: Square) -> BTreeSet<Square> {
        self.legal_destinations_as(from, self.turn)
    }

    fn legal_destinations_as(&self, from: Square, mover: Color) -> BTreeSet<Square> {
        Square::all()
            .filter(|to| self.is_legal_move_for(from, *to, mover).is_ok())
            .collect()
    }

    /// All legal `(from, to)` pairs for the side to move.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.board
            .pieces_of(self.turn)
            .flat_map(|(from, _)| {
                self.legal_destinations_from(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Whether any piece of `color` has at least one legal destination.
    ///
    /// The probe runs as if `color` were to move without changing `turn`.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !self.legal_destinations_as(from, color).is_empty())
    }

    // --- Commands ---

    /// Attempt a move; on failure the reason is left in `last_message`.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        self.attempt_move(from, to).is_ok()
    }

    /// Like [`try_move`](Self::try_move) but takes squares as text, rejecting
    /// malformed coordinates as an ordinary failure.
    pub fn try_move_algebraic(&mut self, from: &str, to: &str) -> bool {
        match parse_pair(from, to) {
            Ok((from, to)) => self.try_move(from, to),
            Err(err) => {
                trace!(%err, "move rejected: bad coordinates");
                self.last_message = err.to_string();
                false
            }
        }
    }

    /// Attempt a move and return the typed reason on failure.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<(), RuleViolation> {
        let outcome = self.commit_move(from, to);
        if let Err(violation) = outcome {
            trace!(%from, %to, %violation, "move rejected");
            self.last_message = violation.to_string();
        }
        outcome
    }

    fn commit_move(&mut self, from: Square, to: Square) -> Result<(), RuleViolation> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(RuleViolation::GameOver),
            GamePhase::AwaitingPromotion(_) => return Err(RuleViolation::PromotionPending),
            GamePhase::Active => {}
        }

        self.is_legal_move(from, to)?;
        let moving_piece = self.board.piece_at(from).ok_or(RuleViolation::NoPieceOnOrigin)?;

        let undo = self
            .board
            .make_move(from, to, self.en_passant_target, self.turn);
        let move_text = format_move_text(&undo);
        self.last_move_text = move_text.clone();

        // Only a two-square pawn advance opens an en-passant window.
        let advanced_two = moving_piece.kind == PieceKind::Pawn
            && (to.row() as i8 - from.row() as i8).abs() == 2;
        self.en_passant_target = if advanced_two {
            Square::new((from.row() + to.row()) / 2, to.col())
        } else {
            None
        };

        debug!(%from, %to, text = %move_text, color = %self.turn, "move committed");

        if is_pawn_promotion_square(to, moving_piece) {
            self.phase = GamePhase::AwaitingPromotion(to);
            self.last_message = format!("{move_text} (promotion)");
            self.pending_promotion_text = Some(pending_promotion_text(&move_text));
            return Ok(());
        }

        self.move_list.push(move_text);
        self.turn = self.turn.opposite();
        self.update_end_state_for_side_to_move();
        Ok(())
    }

    /// Resolve a pending promotion with `q`, `r`, `b` or `n` (either case).
    pub fn promote(&mut self, letter: char) -> bool {
        self.attempt_promotion(letter).is_ok()
    }

    pub fn attempt_promotion(&mut self, letter: char) -> Result<(), RuleViolation> {
        let outcome = self.commit_promotion(letter);
        if let Err(violation) = outcome {
            trace!(%letter, %violation, "promotion rejected");
            self.last_message = violation.to_string();
        }
        outcome
    }

    fn commit_promotion(&mut self, letter: char) -> Result<(), RuleViolation> {
        let GamePhase::AwaitingPromotion(square) = self.phase else {
            return Err(RuleViolation::NoPromotionPending);
        };

        let kind = promotion_kind_from_letter(letter).ok_or(RuleViolation::InvalidPromotionPiece)?;

        let pawn = match self.board.piece_at(square) {
            Some(piece) if piece.kind == PieceKind::Pawn => piece,
            _ => {
                warn!(%square, "promotion square holds no pawn; clearing pending promotion");
                self.phase = GamePhase::Active;
                self.pending_promotion_text = None;
                return Err(RuleViolation::PromotionPawnMissing);
            }
        };

        self.board.set_piece(square, Some(Piece::new(pawn.color, kind)));
        self.phase = GamePhase::Active;

        let pending = self.pending_promotion_text.take().unwrap_or_default();
        let final_text = finish_promotion_text(&pending, kind);
        debug!(%square, text = %final_text, "promotion resolved");
        self.move_list.push(final_text.clone());
        self.last_move_text = final_text;

        self.turn = self.turn.opposite();
        self.update_end_state_for_side_to_move();
        Ok(())
    }

    /// Decide checkmate, stalemate or play-on for `turn` and set the status.
    fn update_end_state_for_side_to_move(&mut self) {
        if find_king(&self.board, self.turn).is_none() {
            warn!(color = %self.turn, "no king on the board; it is never in check");
        }
        let in_check = self.in_check_now(self.turn);

        if !self.has_any_legal_move(self.turn) {
            if in_check {
                self.phase = GamePhase::GameOver(GameResult::Checkmate);
                self.last_message = format!("Checkmate! {} wins.", self.turn.opposite());
            } else {
                self.phase = GamePhase::GameOver(GameResult::Stalemate);
                self.last_message = "Stalemate! Draw.".to_owned();
            }
            debug!(phase = ?self.phase, "game over");
            return;
        }

        self.phase = GamePhase::Active;
        self.last_message = match (in_check, self.last_move_text.is_empty()) {
            (true, true) => "Check!".to_owned(),
            (true, false) => format!("{} (Check!)", self.last_move_text),
            (false, _) => self.last_move_text.clone(),
        };
    }
}

fn parse_pair(from: &str, to: &str) -> Result<(Square, Square), NotationError> {
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}
