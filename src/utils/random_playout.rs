//! Random legal-move playouts.
//!
//! Picks uniformly among the legal moves of the side to move and drives the
//! public game API, resolving promotions with a random piece. Used to soak
//! the rules with long move sequences; it does no search or evaluation.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Moves and promotions applied during the playout.
    pub actions: usize,
    pub result: Option<GameResult>,
}

pub fn random_legal_move<R: Rng + ?Sized>(game: &GameState, rng: &mut R) -> Option<(Square, Square)> {
    game.legal_moves().as_slice().choose(rng).copied()
}

pub fn random_promotion_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    PROMOTION_KINDS
        .as_slice()
        .choose(rng)
        .map(|kind| kind.letter())
        .unwrap_or('q')
}

/// Apply one random action: a promotion choice if one is pending, otherwise a
/// random legal move. Returns false when nothing could be applied.
pub fn play_random_action<R: Rng + ?Sized>(game: &mut GameState, rng: &mut R) -> bool {
    if game.is_game_over() {
        return false;
    }

    if game.promotion_pending().is_some() {
        return game.promote(random_promotion_letter(rng));
    }

    let Some((from, to)) = random_legal_move(game, rng) else {
        return false;
    };
    if !game.try_move(from, to) {
        warn!(%from, %to, reason = game.last_message(), "generated move was refused");
        return false;
    }
    true
}

/// Play up to `max_actions` random actions or until the game ends.
pub fn play_random_game<R: Rng + ?Sized>(
    game: &mut GameState,
    rng: &mut R,
    max_actions: usize,
) -> PlayoutSummary {
    let mut actions = 0;
    while actions < max_actions && play_random_action(game, rng) {
        actions += 1;
    }

    debug!(actions, result = ?game.result(), "random playout finished");
    PlayoutSummary {
        actions,
        result: game.result(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepted_moves_never_leave_own_king_attacked() {
        for seed in 0..12u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game();

            for _ in 0..200 {
                let mover = game.turn();
                if !play_random_action(&mut game, &mut rng) {
                    break;
                }
                assert!(
                    !is_king_in_check(game.board(), mover),
                    "seed {seed}: {mover} left its king attacked after {:?}",
                    game.move_list().last()
                );
            }
        }
    }

    #[test]
    fn make_then_undo_restores_every_probe() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameState::new_game();
        let squares: Vec<Square> = Square::all().collect();

        for _ in 0..120 {
            let base = *game.board();
            for _ in 0..40 {
                let from = *squares.choose(&mut rng).expect("squares are not empty");
                let to = *squares.choose(&mut rng).expect("squares are not empty");
                let mut probe = base;
                let undo = probe.make_move(from, to, game.en_passant_target(), game.turn());
                probe.undo_move(&undo);
                assert_eq!(probe, base, "round trip failed for {from}->{to}");
            }
            for (from, to) in game.legal_moves() {
                let mut probe = base;
                let undo = probe.make_move(from, to, game.en_passant_target(), game.turn());
                probe.undo_move(&undo);
                assert_eq!(probe, base, "round trip failed for legal {from}->{to}");
            }
            if !play_random_action(&mut game, &mut rng) {
                break;
            }
        }
    }

    #[test]
    fn rejected_attempts_leave_no_trace() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = GameState::new_game();
        let squares: Vec<Square> = Square::all().collect();

        for _ in 0..60 {
            let from = *squares.choose(&mut rng).expect("squares are not empty");
            let to = *squares.choose(&mut rng).expect("squares are not empty");
            let board_before = *game.board();
            let turn_before = game.turn();
            let list_len = game.move_list().len();

            if !game.try_move(from, to) {
                assert_eq!(*game.board(), board_before);
                assert_eq!(game.turn(), turn_before);
                assert_eq!(game.move_list().len(), list_len);
            }
            if game.promotion_pending().is_some() {
                assert!(game.promote('q'));
            }
            if game.is_game_over() {
                game.reset();
            }
        }
    }

    #[test]
    fn playout_stops_at_game_end_or_limit() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameState::new_game();
        let summary = play_random_game(&mut game, &mut rng, 40);
        assert!(summary.actions <= 40);
        if summary.actions < 40 {
            assert!(game.is_game_over());
            assert!(summary.result.is_some());
        }
    }
}
