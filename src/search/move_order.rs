//! Move ordering for search.
//!
//! Moves are scored once per node and handed out by repeated selection of
//! the best remaining move, so a beta cutoff never pays for sorting the
//! moves that are never tried.

use super::constants::{CACHE_MOVE_SCORE, VICTIM_MULTIPLIER};
use crate::position::Position;
use crate::types::PieceKind;

/// Most-valuable-victim / least-valuable-attacker priority of a capture.
#[inline]
#[must_use]
pub fn mvv_lva_score(attacker: PieceKind, victim: PieceKind) -> i32 {
    VICTIM_MULTIPLIER * victim.tier() - attacker.tier()
}

/// Ordering priority of one move: cached best move, then captures, then quiets.
pub fn move_priority<P: Position + ?Sized>(pos: &P, mv: P::Move, cache_move: Option<P::Move>) -> i32 {
    if cache_move == Some(mv) {
        CACHE_MOVE_SCORE
    } else if let Some(victim) = pos.captured_piece(mv) {
        mvv_lva_score(pos.moving_piece(mv), victim)
    } else {
        0
    }
}

/// Hands out moves in descending priority.
///
/// Selection only swaps on a strictly greater priority, so equal moves keep
/// their generation order relative to the current slot.
pub struct MovePicker<M> {
    moves: Vec<M>,
    scores: Vec<i32>,
    next: usize,
}

impl<M: Copy + PartialEq> MovePicker<M> {
    pub fn new<P>(pos: &P, moves: Vec<M>, cache_move: Option<M>) -> Self
    where
        P: Position<Move = M> + ?Sized,
    {
        let scores = moves
            .iter()
            .map(|&mv| move_priority(pos, mv, cache_move))
            .collect();
        MovePicker {
            moves,
            scores,
            next: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Promote the highest-priority remaining move into the next slot and return it.
    pub fn pick_next(&mut self) -> Option<M> {
        let slot = self.next;
        if slot >= self.moves.len() {
            return None;
        }
        for j in slot + 1..self.moves.len() {
            if self.scores[j] > self.scores[slot] {
                self.moves.swap(slot, j);
                self.scores.swap(slot, j);
            }
        }
        self.next += 1;
        Some(self.moves[slot])
    }
}
