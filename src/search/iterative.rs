//! Iterative deepening move selection.

use super::constants::{INFINITY, MATE_SCORE, MATE_THRESHOLD, MAX_DEPTH};
use super::negamax::{Searcher, TimedOut};
use super::{IterationInfo, SearchOutcome, SearchState};
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::position::Position;

/// Moves to mate implied by a search score, negative when being mated.
#[must_use]
pub fn mate_in(score: i32) -> Option<i32> {
    if score.abs() < MATE_THRESHOLD {
        None
    } else if score > 0 {
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        Some(-(MATE_SCORE + score) / 2)
    }
}

/// Pick a move for the side to move within the clock's budget.
///
/// Fails only when the position has no legal move.
pub fn choose_move<P, C>(board: &mut P, clock: &C, state: &mut SearchState<P::Move>) -> Result<P::Move>
where
    P: Position,
    C: Clock,
{
    search_with_outcome(board, clock, state).map(|outcome| outcome.best_move)
}

/// Deepen one ply at a time until the budget, the depth ceiling or a proven
/// mate stops it, and report what was found.
pub fn search_with_outcome<P, C>(
    board: &mut P,
    clock: &C,
    state: &mut SearchState<P::Move>,
) -> Result<SearchOutcome<P::Move>>
where
    P: Position,
    C: Clock,
{
    let moves = board.legal_moves(false);
    let Some(&first_legal) = moves.first() else {
        return Err(Error::NoLegalMoves);
    };

    if moves.len() == 1 {
        log::debug!("single legal move {first_legal}, skipping search");
        return Ok(SearchOutcome {
            best_move: first_legal,
            score: None,
            move_score: None,
            depth: 0,
            nodes: 0,
            timed_out: false,
            fallback: false,
        });
    }

    let config = state.config;
    let max_depth = config.max_depth.clamp(1, MAX_DEPTH);
    let info_callback = state.info_callback.clone();

    let mut searcher =
        Searcher::new(board, &mut state.cache, clock).with_time_divisor(config.time_divisor);
    let mut score = None;
    let mut depth_reached = 0;
    let mut timed_out = false;

    for depth in 1..=max_depth {
        let pass_score = match searcher.search(-INFINITY, INFINITY, depth as i32, 0) {
            Ok(s) => s,
            Err(TimedOut) => {
                log::debug!("depth {depth} interrupted by the clock");
                timed_out = true;
                break;
            }
        };
        score = Some(pass_score);
        depth_reached = depth;

        let info = IterationInfo {
            depth,
            score: pass_score,
            nodes: searcher.stats().total_nodes(),
            time_ms: clock.elapsed_ms(),
            mate_in: mate_in(pass_score),
            best_move: searcher
                .root_best_move()
                .map(|mv| mv.to_string())
                .unwrap_or_default(),
        };
        log::debug!(
            "depth {} score {} nodes {} time {}ms best {}",
            info.depth,
            info.score,
            info.nodes,
            info.time_ms,
            info.best_move
        );
        if let Some(cb) = &info_callback {
            cb(&info);
        }

        if pass_score.abs() >= MATE_THRESHOLD {
            break;
        }
        if depth < max_depth && searcher.out_of_time() {
            timed_out = true;
            break;
        }
    }

    let nodes = searcher.stats().total_nodes();
    let (best_move, move_score, fallback) = match searcher.root_best_move() {
        Some(mv) => (mv, searcher.root_best_score(), false),
        None => {
            log::warn!("no root move searched in time, falling back to {first_legal}");
            (first_legal, None, true)
        }
    };

    log::info!(
        "chose {best_move} at depth {depth_reached} (score {score:?}, {nodes} nodes, {}ms)",
        clock.elapsed_ms()
    );

    Ok(SearchOutcome {
        best_move,
        score,
        move_score,
        depth: depth_reached,
        nodes,
        timed_out,
        fallback,
    })
}
