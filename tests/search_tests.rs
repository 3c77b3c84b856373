//! Search tests to verify the engine finds correct moves in various positions.

mod common;

use chess::ChessMove;

use chess_core::search::{Searcher, INFINITY, MATE_SCORE};
use chess_core::{
    choose_move, search_with_outcome, Error, GameBoard, Position, PositionCache, SearchConfig,
    SearchState, TurnTimer,
};
use common::{board, mirror_fen, reference_negamax};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "rnb1kbnr/pppppppp/8/8/3q4/4P3/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
    "4k3/8/3r4/2q5/1P6/3N4/8/4K3 w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn state(max_depth: u32) -> SearchState<ChessMove> {
    SearchState::new(SearchConfig::default().with_max_depth(max_depth).with_cache_mb(1))
}

fn fixed_depth_score(fen: &str, depth: i32, cache: &mut PositionCache<ChessMove>) -> i32 {
    let mut pos = board(fen);
    let clock = TurnTimer::unlimited();
    let score = Searcher::new(&mut pos, cache, &clock)
        .search(-INFINITY, INFINITY, depth, 0)
        .expect("unlimited clock");
    assert_eq!(pos.fen(), board(fen).fen(), "search left the board changed");
    score
}

/// Depth 4 from the start: a normal opening move and a roughly level score.
#[test]
fn startpos_depth_four_plays_a_developing_move() {
    let mut pos = GameBoard::startpos();
    let outcome = search_with_outcome(&mut pos, &TurnTimer::unlimited(), &mut state(4))
        .expect("startpos has moves");

    let uci = outcome.best_move.to_string();
    let sensible = [
        "e2e4", "e2e3", "d2d4", "d2d3", "c2c4", "c2c3", "g1f3", "b1c3",
    ];
    assert!(sensible.contains(&uci.as_str()), "unexpected opening move {uci}");
    assert_eq!(outcome.depth, 4);
    let score = outcome.score.expect("depth 4 completed");
    assert!(score.abs() < 100, "startpos score {score}");
}

/// Test that the engine takes an undefended queen
#[test]
fn wins_undefended_queen() {
    let mut pos = board("rnb1kbnr/pppppppp/8/8/3q4/4P3/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    for depth in 2..=3 {
        let outcome = search_with_outcome(&mut pos, &TurnTimer::unlimited(), &mut state(depth))
            .expect("position has moves");
        assert_eq!(outcome.best_move.to_string(), "e3d4", "depth {depth}");
        let score = outcome.score.expect("completed");
        assert!(score > 700, "capture should show the gain, got {score}");
    }
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    let mut pos = board("r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3");
    let mv = choose_move(&mut pos, &TurnTimer::unlimited(), &mut state(3)).expect("move");
    assert_ne!(mv.to_string(), "f3c6", "Should not trade the queen for a knight");
}

#[test]
fn zero_budget_still_returns_a_legal_move() {
    for fen in POSITIONS {
        let mut pos = board(fen);
        let outcome = search_with_outcome(&mut pos, &TurnTimer::new(0), &mut state(10))
            .expect("position has moves");
        assert!(outcome.fallback);
        assert!(pos.legal_moves(false).contains(&outcome.best_move));
    }
}

#[test]
fn short_budget_completes_at_least_one_depth() {
    let mut pos = GameBoard::startpos();
    let outcome = search_with_outcome(&mut pos, &TurnTimer::new(3_000), &mut state(64))
        .expect("startpos has moves");
    assert!(outcome.depth >= 1);
    assert!(!outcome.fallback);
    assert!(pos.legal_moves(false).contains(&outcome.best_move));
}

#[test]
fn search_is_deterministic() {
    let fen = POSITIONS[1];
    let first = search_with_outcome(&mut board(fen), &TurnTimer::unlimited(), &mut state(3))
        .expect("move");
    let second = search_with_outcome(&mut board(fen), &TurnTimer::unlimited(), &mut state(3))
        .expect("move");
    assert_eq!(first, second);
}

#[test]
fn cache_does_not_change_fixed_depth_scores() {
    for fen in POSITIONS {
        for depth in 1..=2 {
            let cached = fixed_depth_score(fen, depth, &mut PositionCache::new(1));
            let uncached = fixed_depth_score(fen, depth, &mut PositionCache::disabled());
            assert_eq!(cached, uncached, "depth {depth} fen {fen}");
        }
    }
}

#[test]
fn alpha_beta_matches_full_width_reference() {
    for fen in POSITIONS {
        for depth in 1..=2 {
            let pruned = fixed_depth_score(fen, depth, &mut PositionCache::disabled());
            let full = reference_negamax(&mut board(fen), depth, 0);
            assert_eq!(pruned, full, "depth {depth} fen {fen}");
        }
    }
}

#[test]
fn mirrored_positions_search_to_the_same_score() {
    for fen in POSITIONS {
        let mirrored = mirror_fen(fen);
        for depth in 1..=3 {
            let score = fixed_depth_score(fen, depth, &mut PositionCache::disabled());
            let mirror_score = fixed_depth_score(&mirrored, depth, &mut PositionCache::disabled());
            assert_eq!(score, mirror_score, "depth {depth} fen {fen} mirror {mirrored}");
        }
    }
}

#[test]
fn terminal_scores_depend_on_ply() {
    let mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    let clock = TurnTimer::unlimited();
    for ply in [0, 1, 4, 9] {
        let mut pos = board(mated);
        let mut cache = PositionCache::new(1);
        let score = Searcher::new(&mut pos, &mut cache, &clock)
            .search(-INFINITY, INFINITY, 2, ply)
            .expect("no timeout");
        assert_eq!(score, -MATE_SCORE + ply);
        assert!(cache.probe(pos.key()).is_none(), "terminal score was cached");
    }

    let stalemate = "k7/8/1QK5/8/8/8/8/8 b - - 0 1";
    assert_eq!(fixed_depth_score(stalemate, 3, &mut PositionCache::new(1)), 0);
}

#[test]
fn finished_games_are_reported() {
    for fen in [
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        "k7/8/1QK5/8/8/8/8/8 b - - 0 1",
    ] {
        let result = choose_move(&mut board(fen), &TurnTimer::unlimited(), &mut state(4));
        assert_eq!(result, Err(Error::NoLegalMoves), "fen {fen}");
    }
}

#[test]
fn one_state_serves_a_whole_game_fragment() {
    let mut st = state(2);
    let mut pos = GameBoard::startpos();
    for _ in 0..6 {
        let mv = choose_move(&mut pos, &TurnTimer::unlimited(), &mut st).expect("game goes on");
        assert!(pos.legal_moves(false).contains(&mv));
        pos.make_move(mv);
    }
    assert_eq!(pos.line_len(), 6);
}
