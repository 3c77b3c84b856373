//! Helpers shared by the integration tests.

#![allow(dead_code)]

use chess_core::search::{Searcher, INFINITY, MATE_SCORE};
use chess_core::{GameBoard, Position, PositionCache, TurnTimer};
use rand::prelude::*;

pub fn board(fen: &str) -> GameBoard {
    GameBoard::from_fen(fen).expect("valid fen")
}

/// FEN of the same position with colours swapped and the board flipped
/// top to bottom.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    assert!(fields.len() >= 4, "short fen: {fen}");

    let placement = fields[0]
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");

    let side = if fields[1] == "w" { "b" } else { "w" };

    let rights = fields[2];
    let castling = if rights == "-" {
        "-".to_string()
    } else {
        let mut out = String::new();
        for (flag, mirrored) in [('k', 'K'), ('q', 'Q'), ('K', 'k'), ('Q', 'q')] {
            if rights.contains(flag) {
                out.push(mirrored);
            }
        }
        out
    };

    let en_passant = match fields[3].as_bytes() {
        [file, rank] => format!("{}{}", *file as char, (b'1' + b'8' - rank) as char),
        _ => "-".to_string(),
    };

    let clocks = fields[4..].join(" ");
    format!("{placement} {side} {castling} {en_passant} {clocks}")
        .trim_end()
        .to_string()
}

fn swap_case(rank: &str) -> String {
    rank.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Position reached by `plies` random legal moves from the start.
pub fn random_playout(seed: u64, plies: usize) -> GameBoard {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = GameBoard::startpos();
    for _ in 0..plies {
        let moves = pos.legal_moves(false);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.make_move(mv);
    }
    pos
}

/// Negamax without pruning or caching over the full-width plies. Leaves are
/// scored by the searcher's own quiescence, run with the full window and no
/// cache, so both sides see the same capture tree.
pub fn reference_negamax(pos: &mut GameBoard, depth: i32, ply: i32) -> i32 {
    if depth <= 0 {
        let clock = TurnTimer::unlimited();
        let mut cache = PositionCache::disabled();
        return Searcher::new(pos, &mut cache, &clock)
            .search(-INFINITY, INFINITY, 0, ply)
            .expect("unlimited clock");
    }

    if ply > 0 && pos.is_repetition() {
        return 0;
    }

    let moves = pos.legal_moves(false);
    if moves.is_empty() {
        return if pos.in_check() { -MATE_SCORE + ply } else { 0 };
    }

    let mut best = -INFINITY;
    for mv in moves {
        pos.make_move(mv);
        let score = -reference_negamax(pos, depth - 1, ply + 1);
        pos.undo_move();
        best = best.max(score);
    }
    best
}
